//! Detection of open issues targeted by more than one open pull request.
//!
//! GitHub offers no direct issue-to-closing-PR listing, so the mapping is
//! rebuilt from the pull request side: every open closing issue collects the
//! pull requests that reference it.

use std::collections::HashMap;

use crate::github::error::AuditError;
use crate::github::models::{Issue, PullRequestPage};
use crate::github::traversal::PageReducer;

/// Minimum number of open pull requests for an issue to count as contested.
const CONTESTED_THRESHOLD: usize = 2;

/// An open issue that several open pull requests would close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestedIssue {
    /// The contested issue.
    pub issue: Issue,
    /// Pull requests referencing it, in the order they were seen.
    pub pull_requests: Vec<Issue>,
}

/// Accumulates an issue-to-pull-requests multimap keyed by issue number.
#[derive(Debug, Default)]
pub struct ContestedIssueAnalyzer {
    contenders: HashMap<Issue, Vec<Issue>>,
}

impl PageReducer for ContestedIssueAnalyzer {
    type Output = Vec<ContestedIssue>;

    fn on_page(&mut self, page: &PullRequestPage) -> Result<(), AuditError> {
        for node in page.pull_requests.iter().filter(|node| node.has_closing_issues()) {
            for issue in node.closing_issues.iter().filter(|issue| !issue.closed) {
                let pull_requests = self.contenders.entry(issue.clone()).or_default();
                if !pull_requests.contains(&node.pull_request) {
                    pull_requests.push(node.pull_request.clone());
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Self::Output {
        let mut contested: Vec<ContestedIssue> = self
            .contenders
            .into_iter()
            .filter(|(_, pull_requests)| pull_requests.len() >= CONTESTED_THRESHOLD)
            .map(|(issue, pull_requests)| ContestedIssue {
                issue,
                pull_requests,
            })
            .collect();
        contested.sort_by(|left, right| left.issue.cmp(&right.issue));
        contested
    }
}
