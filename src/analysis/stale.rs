//! Detection of open pull requests whose closing issues are all closed.
//!
//! A pull request with no closing issues carries no signal and is never
//! reported; "no data" is distinct from "fully satisfied".

use crate::github::error::AuditError;
use crate::github::models::{Issue, PullRequestPage};
use crate::github::traversal::PageReducer;

/// An open pull request whose every closing issue is already closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StalePullRequest {
    /// The stale pull request.
    pub pull_request: Issue,
    /// Its closing issues, all of which are closed.
    pub closed_issues: Vec<Issue>,
}

/// Accumulates stale pull requests in page order, then PR-within-page order.
#[derive(Debug, Default)]
pub struct StalePullRequestAnalyzer {
    stale: Vec<StalePullRequest>,
}

impl PageReducer for StalePullRequestAnalyzer {
    type Output = Vec<StalePullRequest>;

    fn on_page(&mut self, page: &PullRequestPage) -> Result<(), AuditError> {
        for node in page.pull_requests.iter().filter(|node| node.has_closing_issues()) {
            let closed_issues: Vec<Issue> = node
                .closing_issues
                .iter()
                .filter(|issue| issue.closed)
                .cloned()
                .collect();

            if closed_issues.len() == node.closing_issues.len() {
                self.stale.push(StalePullRequest {
                    pull_request: node.pull_request.clone(),
                    closed_issues,
                });
            }
        }
        Ok(())
    }

    fn finish(self) -> Self::Output {
        self.stale
    }
}
