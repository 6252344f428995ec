//! Domain models for one page of open pull requests and their closing issues.
//!
//! GitHub models pull requests as a specialised issue, so a single [`Issue`]
//! type describes both. The wire shapes returned by the GraphQL endpoint live
//! in the gateway and convert into these types.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

use super::pagination::PageInfo;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Upper bound on closing issues fetched per pull request.
///
/// The query requests `closingIssuesReferences(last: 100)` without paging, so
/// a pull request that closes more issues than this is silently truncated.
pub const MAX_CLOSING_ISSUES: u8 = 100;

/// An issue or pull request as reported by GitHub.
///
/// Identity is the repository-unique `number`: equality, hashing and ordering
/// ignore title, URL and timestamps.
#[derive(Debug, Clone)]
pub struct Issue {
    /// Issue or pull request title.
    pub title: String,
    /// Repository-unique number (for example `#123`).
    pub number: u64,
    /// Whether the issue is closed.
    pub closed: bool,
    /// Absolute URL for display.
    pub url: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Closing timestamp; `None` while the issue is open.
    pub closed_at: Option<DateTime<Utc>>,
}

impl PartialEq for Issue {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Issue {}

impl Hash for Issue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }
}

/// An open pull request together with the issues it would close on merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestNode {
    /// The pull request itself.
    pub pull_request: Issue,
    /// Closing issue references, in the order GitHub returned them.
    pub closing_issues: Vec<Issue>,
}

impl PullRequestNode {
    /// Returns true when the pull request references at least one closing
    /// issue.
    #[must_use]
    pub const fn has_closing_issues(&self) -> bool {
        !self.closing_issues.is_empty()
    }
}

/// Repository summary returned alongside every page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Repository URL.
    pub url: String,
    /// Repository description, empty when unset.
    pub description: String,
}

/// One page of open pull requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestPage {
    /// Repository summary.
    pub repository: RepositorySummary,
    /// Pull requests on this page.
    pub pull_requests: Vec<PullRequestNode>,
    /// Cursor state for fetching the next page.
    pub page_info: PageInfo,
}

impl PullRequestPage {
    /// Number of pull requests on this page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pull_requests.len()
    }

    /// Returns true when the page carries no pull requests.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pull_requests.is_empty()
    }
}
