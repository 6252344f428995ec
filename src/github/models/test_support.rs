//! Test helpers for constructing issue, pull request and page fixtures.
//!
//! # Examples
//!
//! ```
//! use closing_refs::github::models::test_support::{closed_issue, open_issue, pull_request};
//!
//! let pr = pull_request(10, vec![closed_issue(1), open_issue(2)]);
//! assert_eq!(pr.pull_request.number, 10);
//! assert_eq!(pr.closing_issues.len(), 2);
//! ```

use chrono::{DateTime, TimeZone, Utc};

use super::{Issue, PullRequestNode, PullRequestPage, RepositorySummary};
use crate::github::pagination::PageInfo;

/// Repository URL used by every fixture page.
pub const FIXTURE_REPOSITORY_URL: &str = "https://github.com/octo/repo";

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.timestamp_opt(1_704_067_200, 0)
        .single()
        .unwrap_or_default()
}

/// Constructs an open issue titled `Issue {number}`.
#[must_use]
pub fn open_issue(number: u64) -> Issue {
    Issue {
        title: format!("Issue {number}"),
        number,
        closed: false,
        url: format!("{FIXTURE_REPOSITORY_URL}/issues/{number}"),
        created_at: fixture_timestamp(),
        closed_at: None,
    }
}

/// Constructs a closed issue titled `Issue {number}`.
#[must_use]
pub fn closed_issue(number: u64) -> Issue {
    Issue {
        closed: true,
        closed_at: Some(fixture_timestamp()),
        ..open_issue(number)
    }
}

/// Constructs an open pull request titled `PR {number}` with the given
/// closing issues.
#[must_use]
pub fn pull_request(number: u64, closing_issues: Vec<Issue>) -> PullRequestNode {
    PullRequestNode {
        pull_request: Issue {
            title: format!("PR {number}"),
            number,
            closed: false,
            url: format!("{FIXTURE_REPOSITORY_URL}/pull/{number}"),
            created_at: fixture_timestamp(),
            closed_at: None,
        },
        closing_issues,
    }
}

/// Constructs a page of pull requests.
///
/// A `next_cursor` of `Some` marks the page as having a successor.
#[must_use]
pub fn page(pull_requests: Vec<PullRequestNode>, next_cursor: Option<&str>) -> PullRequestPage {
    PullRequestPage {
        repository: RepositorySummary {
            url: FIXTURE_REPOSITORY_URL.to_owned(),
            description: "Fixture repository".to_owned(),
        },
        pull_requests,
        page_info: PageInfo::new(next_cursor.map(ToOwned::to_owned), next_cursor.is_some()),
    }
}
