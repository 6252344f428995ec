//! Relationship analyzers folding pull request pages into report aggregates.
//!
//! Each analyzer implements [`PageReducer`](crate::github::PageReducer) and is
//! driven by [`PullRequestTraversal`](crate::github::PullRequestTraversal).

pub mod contested;
pub mod stale;

pub use contested::{ContestedIssue, ContestedIssueAnalyzer};
pub use stale::{StalePullRequest, StalePullRequestAnalyzer};
