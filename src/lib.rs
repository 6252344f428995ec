//! closing-refs library crate auditing pull request closing references.
//!
//! The library pages through a repository's open pull requests with the
//! GitHub GraphQL API, folds every page into an analyzer, and renders two
//! reports: open pull requests whose closing issues are all closed already,
//! and open issues that more than one open pull request would close.

pub mod analysis;
pub mod config;
pub mod github;
pub mod progress;
pub mod report;

pub use analysis::{
    ContestedIssue, ContestedIssueAnalyzer, StalePullRequest, StalePullRequestAnalyzer,
};
pub use config::{ClosingRefsConfig, Subcommand};
pub use github::{
    AuditError, Issue, OctocrabGraphqlGateway, PageReducer, PageSize, PersonalAccessToken,
    PullRequestPage, PullRequestPageGateway, PullRequestTraversal, RepositoryLocator,
    RepositorySummary, TraversalLimits, TraversalOutcome,
};
pub use progress::{NoopProgressSink, ProgressSink, TraversalEvent, WriterProgressSink};
