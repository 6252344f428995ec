//! GitHub access for the closing reference audit.
//!
//! This module wraps Octocrab to issue the open pull request GraphQL query,
//! validates tokens and repository identifiers, and drives the cursor-based
//! traversal that feeds the analyzers. Errors are mapped into user-friendly
//! variants so callers never see Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod traversal;

pub use error::AuditError;
pub use gateway::{OctocrabGraphqlGateway, PageRequest, PullRequestPageGateway};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{Issue, PullRequestNode, PullRequestPage, RepositorySummary};
pub use pagination::{MAX_PAGE_SIZE, PageInfo, PageSize, TraversalLimits};
pub use traversal::{PageReducer, PullRequestTraversal, TraversalOutcome};

#[cfg(test)]
pub use gateway::MockPullRequestPageGateway;
