//! Gateways for fetching pages of open pull requests through Octocrab.
//!
//! The trait-based seam lets the traversal engine run against mocks in tests
//! while the Octocrab implementation issues real GraphQL requests.

mod client;
mod error_mapping;
mod graphql;

pub use graphql::OctocrabGraphqlGateway;

use async_trait::async_trait;

use crate::github::error::AuditError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::PullRequestPage;
use crate::github::pagination::PageSize;

/// Parameters for fetching a single page of open pull requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of pull requests to request.
    pub page_size: PageSize,
    /// Cursor to resume after; `None` requests the first page.
    pub after: Option<String>,
}

impl PageRequest {
    /// Request for the first page.
    #[must_use]
    pub const fn first(page_size: PageSize) -> Self {
        Self {
            page_size,
            after: None,
        }
    }

    /// Request for the page following `cursor`.
    #[must_use]
    pub fn after(page_size: PageSize, cursor: &str) -> Self {
        Self {
            page_size,
            after: Some(cursor.to_owned()),
        }
    }
}

/// Gateway that can load pages of open pull requests with their closing
/// issues.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestPageGateway: Send + Sync {
    /// Fetch one page of open pull requests.
    async fn open_pull_requests(
        &self,
        locator: &RepositoryLocator,
        request: &PageRequest,
    ) -> Result<PullRequestPage, AuditError>;
}
