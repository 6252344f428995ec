//! Octocrab-backed GraphQL gateway for open pull requests.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde_json::json;

use crate::github::error::AuditError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::PullRequestPage;

use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;
use super::{PageRequest, PullRequestPageGateway};

mod types;

use types::{GraphqlResponse, RepositoryData};

static OPEN_PULL_REQUESTS_QUERY: &str = include_str!("open_pull_requests.graphql");

/// Octocrab-backed gateway issuing the open pull request query.
pub struct OctocrabGraphqlGateway {
    client: Octocrab,
}

impl OctocrabGraphqlGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and repository locator.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::InvalidUrl` when the base URI cannot be parsed or
    /// `AuditError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, AuditError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl PullRequestPageGateway for OctocrabGraphqlGateway {
    async fn open_pull_requests(
        &self,
        locator: &RepositoryLocator,
        request: &PageRequest,
    ) -> Result<PullRequestPage, AuditError> {
        let body = json!({
            "query": OPEN_PULL_REQUESTS_QUERY,
            "variables": {
                "owner": locator.owner().as_str(),
                "name": locator.repository().as_str(),
                "pageSize": request.page_size.get(),
                "cursor": request.after,
            }
        });

        let response: GraphqlResponse<RepositoryData> = self
            .client
            .post("/graphql", Some(&body))
            .await
            .map_err(|error| map_octocrab_error("query open pull requests", &error))?;

        into_page(response, locator)
    }
}

fn into_page(
    response: GraphqlResponse<RepositoryData>,
    locator: &RepositoryLocator,
) -> Result<PullRequestPage, AuditError> {
    if !response.errors.is_empty() {
        let messages: Vec<&str> = response
            .errors
            .iter()
            .map(|error| error.message.as_str())
            .collect();
        return Err(AuditError::Api {
            message: format!(
                "query open pull requests failed: {joined}",
                joined = messages.join("; ")
            ),
        });
    }

    let repository = response
        .data
        .and_then(|data| data.repository)
        .ok_or_else(|| AuditError::Api {
            message: format!("repository {locator} not found in GraphQL response"),
        })?;

    Ok(repository.into())
}
