//! Wire shapes for the open pull request GraphQL query.
//!
//! Types prefixed with `Api` are deserialisation targets that convert into
//! the public domain models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::github::models::{Issue, PullRequestNode, PullRequestPage, RepositorySummary};
use crate::github::pagination::PageInfo;

/// GraphQL envelope; the endpoint answers 200 even when the query fails.
#[derive(Debug, Deserialize)]
pub(super) struct GraphqlResponse<T> {
    pub(super) data: Option<T>,
    #[serde(default)]
    pub(super) errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphqlError {
    pub(super) message: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RepositoryData {
    pub(super) repository: Option<ApiRepository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiRepository {
    description: Option<String>,
    url: String,
    pull_requests: ApiPullRequestConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPullRequestConnection {
    #[serde(default)]
    nodes: Vec<Option<ApiPullRequestNode>>,
    page_info: ApiPageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPullRequestNode {
    #[serde(flatten)]
    issue: ApiIssue,
    closing_issues_references: Option<ApiIssueConnection>,
}

#[derive(Debug, Deserialize)]
struct ApiIssueConnection {
    #[serde(default)]
    nodes: Vec<Option<ApiIssue>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiIssue {
    title: String,
    number: u64,
    closed: bool,
    url: String,
    created_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPageInfo {
    end_cursor: Option<String>,
    has_next_page: bool,
}

impl From<ApiIssue> for Issue {
    fn from(value: ApiIssue) -> Self {
        Self {
            title: value.title,
            number: value.number,
            closed: value.closed,
            url: value.url,
            created_at: value.created_at,
            closed_at: value.closed_at,
        }
    }
}

impl From<ApiPullRequestNode> for PullRequestNode {
    fn from(value: ApiPullRequestNode) -> Self {
        let closing_issues = value
            .closing_issues_references
            .map(|connection| connection.nodes.into_iter().flatten().map(Issue::from).collect())
            .unwrap_or_default();

        Self {
            pull_request: value.issue.into(),
            closing_issues,
        }
    }
}

impl From<ApiRepository> for PullRequestPage {
    fn from(value: ApiRepository) -> Self {
        let connection = value.pull_requests;
        Self {
            repository: RepositorySummary {
                url: value.url,
                description: value.description.unwrap_or_default(),
            },
            pull_requests: connection
                .nodes
                .into_iter()
                .flatten()
                .map(PullRequestNode::from)
                .collect(),
            page_info: PageInfo::new(
                connection.page_info.end_cursor,
                connection.page_info.has_next_page,
            ),
        }
    }
}
