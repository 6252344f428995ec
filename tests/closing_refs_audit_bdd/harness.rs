//! GraphQL payload builders and mock mounting for the audit BDD tests.

use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::state::SharedRuntime;

const REPOSITORY_URL: &str = "https://github.com/octo/repo";

pub(crate) fn issue_json(number: u64, closed: bool) -> Value {
    json!({
        "title": format!("Issue {number}"),
        "number": number,
        "closed": closed,
        "url": format!("{REPOSITORY_URL}/issues/{number}"),
        "createdAt": "2024-01-01T00:00:00Z",
        "closedAt": if closed { Value::from("2024-02-01T00:00:00Z") } else { Value::Null }
    })
}

pub(crate) fn pull_request_json(number: u64, closing_issues: Vec<Value>) -> Value {
    json!({
        "title": format!("PR {number}"),
        "number": number,
        "closed": false,
        "url": format!("{REPOSITORY_URL}/pull/{number}"),
        "createdAt": "2024-01-01T00:00:00Z",
        "closedAt": null,
        "closingIssuesReferences": { "nodes": closing_issues }
    })
}

/// Builds a successful response; `next_cursor` marks a following page.
pub(crate) fn page_json(nodes: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "data": {
            "repository": {
                "description": "Audit fixture",
                "url": REPOSITORY_URL,
                "pullRequests": {
                    "nodes": nodes,
                    "pageInfo": {
                        "endCursor": next_cursor.unwrap_or("end"),
                        "hasNextPage": next_cursor.is_some()
                    }
                }
            }
        }
    })
}

/// Serves `body` for the request carrying `cursor`.
pub(crate) fn mount_page(
    runtime: &SharedRuntime,
    server: &MockServer,
    cursor: Option<&str>,
    body: Value,
) {
    let mock = Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "cursor": cursor } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body));

    runtime.block_on(mock.mount(server));
}
