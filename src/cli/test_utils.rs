//! Shared test utilities for CLI tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use closing_refs::github::PageRequest;
use closing_refs::{
    AuditError, ClosingRefsConfig, PullRequestPage, PullRequestPageGateway, RepositoryLocator,
};

/// A gateway that records each request and replays preconfigured pages.
#[derive(Clone, Default)]
pub struct CapturingGateway {
    /// Cursors of every request received, in order.
    pub captured: Arc<Mutex<Vec<Option<String>>>>,
    /// Responses returned in order, one per request.
    pub responses: Arc<Mutex<VecDeque<Result<PullRequestPage, AuditError>>>>,
}

impl CapturingGateway {
    /// Creates a gateway replaying `pages` in order.
    pub fn with_pages(pages: Vec<Result<PullRequestPage, AuditError>>) -> Self {
        Self {
            captured: Arc::default(),
            responses: Arc::new(Mutex::new(pages.into())),
        }
    }

    /// Number of requests received.
    pub fn request_count(&self) -> usize {
        self.cursors().len()
    }

    /// Cursors of every request received.
    pub fn cursors(&self) -> Vec<Option<String>> {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .clone()
    }
}

#[async_trait]
impl PullRequestPageGateway for CapturingGateway {
    async fn open_pull_requests(
        &self,
        _locator: &RepositoryLocator,
        request: &PageRequest,
    ) -> Result<PullRequestPage, AuditError> {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .push(request.after.clone());

        self.responses
            .lock()
            .expect("response mutex should be available")
            .pop_front()
            .expect("no more scripted responses")
    }
}

/// Configuration naming `octo/repo` with an explicit token.
pub fn audit_config() -> ClosingRefsConfig {
    ClosingRefsConfig {
        token: Some("ghp_example".to_owned()),
        owner: Some("octo".to_owned()),
        name: Some("repo".to_owned()),
        ..Default::default()
    }
}
