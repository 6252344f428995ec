//! Scenario state and audit execution for the closing reference BDD tests.

use std::cell::RefCell;
use std::rc::Rc;

use closing_refs::report::{write_contested_report, write_stale_report};
use closing_refs::{
    AuditError, ContestedIssueAnalyzer, NoopProgressSink, OctocrabGraphqlGateway,
    PersonalAccessToken, PullRequestTraversal, RepositoryLocator, StalePullRequestAnalyzer,
    Subcommand, TraversalLimits,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Tokio runtime shared between steps of one scenario.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// One numbered report entry reduced to issue numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportEntry {
    pub(crate) primary: u64,
    pub(crate) related: Vec<u64>,
}

/// Outcome of a successful audit run.
#[derive(Debug, Clone)]
pub(crate) struct AuditReport {
    pub(crate) entries: Vec<ReportEntry>,
    pub(crate) rendered: String,
    pub(crate) pages: u64,
}

#[derive(ScenarioState, Default)]
pub(crate) struct AuditState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) token: Slot<String>,
    pub(crate) report: Slot<AuditReport>,
    pub(crate) error: Slot<AuditError>,
}

/// Ensures the runtime and mock server exist, returning the runtime.
pub(crate) fn ensure_runtime_and_server(audit_state: &AuditState) -> SharedRuntime {
    if audit_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        audit_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = audit_state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if audit_state.server.with_ref(|_| ()).is_none() {
        audit_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

/// Runs the audit selected by `subcommand` against the mock server.
pub(crate) fn run_audit(
    audit_state: &AuditState,
    subcommand: Subcommand,
    repository: &str,
) -> Result<AuditReport, AuditError> {
    let server_url = audit_state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| AuditError::Api {
            message: "mock server URL missing".to_owned(),
        })?;
    let (owner, name) = repository
        .split_once('/')
        .ok_or_else(|| AuditError::InvalidArgument {
            argument: repository.to_owned(),
        })?;
    let locator = RepositoryLocator::from_owner_repo(owner, name)?.with_api_base(&server_url)?;
    let runtime = audit_state.runtime.get().ok_or_else(|| AuditError::Api {
        message: "runtime not initialised".to_owned(),
    })?;

    runtime.block_on(async {
        let token_value = audit_state.token.get().ok_or(AuditError::MissingToken)?;
        let token = PersonalAccessToken::new(token_value)?;
        let gateway = OctocrabGraphqlGateway::for_token(&token, &locator)?;
        let traversal = PullRequestTraversal::new(&gateway);
        let limits = TraversalLimits::default();
        let mut rendered = Vec::new();

        let (entries, pages) = match subcommand {
            Subcommand::StalePullRequests => {
                let outcome = traversal
                    .run(
                        &locator,
                        limits,
                        StalePullRequestAnalyzer::default(),
                        &mut NoopProgressSink,
                    )
                    .await?;
                write_stale_report(&mut rendered, &outcome.repository, &outcome.aggregate)?;
                let entries = outcome
                    .aggregate
                    .iter()
                    .map(|stale| ReportEntry {
                        primary: stale.pull_request.number,
                        related: stale.closed_issues.iter().map(|issue| issue.number).collect(),
                    })
                    .collect();
                (entries, outcome.pages)
            }
            Subcommand::MultiplePullRequests => {
                let outcome = traversal
                    .run(
                        &locator,
                        limits,
                        ContestedIssueAnalyzer::default(),
                        &mut NoopProgressSink,
                    )
                    .await?;
                write_contested_report(&mut rendered, &outcome.repository, &outcome.aggregate)?;
                let entries = outcome
                    .aggregate
                    .iter()
                    .map(|contested| ReportEntry {
                        primary: contested.issue.number,
                        related: contested
                            .pull_requests
                            .iter()
                            .map(|pull_request| pull_request.number)
                            .collect(),
                    })
                    .collect();
                (entries, outcome.pages)
            }
        };

        Ok(AuditReport {
            entries,
            rendered: String::from_utf8_lossy(&rendered).into_owned(),
            pages,
        })
    })
}
