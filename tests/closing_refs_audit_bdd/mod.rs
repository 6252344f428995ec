//! Support modules for the closing reference audit BDD tests.

pub(crate) mod harness;
pub(crate) mod state;

pub(crate) use harness::{issue_json, mount_page, page_json, pull_request_json};
pub(crate) use state::{AuditState, ReportEntry, ensure_runtime_and_server, run_audit};
