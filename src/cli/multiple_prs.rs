//! Contested issue report.

use std::io::{self, Write};

use closing_refs::report::write_contested_report;
use closing_refs::{
    AuditError, ClosingRefsConfig, ContestedIssueAnalyzer, OctocrabGraphqlGateway,
    PersonalAccessToken, PullRequestPageGateway, PullRequestTraversal, RepositoryLocator,
    WriterProgressSink,
};

use super::AuditTarget;

/// Reports open issues that several open pull requests would close.
///
/// # Errors
///
/// Returns [`AuditError::Configuration`] if required configuration is missing.
/// Returns the gateway error if a GitHub request fails.
pub async fn run(config: &ClosingRefsConfig) -> Result<(), AuditError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabGraphqlGateway::for_token, &mut stdout).await
}

/// Reports contested issues using a custom gateway builder.
///
/// This function is exposed for testing with mock gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &ClosingRefsConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), AuditError>
where
    G: PullRequestPageGateway,
    F: FnOnce(&PersonalAccessToken, &RepositoryLocator) -> Result<G, AuditError>,
    W: Write,
{
    let target = AuditTarget::from_config(config)?;
    let gateway = build_gateway(&target.token, &target.locator)?;

    let mut progress = WriterProgressSink::new(&mut *writer);
    let outcome = PullRequestTraversal::new(&gateway)
        .run(
            &target.locator,
            target.limits,
            ContestedIssueAnalyzer::default(),
            &mut progress,
        )
        .await?;

    write_contested_report(writer, &outcome.repository, &outcome.aggregate)
}
