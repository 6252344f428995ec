//! Stale pull request report.

use std::io::{self, Write};

use closing_refs::report::write_stale_report;
use closing_refs::{
    AuditError, ClosingRefsConfig, OctocrabGraphqlGateway, PersonalAccessToken,
    PullRequestPageGateway, PullRequestTraversal, RepositoryLocator, StalePullRequestAnalyzer,
    WriterProgressSink,
};

use super::AuditTarget;

/// Reports open pull requests whose closing issues are all closed.
///
/// # Errors
///
/// Returns [`AuditError::Configuration`] if required configuration is missing.
/// Returns the gateway error if a GitHub request fails.
pub async fn run(config: &ClosingRefsConfig) -> Result<(), AuditError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabGraphqlGateway::for_token, &mut stdout).await
}

/// Reports stale pull requests using a custom gateway builder.
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
            StalePullRequestAnalyzer::default(),
            &mut progress,
        )
        .await?;

    write_stale_report(writer, &outcome.repository, &outcome.aggregate)
}
