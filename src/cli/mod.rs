//! CLI subcommand handlers.
//!
//! - [`stale_prs`]: open pull requests whose closing issues are all closed
//! - [`multiple_prs`]: open issues with several open closing pull requests
//!
//! Both handlers share the same connection set-up, resolved by
//! [`AuditTarget::from_config`].

use closing_refs::{
    AuditError, ClosingRefsConfig, PersonalAccessToken, RepositoryLocator, Subcommand,
    TraversalLimits,
};

pub mod multiple_prs;
pub mod stale_prs;

#[cfg(test)]
pub mod test_utils;

/// Runs the selected subcommand against standard output.
///
/// # Errors
///
/// Returns the first configuration, GitHub, or output error encountered.
pub async fn run(subcommand: Subcommand, config: &ClosingRefsConfig) -> Result<(), AuditError> {
    match subcommand {
        Subcommand::StalePullRequests => stale_prs::run(config).await,
        Subcommand::MultiplePullRequests => multiple_prs::run(config).await,
    }
}

/// Everything a subcommand needs before the first request is issued.
#[derive(Debug)]
pub struct AuditTarget {
    /// Validated token.
    pub token: PersonalAccessToken,
    /// Repository and API base.
    pub locator: RepositoryLocator,
    /// Page size and pull request cap.
    pub limits: TraversalLimits,
}

impl AuditTarget {
    /// Resolves the repository, token, and limits from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Configuration`] when owner or name is missing,
    /// [`AuditError::MissingToken`] when no token is available, and
    /// [`AuditError::InvalidPagination`] for an out-of-range page size.
    pub fn from_config(config: &ClosingRefsConfig) -> Result<Self, AuditError> {
        let locator = config.repository_locator()?;
        let token = PersonalAccessToken::new(config.resolve_token()?)?;
        let limits = config.traversal_limits()?;

        Ok(Self {
            token,
            locator,
            limits,
        })
    }
}
