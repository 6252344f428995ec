//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.closing-refs.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `CLOSING_REFS_TOKEN`, `CLOSING_REFS_OWNER`,
//!    and so on, or the legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--owner`/`-o`, `--name`/`-n`, `--max`/`-m`
//!    and `--token`/`-t`
//!
//! The subcommand (`stale-prs` or `multiple-prs`) is not a configuration
//! value; the binary extracts it from the argument vector before ortho-config
//! parses the remaining flags.
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! owner = "octocat"
//! name = "hello-world"
//! max = 500
//! api_base = "https://ghe.example.com/api"
//! page_size = 100
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::AuditError;
use crate::github::locator::RepositoryLocator;
use crate::github::pagination::{MAX_PAGE_SIZE, PageSize, TraversalLimits};

/// Report selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    /// Open pull requests whose closing issues are all closed.
    StalePullRequests,
    /// Open issues with more than one open closing pull request.
    MultiplePullRequests,
}

impl Subcommand {
    /// Every subcommand, in help order.
    pub const ALL: [Self; 2] = [Self::StalePullRequests, Self::MultiplePullRequests];

    /// Returns the command-line spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StalePullRequests => "stale-prs",
            Self::MultiplePullRequests => "multiple-prs",
        }
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subcommand {
    type Err = AuditError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|subcommand| subcommand.as_str() == value)
            .ok_or_else(|| AuditError::InvalidArgument {
                argument: value.to_owned(),
            })
    }
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `CLOSING_REFS_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `CLOSING_REFS_OWNER` or `--owner`: Repository owner
/// - `CLOSING_REFS_NAME` or `--name`: Repository name
/// - `CLOSING_REFS_MAX` or `--max`: Pull request cap
/// - `CLOSING_REFS_API_BASE` or `--api-base`: GitHub API base URL
///
/// # Example
///
/// ```no_run
/// use closing_refs::ClosingRefsConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ClosingRefsConfig::load().expect("failed to load configuration");
/// let locator = config.repository_locator().expect("owner and name required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CLOSING_REFS",
    discovery(
        dotfile_name = ".closing-refs.toml",
        config_file_name = "closing-refs.toml",
        app_name = "closing-refs"
    )
)]
pub struct ClosingRefsConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `CLOSING_REFS_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Repository owner (e.g., "octocat").
    ///
    /// Can be provided via:
    /// - CLI: `--owner <OWNER>` or `-o <OWNER>`
    /// - Environment: `CLOSING_REFS_OWNER`
    /// - Config file: `owner = "..."`
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    ///
    /// Can be provided via:
    /// - CLI: `--name <NAME>` or `-n <NAME>`
    /// - Environment: `CLOSING_REFS_NAME`
    /// - Config file: `name = "..."`
    #[ortho_config(cli_short = 'n')]
    pub name: Option<String>,

    /// Maximum number of pull requests to process, rounded up to the page
    /// size. Zero or unset processes every open pull request.
    ///
    /// Can be provided via:
    /// - CLI: `--max <N>` or `-m <N>`
    /// - Environment: `CLOSING_REFS_MAX`
    /// - Config file: `max = 500`
    #[ortho_config(cli_short = 'm')]
    pub max: Option<u64>,

    /// GitHub API base URL. Defaults to `https://api.github.com`; GitHub
    /// Enterprise installations use `https://<host>/api`.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base <URL>`
    /// - Environment: `CLOSING_REFS_API_BASE`
    /// - Config file: `api_base = "..."`
    #[ortho_config()]
    pub api_base: Option<String>,

    /// Pull requests requested per page, at most 100.
    ///
    /// Can be provided via:
    /// - CLI: `--page-size <N>`
    /// - Environment: `CLOSING_REFS_PAGE_SIZE`
    /// - Config file: `page_size = 50`
    #[ortho_config()]
    pub page_size: u8,
}

impl Default for ClosingRefsConfig {
    fn default() -> Self {
        Self {
            token: None,
            owner: None,
            name: None,
            max: None,
            api_base: None,
            page_size: MAX_PAGE_SIZE,
        }
    }
}

impl ClosingRefsConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, AuditError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
            .ok_or(AuditError::MissingToken)
    }

    /// Returns owner and name if both are configured.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Configuration`] when owner or name is missing.
    pub fn require_repository(&self) -> Result<(&str, &str), AuditError> {
        match (&self.owner, &self.name) {
            (Some(owner), Some(name)) => Ok((owner.as_str(), name.as_str())),
            (None, _) => Err(AuditError::Configuration {
                message: "repository owner is required (use --owner or -o)".to_owned(),
            }),
            (_, None) => Err(AuditError::Configuration {
                message: "repository name is required (use --name or -n)".to_owned(),
            }),
        }
    }

    /// Builds the repository locator, honouring `api_base` when set.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Configuration`] when owner or name is missing,
    /// [`AuditError::MissingRepositorySegment`] when either is blank, and
    /// [`AuditError::InvalidUrl`] for an unusable `api_base`.
    pub fn repository_locator(&self) -> Result<RepositoryLocator, AuditError> {
        let (owner, name) = self.require_repository()?;
        let locator = RepositoryLocator::from_owner_repo(owner, name)?;
        match self.api_base.as_deref() {
            Some(api_base) => locator.with_api_base(api_base),
            None => Ok(locator),
        }
    }

    /// Returns the traversal limits derived from `page_size` and `max`.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidPagination`] when `page_size` is outside
    /// `1..=100`.
    pub fn traversal_limits(&self) -> Result<TraversalLimits, AuditError> {
        let page_size = PageSize::new(self.page_size)?;
        Ok(TraversalLimits::new(page_size).with_max_items(self.max))
    }
}

#[cfg(test)]
mod tests;
