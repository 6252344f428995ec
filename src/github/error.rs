//! Error types exposed by the GitHub audit layer.

use thiserror::Error;

/// Errors surfaced while parsing input, talking to GitHub, or reducing pages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuditError {
    /// The CLI did not name a subcommand.
    #[error("a subcommand is required: stale-prs or multiple-prs")]
    MissingSubcommand,

    /// An unsupported CLI argument was supplied.
    #[error("unrecognised argument: {argument}")]
    InvalidArgument {
        /// The flag or value that the CLI does not accept.
        argument: String,
    },

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The repository owner or name was blank.
    #[error("repository {segment} must not be empty")]
    MissingRepositorySegment {
        /// Which segment was blank (`owner` or `name`).
        segment: &'static str,
    },

    /// The authentication token was missing.
    #[error("personal access token is required (set GITHUB_TOKEN or use --token)")]
    MissingToken,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error or a malformed payload.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded; the API returned 403 or 429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Error message from GitHub.
        message: String,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// A page reducer rejected a page and aborted the traversal.
    #[error("failed to reduce page: {message}")]
    Reduction {
        /// Description of the violated invariant.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl From<std::io::Error> for AuditError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
