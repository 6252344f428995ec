//! Repository identity wrappers and the locator used for GraphQL requests.

use url::Url;

use super::error::AuditError;

/// Default API base for `github.com`.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, AuditError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AuditError::MissingRepositorySegment { segment: "owner" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, AuditError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AuditError::MissingRepositorySegment { segment: "name" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, AuditError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AuditError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Identifies the repository whose pull requests are audited, together with
/// the API base that serves its GraphQL endpoint.
///
/// # Example
///
/// ```
/// use closing_refs::RepositoryLocator;
///
/// let locator = RepositoryLocator::from_owner_repo("octo", "repo")
///     .expect("should create locator");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.repository().as_str(), "repo");
/// assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator for a `github.com` repository.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::MissingRepositorySegment` when owner or name is
    /// blank.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, AuditError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;
        let api_base =
            Url::parse(GITHUB_API_BASE).map_err(|error| AuditError::InvalidUrl(error.to_string()))?;

        Ok(Self {
            api_base,
            owner: validated_owner,
            repository,
        })
    }

    /// Points the locator at a different API base, such as a GitHub
    /// Enterprise host (`https://ghe.example.com/api`).
    ///
    /// # Errors
    ///
    /// Returns `AuditError::InvalidUrl` when the base cannot be parsed or is
    /// not an HTTP(S) URL.
    pub fn with_api_base(mut self, api_base: &str) -> Result<Self, AuditError> {
        let parsed =
            Url::parse(api_base).map_err(|error| AuditError::InvalidUrl(error.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AuditError::InvalidUrl(format!(
                "API base must use http or https, got {scheme}",
                scheme = parsed.scheme()
            )));
        }
        self.api_base = parsed;
        Ok(self)
    }

    /// API base URL the GraphQL endpoint hangs off.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }
}

impl std::fmt::Display for RepositoryLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner.as_str(), self.repository.as_str())
    }
}
