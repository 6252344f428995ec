//! Cursor state and limits for paginated GraphQL traversals.
//!
//! GitHub's GraphQL API pages connections with opaque cursors. [`PageInfo`]
//! captures the cursor returned with a page, [`PageSize`] bounds how many
//! pull requests a single request asks for, and [`TraversalLimits`] caps the
//! total number processed across pages.

use super::error::AuditError;

/// Largest `first:` value GitHub accepts on a connection.
///
/// This is a limit imposed by the remote API, not a tuning choice.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Cursor state returned with a page of results.
///
/// # Example
///
/// ```
/// use closing_refs::github::pagination::PageInfo;
///
/// let info = PageInfo::new(Some("Y3Vyc29yOjEwMA==".to_owned()), true);
/// assert!(info.has_next_page());
/// assert_eq!(info.end_cursor(), Some("Y3Vyc29yOjEwMA=="));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    end_cursor: Option<String>,
    has_next_page: bool,
}

impl PageInfo {
    /// Creates page info from the cursor fields of a GraphQL response.
    #[must_use]
    pub const fn new(end_cursor: Option<String>, has_next_page: bool) -> Self {
        Self {
            end_cursor,
            has_next_page,
        }
    }

    /// Opaque cursor pointing after the last item of the page.
    #[must_use]
    pub fn end_cursor(&self) -> Option<&str> {
        self.end_cursor.as_deref()
    }

    /// Returns true if more pages exist after this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.has_next_page
    }
}

/// Number of pull requests requested per page, within `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u8);

impl PageSize {
    /// The largest page GitHub serves.
    pub const MAX: Self = Self(MAX_PAGE_SIZE);

    /// Validates a page size.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidPagination`] when the value is zero or
    /// exceeds [`MAX_PAGE_SIZE`].
    pub fn new(value: u8) -> Result<Self, AuditError> {
        if value == 0 {
            return Err(AuditError::InvalidPagination {
                message: "page size must be at least 1".to_owned(),
            });
        }

        if value > MAX_PAGE_SIZE {
            return Err(AuditError::InvalidPagination {
                message: format!("page size must not exceed {MAX_PAGE_SIZE}"),
            });
        }

        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::MAX
    }
}

/// Bounds applied to a pull request traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalLimits {
    page_size: PageSize,
    max_items: Option<u64>,
}

impl TraversalLimits {
    /// Creates limits with the given page size and no item cap.
    #[must_use]
    pub const fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            max_items: None,
        }
    }

    /// Caps the number of pull requests processed.
    ///
    /// `None` and `Some(0)` both mean unbounded. The cap is checked after
    /// each page, so a traversal may overshoot it up to the page boundary.
    #[must_use]
    pub const fn with_max_items(mut self, max_items: Option<u64>) -> Self {
        self.max_items = match max_items {
            Some(0) | None => None,
            Some(value) => Some(value),
        };
        self
    }

    /// Page size requested from GitHub.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Effective item cap, `None` when unbounded.
    #[must_use]
    pub const fn max_items(&self) -> Option<u64> {
        self.max_items
    }

    /// Returns true once `total` has strictly exceeded the cap.
    #[must_use]
    pub const fn is_exceeded_by(&self, total: u64) -> bool {
        match self.max_items {
            Some(max) => total > max,
            None => false,
        }
    }
}
