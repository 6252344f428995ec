//! Cursor-driven traversal over a repository's open pull requests.
//!
//! [`PullRequestTraversal`] fetches pages strictly one after another, hands
//! each page to a [`PageReducer`] exactly once and in fetch order, and stops
//! when GitHub reports no further page or the running total exceeds the
//! configured cap.

use crate::github::error::AuditError;
use crate::github::gateway::{PageRequest, PullRequestPageGateway};
use crate::github::locator::RepositoryLocator;
use crate::github::models::{PullRequestPage, RepositorySummary};
use crate::github::pagination::TraversalLimits;
use crate::progress::{ProgressSink, TraversalEvent};

/// Folds pages of pull requests into an analysis-specific aggregate.
pub trait PageReducer {
    /// Terminal aggregate produced once the traversal ends.
    type Output;

    /// Folds one page into the accumulator.
    ///
    /// # Errors
    ///
    /// Returning an error aborts the traversal and surfaces the error to the
    /// caller unchanged.
    fn on_page(&mut self, page: &PullRequestPage) -> Result<(), AuditError>;

    /// Consumes the reducer and yields the aggregate.
    fn finish(self) -> Self::Output;
}

/// Result of a completed traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalOutcome<T> {
    /// Repository summary from the last fetched page.
    pub repository: RepositorySummary,
    /// The reducer's terminal aggregate.
    pub aggregate: T,
    /// Number of pages fetched.
    pub pages: u64,
    /// Number of pull requests seen across all pages.
    pub total_pull_requests: u64,
}

/// Drives paginated fetches of open pull requests through a gateway.
///
/// # Example
///
/// ```ignore
/// use closing_refs::{
///     NoopProgressSink, OctocrabGraphqlGateway, PersonalAccessToken, PullRequestTraversal,
///     RepositoryLocator, StalePullRequestAnalyzer, TraversalLimits,
/// };
///
/// let token = PersonalAccessToken::new("ghp_example")?;
/// let locator = RepositoryLocator::from_owner_repo("owner", "repo")?;
/// let gateway = OctocrabGraphqlGateway::for_token(&token, &locator)?;
/// let outcome = PullRequestTraversal::new(&gateway)
///     .run(
///         &locator,
///         TraversalLimits::default(),
///         StalePullRequestAnalyzer::default(),
///         &mut NoopProgressSink,
///     )
///     .await?;
/// ```
pub struct PullRequestTraversal<'client, Gateway>
where
    Gateway: PullRequestPageGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> PullRequestTraversal<'client, Gateway>
where
    Gateway: PullRequestPageGateway,
{
    /// Create a traversal over the given gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Pages through every open pull request, folding each page into
    /// `reducer`.
    ///
    /// # Errors
    ///
    /// Returns the first gateway or reducer error unchanged; no partial
    /// aggregate is produced. Returns [`AuditError::Api`] when GitHub reports
    /// another page without a usable cursor.
    pub async fn run<Reducer, Sink>(
        &self,
        locator: &RepositoryLocator,
        limits: TraversalLimits,
        mut reducer: Reducer,
        progress: &mut Sink,
    ) -> Result<TraversalOutcome<Reducer::Output>, AuditError>
    where
        Reducer: PageReducer,
        Sink: ProgressSink + ?Sized,
    {
        let mut request = PageRequest::first(limits.page_size());
        let mut repository = RepositorySummary::default();
        let mut pages: u64 = 0;
        let mut total: u64 = 0;

        progress.record(&TraversalEvent::Started);

        loop {
            let page = self.client.open_pull_requests(locator, &request).await?;
            pages += 1;
            total = total.saturating_add(u64::try_from(page.len()).unwrap_or(u64::MAX));
            tracing::debug!(
                repository = %locator,
                page = pages,
                fetched = page.len(),
                total,
                "fetched pull request page"
            );
            progress.record(&TraversalEvent::PageFetched { total });

            reducer.on_page(&page)?;

            let PullRequestPage {
                repository: page_repository,
                page_info,
                ..
            } = page;
            repository = page_repository;

            if limits.is_exceeded_by(total) {
                let max = limits.max_items().unwrap_or_default();
                tracing::debug!(max, total, "pull request cap exceeded, stopping");
                progress.record(&TraversalEvent::LimitReached { max, total });
                break;
            }

            if !page_info.has_next_page() {
                break;
            }

            request = next_request(&request, page_info.end_cursor(), limits)?;
        }

        progress.record(&TraversalEvent::Finished { pages, total });
        tracing::info!(repository = %locator, pages, total, "traversal finished");

        Ok(TraversalOutcome {
            repository,
            aggregate: reducer.finish(),
            pages,
            total_pull_requests: total,
        })
    }
}

fn next_request(
    current: &PageRequest,
    end_cursor: Option<&str>,
    limits: TraversalLimits,
) -> Result<PageRequest, AuditError> {
    let cursor = end_cursor.ok_or_else(|| AuditError::Api {
        message: "page reported more results without an end cursor".to_owned(),
    })?;

    if current.after.as_deref() == Some(cursor) {
        return Err(AuditError::Api {
            message: format!("pagination cursor did not advance past {cursor}"),
        });
    }

    Ok(PageRequest::after(limits.page_size(), cursor))
}
