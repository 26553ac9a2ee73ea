//! Paginated fetching against a listing backend.
//!
//! [`ListFetcher`] drives one list view: it forwards the settled filter state
//! and page to a [`ListSource`], tracks whether a request is in flight, and
//! stamps every fetch with a sequence number so a slow response that has
//! already been superseded by a newer fetch is discarded instead of
//! overwriting fresher results.

use std::future::Future;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{FilterSet, ListQuery, ListResult};

/// Fallback notification text when the backend gives no message of its own.
pub const GENERIC_FETCH_ERROR: &str = "The list could not be loaded. Please try again.";

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (connectivity, DNS, decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("backend error ({status}): {message}")]
    Backend { status: u16, message: String },
}

impl FetchError {
    /// The text shown to the user in the failure notification.
    pub fn user_message(&self) -> &str {
        match self {
            FetchError::Transport(_) => GENERIC_FETCH_ERROR,
            FetchError::Backend { message, .. } => message,
        }
    }
}

/// Anything that can produce one page of results for a filter set.
pub trait ListSource<T> {
    fn fetch(
        &self,
        filters: &FilterSet,
        page: usize,
    ) -> impl Future<Output = Result<ListResult<T>, FetchError>> + Send;
}

/// Result of one [`ListFetcher::fetch_page`] call.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// The response is current and should replace the displayed list.
    Updated(ListResult<T>),
    /// A newer fetch was issued while this one was in flight; drop it.
    Superseded,
    /// The fetch failed; render the empty state and notify the user. The
    /// filter state is untouched so the user can simply try again.
    Failed(FetchError),
}

impl<T> FetchOutcome<T> {
    /// Collapses the outcome into the list to display, surfacing a failure
    /// as the empty result plus its notification text.
    pub fn into_display(self) -> (ListResult<T>, Option<String>) {
        match self {
            FetchOutcome::Updated(result) => (result, None),
            FetchOutcome::Superseded => (ListResult::empty(), None),
            FetchOutcome::Failed(err) => {
                let message = err.user_message().to_string();
                (ListResult::empty(), Some(message))
            }
        }
    }
}

/// Drives paginated fetches for one list view.
pub struct ListFetcher<S> {
    source: S,
    seq: AtomicU64,
    in_flight: AtomicUsize,
}

impl<S> ListFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            seq: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// True while at least one fetch has been dispatched and not yet settled.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Fetches the page described by `query`.
    ///
    /// The loading flag is raised before dispatch and lowered when the call
    /// settles on every path, success or failure. Responses belonging to a
    /// fetch that is no longer the latest come back as
    /// [`FetchOutcome::Superseded`]. Failures are not retried.
    pub async fn fetch_page<T>(&self, query: &ListQuery) -> FetchOutcome<T>
    where
        S: ListSource<T>,
    {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = InFlightGuard::raise(&self.in_flight);

        let response = self.source.fetch(query.filters(), query.page()).await;

        if self.seq.load(Ordering::SeqCst) != ticket {
            return FetchOutcome::Superseded;
        }
        match response {
            Ok(result) => FetchOutcome::Updated(result),
            Err(err) => {
                log::error!("List fetch failed: {err}");
                FetchOutcome::Failed(err)
            }
        }
    }
}

/// Keeps the in-flight counter accurate across every exit path.
struct InFlightGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> InFlightGuard<'a> {
    fn raise(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Canonical wire shape of every listing endpoint.
///
/// All `/api/v1` list endpoints produce this single shape and
/// [`HttpListSource`] expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: usize,
    pub total_pages: usize,
}

impl<T> From<ListResult<T>> for ListResponse<T> {
    fn from(result: ListResult<T>) -> Self {
        Self {
            data: result.items,
            pagination: PageInfo {
                total: result.total_items,
                total_pages: result.total_pages,
            },
        }
    }
}

impl<T> From<ListResponse<T>> for ListResult<T> {
    fn from(response: ListResponse<T>) -> Self {
        Self {
            items: response.data,
            total_items: response.pagination.total,
            total_pages: response.pagination.total_pages,
        }
    }
}

/// Error body optionally returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// [`ListSource`] over HTTP, speaking the canonical listing contract:
/// `GET <endpoint>?page=<n>&<key>=<value>...` with only non-empty filter
/// keys present.
#[derive(Debug, Clone)]
pub struct HttpListSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpListSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl<T: DeserializeOwned> ListSource<T> for HttpListSource {
    fn fetch(
        &self,
        filters: &FilterSet,
        page: usize,
    ) -> impl Future<Output = Result<ListResult<T>, FetchError>> + Send {
        let mut params: Vec<(String, String)> = filters
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        params.push((super::PAGE_KEY.to_string(), page.to_string()));
        let request = self.client.get(&self.endpoint).query(&params);

        async move {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                let message = response
                    .json::<ErrorBody>()
                    .await
                    .ok()
                    .and_then(|body| body.message)
                    .unwrap_or_else(|| GENERIC_FETCH_ERROR.to_string());
                return Err(FetchError::Backend {
                    status: status.as_u16(),
                    message,
                });
            }
            let body: ListResponse<T> = response.json().await?;
            Ok(body.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time;

    /// Source whose nth call takes the nth delay before answering with the
    /// requested page number as the single item.
    struct DelayedSource {
        delays: Vec<u64>,
        calls: AtomicUsize,
    }

    impl DelayedSource {
        fn new(delays: &[u64]) -> Self {
            Self {
                delays: delays.to_vec(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ListSource<usize> for DelayedSource {
        fn fetch(
            &self,
            _filters: &FilterSet,
            page: usize,
        ) -> impl Future<Output = Result<ListResult<usize>, FetchError>> + Send {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = self.delays[call.min(self.delays.len() - 1)];
            async move {
                time::sleep(Duration::from_millis(delay)).await;
                Ok(ListResult::from_total(vec![page], 1, 20))
            }
        }
    }

    struct FailingSource;

    impl ListSource<usize> for FailingSource {
        fn fetch(
            &self,
            _filters: &FilterSet,
            _page: usize,
        ) -> impl Future<Output = Result<ListResult<usize>, FetchError>> + Send {
            async {
                Err(FetchError::Backend {
                    status: 500,
                    message: "Server exploded.".to_string(),
                })
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn loading_flag_covers_the_whole_flight() {
        let fetcher = ListFetcher::new(DelayedSource::new(&[100]));
        assert!(!fetcher.is_loading());

        let probe = async {
            time::sleep(Duration::from_millis(50)).await;
            assert!(fetcher.is_loading());
        };
        let query = ListQuery::new();
        let (outcome, ()) = tokio::join!(fetcher.fetch_page(&query), probe);

        assert!(matches!(outcome, FetchOutcome::Updated(_)));
        assert!(!fetcher.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_response_overtaken_by_newer_fetch_is_discarded() {
        let fetcher = ListFetcher::new(DelayedSource::new(&[200, 10]));

        let mut first_query = ListQuery::new();
        first_query.set_page(1);
        let mut second_query = ListQuery::new();
        second_query.set_page(2);

        let second = async {
            // Issued while the first is still in flight.
            time::sleep(Duration::from_millis(50)).await;
            fetcher.fetch_page(&second_query).await
        };
        let (first_outcome, second_outcome) =
            tokio::join!(fetcher.fetch_page(&first_query), second);

        assert!(matches!(first_outcome, FetchOutcome::Superseded));
        match second_outcome {
            FetchOutcome::Updated(result) => assert_eq!(result.items, vec![2]),
            other => panic!("expected the newer fetch to win, got {other:?}"),
        }
        assert!(!fetcher.is_loading());
    }

    #[tokio::test]
    async fn failure_yields_empty_list_and_message() {
        let fetcher = ListFetcher::new(FailingSource);

        let outcome: FetchOutcome<usize> = fetcher.fetch_page(&ListQuery::new()).await;
        let (result, message) = outcome.into_display();

        assert!(result.items.is_empty());
        assert_eq!(result.total_items, 0);
        assert_eq!(message.as_deref(), Some("Server exploded."));
        assert!(!fetcher.is_loading());
    }

    #[test]
    fn transport_errors_show_the_generic_message() {
        let outcome = FetchOutcome::<usize>::Failed(FetchError::Backend {
            status: 404,
            message: GENERIC_FETCH_ERROR.to_string(),
        });
        let (_, message) = outcome.into_display();
        assert_eq!(message.as_deref(), Some(GENERIC_FETCH_ERROR));
    }
}
