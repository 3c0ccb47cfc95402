//! Cursor-based iteration over list endpoints.
//!
//! Stripe list endpoints return one page at a time:
//!
//! ```json
//! { "object": "list", "url": "/v1/charges", "has_more": true, "data": [ ... ] }
//! ```
//!
//! [`ListIter`] walks every element across pages, requesting the next page
//! with `starting_after=<id of the last element>` only once the current page
//! is used up.

use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures_util::Stream;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ClientInner;
use crate::form::Values;
use crate::models::{ListParams, Object};
use crate::{Error, Result};

/// Pagination metadata of a list response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListMeta {
    /// Whether more objects exist beyond this page.
    #[serde(default)]
    pub has_more: bool,
    /// The URL the list was fetched from.
    #[serde(default)]
    pub url: String,
    /// Total number of objects, only present when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

/// A single page returned by a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    /// The objects in this page, in API order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Pagination metadata.
    #[serde(flatten)]
    pub meta: ListMeta,
}

/// Type alias for a boxed future used internally.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Fetches one page given the full set of request values.
pub type PageFetcher<T> = Box<dyn Fn(Values) -> BoxFuture<'static, Result<List<T>>> + Send + Sync>;

/// Traversal state of a [`ListIter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterState {
    /// The first page is loaded and nothing has been yielded yet.
    Fresh,
    /// Positioned on an element of the current page.
    InPage,
    /// The current page is used up and the next one is being requested.
    FetchingNext,
    /// No more objects.
    Exhausted,
    /// A page request failed; see [`ListIter::err`].
    Failed,
}

/// Forward-only iterator over every object of a list endpoint.
///
/// Call [`advance`](Self::advance) until it returns `false`, then check
/// [`err`](Self::err) to tell a completed traversal from a failed one.
///
/// # Example
///
/// ```no_run
/// use stripe_rs::models::BankAccountListParams;
///
/// # async fn example(client: stripe_rs::StripeClient) -> stripe_rs::Result<()> {
/// let params = BankAccountListParams::for_customer("cus_123");
/// let mut accounts = client.bank_accounts().list(&params).await?;
///
/// while accounts.advance().await {
///     if let Some(account) = accounts.current() {
///         println!("{}", account.display());
///     }
/// }
/// if let Some(err) = accounts.err() {
///     eprintln!("listing stopped: {err}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct ListIter<T> {
    fetch_page: PageFetcher<T>,
    values: Values,
    page: VecDeque<T>,
    current: Option<T>,
    cursor: Option<String>,
    meta: ListMeta,
    state: IterState,
    err: Option<Error>,
    single: bool,
    backward: bool,
}

impl<T> ListIter<T>
where
    T: Object + Send + 'static,
{
    /// Fetch the first page and return an iterator positioned before its
    /// first element.
    ///
    /// `values` is the full encoded request, including `list`'s own fields.
    /// A failed first fetch yields an iterator that is already
    /// [`IterState::Failed`].
    pub async fn start<F>(list: &ListParams, values: Values, fetch_page: F) -> Self
    where
        F: Fn(Values) -> BoxFuture<'static, Result<List<T>>> + Send + Sync + 'static,
    {
        let mut iter = Self {
            fetch_page: Box::new(fetch_page),
            values,
            page: VecDeque::new(),
            current: None,
            cursor: None,
            meta: ListMeta::default(),
            state: IterState::FetchingNext,
            err: None,
            single: list.single,
            backward: list.ending_before.is_some(),
        };

        if iter.load_page().await {
            iter.state = IterState::Fresh;
        }
        iter
    }

    /// Move to the next object, fetching the next page if needed.
    ///
    /// Returns `false` once the list is exhausted or a fetch has failed.
    pub async fn advance(&mut self) -> bool {
        loop {
            match self.state {
                IterState::Exhausted | IterState::Failed => return false,
                IterState::Fresh | IterState::InPage => {
                    if let Some(item) = self.page.pop_front() {
                        self.cursor = Some(item.id().to_string());
                        self.current = Some(item);
                        self.state = IterState::InPage;
                        return true;
                    }

                    self.current = None;
                    if !self.meta.has_more || self.single {
                        self.state = IterState::Exhausted;
                        return false;
                    }
                    self.state = IterState::FetchingNext;
                }
                IterState::FetchingNext => {
                    let Some(cursor) = self.cursor.clone() else {
                        self.state = IterState::Exhausted;
                        return false;
                    };

                    let key = if self.backward {
                        "ending_before"
                    } else {
                        "starting_after"
                    };
                    self.values.set(key, cursor);

                    if !self.load_page().await {
                        return false;
                    }
                    self.state = if self.page.is_empty() {
                        IterState::Exhausted
                    } else {
                        IterState::InPage
                    };
                }
            }
        }
    }

    /// The object the iterator is positioned on.
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// The error that stopped the traversal, if any.
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Metadata of the most recently fetched page.
    pub fn meta(&self) -> &ListMeta {
        &self.meta
    }

    /// Current traversal state.
    pub fn state(&self) -> IterState {
        self.state
    }

    /// Convert into a stream of objects.
    ///
    /// A failed page fetch is yielded once as an `Err` and ends the stream.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + Send {
        futures_util::stream::unfold(self, |mut iter| async move {
            if iter.advance().await {
                iter.current.take().map(|item| (Ok(item), iter))
            } else {
                iter.err.take().map(|err| (Err(err), iter))
            }
        })
    }

    async fn load_page(&mut self) -> bool {
        tracing::debug!(query = %self.values, "fetching list page");

        match (self.fetch_page)(self.values.clone()).await {
            Ok(list) => {
                let mut data = list.data;
                // Pages arrive in ascending order even when paging backwards.
                if self.backward {
                    data.reverse();
                }
                self.page = data.into();
                self.meta = list.meta;
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "list page fetch failed");
                self.page.clear();
                self.current = None;
                self.err = Some(err);
                self.state = IterState::Failed;
                false
            }
        }
    }
}

impl<T> fmt::Debug for ListIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListIter")
            .field("state", &self.state)
            .field("meta", &self.meta)
            .field("remaining_in_page", &self.page.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Builds list iterators backed by the HTTP client.
pub(crate) struct ListIterBuilder<T> {
    inner: Arc<ClientInner>,
    path: String,
    _marker: std::marker::PhantomData<T>,
}

impl<T> ListIterBuilder<T>
where
    T: DeserializeOwned + Object + Send + 'static,
{
    /// Create a new builder for `GET path`.
    pub(crate) fn new(inner: Arc<ClientInner>, path: impl Into<String>) -> Self {
        Self {
            inner,
            path: path.into(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Fetch the first page with `query` and wrap it in an iterator.
    pub(crate) async fn start(self, list: &ListParams, query: Values) -> ListIter<T> {
        let inner = self.inner;
        let path = self.path;
        let params = list.params.clone();

        ListIter::start(
            list,
            query,
            move |values: Values| -> BoxFuture<'static, Result<List<T>>> {
                let inner = inner.clone();
                let path = path.clone();
                let params = params.clone();

                Box::pin(async move { inner.call(Method::GET, &path, &values, &params).await })
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use futures_util::StreamExt;

    use super::*;
    use crate::form;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item {
        id: String,
    }

    impl Object for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn page(ids: &[&str], has_more: bool) -> List<Item> {
        List {
            data: ids.iter().map(|id| Item { id: id.to_string() }).collect(),
            meta: ListMeta {
                has_more,
                url: "/v1/items".into(),
                total_count: None,
            },
        }
    }

    type Requests = Arc<Mutex<Vec<Values>>>;

    async fn iter_over(list: &ListParams, pages: Vec<Result<List<Item>>>) -> (ListIter<Item>, Requests) {
        let pages = Arc::new(Mutex::new(VecDeque::from(pages)));
        let requests: Requests = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();

        let query = form::to_values(list).unwrap();
        let iter = ListIter::start(list, query, move |values: Values| -> BoxFuture<'static, Result<List<Item>>> {
            seen.lock().unwrap().push(values);
            let next = pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::InvalidInput("unexpected page request".into())));
            Box::pin(async move { next })
        })
        .await;

        (iter, requests)
    }

    async fn collect_ids(iter: &mut ListIter<Item>) -> Vec<String> {
        let mut ids = Vec::new();
        while iter.advance().await {
            ids.push(iter.current().unwrap().id.clone());
        }
        ids
    }

    #[tokio::test]
    async fn test_exhausts_two_pages_in_order() {
        let list = ListParams::new().with_limit(3);
        let (mut iter, requests) = iter_over(
            &list,
            vec![Ok(page(&["ba_1", "ba_2", "ba_3"], true)), Ok(page(&["ba_4", "ba_5"], false))],
        )
        .await;

        assert_eq!(iter.state(), IterState::Fresh);
        assert!(iter.current().is_none());

        let ids = collect_ids(&mut iter).await;
        assert_eq!(ids, vec!["ba_1", "ba_2", "ba_3", "ba_4", "ba_5"]);
        assert!(iter.err().is_none());
        assert_eq!(iter.state(), IterState::Exhausted);
        assert!(!iter.advance().await);

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].get_first("starting_after"), None);
        assert_eq!(requests[1].get_first("starting_after"), Some("ba_3"));
        assert_eq!(requests[1].get_first("limit"), Some("3"));
    }

    #[tokio::test]
    async fn test_failed_fetch_stops_iteration() {
        let (mut iter, requests) = iter_over(
            &ListParams::new(),
            vec![
                Ok(page(&["ch_1", "ch_2"], true)),
                Err(Error::Timeout),
                Ok(page(&["ch_3"], false)),
            ],
        )
        .await;

        let ids = collect_ids(&mut iter).await;
        assert_eq!(ids, vec!["ch_1", "ch_2"]);
        assert!(matches!(iter.err(), Some(Error::Timeout)));
        assert_eq!(iter.state(), IterState::Failed);
        assert!(iter.current().is_none());

        // No retry once failed.
        assert!(!iter.advance().await);
        assert_eq!(requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_first_page() {
        let (mut iter, _) = iter_over(&ListParams::new(), vec![Err(Error::Timeout)]).await;

        assert_eq!(iter.state(), IterState::Failed);
        assert!(!iter.advance().await);
        assert!(iter.err().is_some());
    }

    #[tokio::test]
    async fn test_single_page_only() {
        let list = ListParams::new().single_page();
        let (mut iter, requests) = iter_over(&list, vec![Ok(page(&["src_1"], true))]).await;

        assert_eq!(collect_ids(&mut iter).await, vec!["src_1"]);
        assert!(iter.err().is_none());
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_next_page_ends_traversal() {
        let (mut iter, _) = iter_over(
            &ListParams::new(),
            vec![Ok(page(&["ba_1"], true)), Ok(page(&[], true))],
        )
        .await;

        assert_eq!(collect_ids(&mut iter).await, vec!["ba_1"]);
        assert_eq!(iter.state(), IterState::Exhausted);
        assert!(iter.err().is_none());
    }

    #[tokio::test]
    async fn test_ending_before_pages_backwards() {
        let list = ListParams::new().with_ending_before("ch_9");
        let (mut iter, requests) = iter_over(
            &list,
            vec![Ok(page(&["ch_6", "ch_7", "ch_8"], true)), Ok(page(&["ch_4", "ch_5"], false))],
        )
        .await;

        let ids = collect_ids(&mut iter).await;
        assert_eq!(ids, vec!["ch_8", "ch_7", "ch_6", "ch_5", "ch_4"]);

        let requests = requests.lock().unwrap();
        assert_eq!(requests[0].get_first("ending_before"), Some("ch_9"));
        assert_eq!(requests[1].get_first("ending_before"), Some("ch_6"));
        assert!(!requests[1].contains_key("starting_after"));
    }

    #[tokio::test]
    async fn test_meta_follows_latest_page() {
        let (mut iter, _) = iter_over(
            &ListParams::new(),
            vec![Ok(page(&["ba_1"], true)), Ok(page(&["ba_2"], false))],
        )
        .await;

        assert!(iter.meta().has_more);
        assert!(iter.advance().await);
        assert!(iter.advance().await);
        assert!(!iter.meta().has_more);
    }

    #[tokio::test]
    async fn test_into_stream_yields_error_once() {
        let (iter, _) = iter_over(
            &ListParams::new(),
            vec![Ok(page(&["ba_1", "ba_2"], true)), Err(Error::Timeout)],
        )
        .await;

        let results: Vec<Result<Item>> = iter.into_stream().collect().await;
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().id, "ba_1");
        assert_eq!(results[1].as_ref().unwrap().id, "ba_2");
        assert!(matches!(results[2], Err(Error::Timeout)));
    }

    #[test]
    fn test_list_deserializes_meta() {
        let list: List<Item> = serde_json::from_str(
            r#"{"object": "list", "url": "/v1/charges", "has_more": true, "data": [{"id": "ch_1"}]}"#,
        )
        .unwrap();

        assert_eq!(list.data.len(), 1);
        assert!(list.meta.has_more);
        assert_eq!(list.meta.url, "/v1/charges");
        assert_eq!(list.meta.total_count, None);
    }
}
