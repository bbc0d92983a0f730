//! Cursor pagination over list / list-continue route pairs.
//!
//! A list route answers with a page, a cursor and a `has_more` flag. While
//! `has_more` is true the matching continue route is called with exactly the
//! most recent cursor. [`Pager`] drives that loop and never issues a
//! continuation once the server said there is nothing left.

use crate::client::{CallResult, TeamClient};
use crate::error::{CallError, CodecPhase, ProtocolError};
use crate::route::Route;
use futures::stream::{self, Stream, TryStreamExt};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Opaque, server-issued position in a listing.
///
/// Only stored and forwarded: it cannot be built from or read as a string.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor(<{} bytes>)", self.0.len())
    }
}

/// One bounded slice of a listing, normalized across routes.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    /// Some listings omit the cursor on their last page.
    pub cursor: Option<Cursor>,
    pub has_more: bool,
}

/// A route result that is one page of a listing.
pub trait Paginated {
    type Item;

    fn into_page(self) -> ListPage<Self::Item>;
}

/// Argument of a continuation call, built from the previous page's cursor.
pub trait ContinueArg: Sized {
    fn from_cursor(cursor: Cursor) -> Self;

    /// Continuation derived from the argument of the first call.
    ///
    /// Listings that page through their own route override this to keep the
    /// caller's filters on every page.
    fn continue_from(&self, cursor: Cursor) -> Self {
        Self::from_cursor(cursor)
    }
}

/// `{"cursor": ...}`: the argument of every `.../list/continue` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorArg {
    pub cursor: Cursor,
}

impl ContinueArg for CursorArg {
    fn from_cursor(cursor: Cursor) -> Self {
        Self { cursor }
    }
}

/// Drives a listing from its first page through every continuation.
pub struct Pager<'c, A, R: Paginated, E> {
    client: &'c TeamClient,
    continue_route: Route<A, R, E>,
    template: Option<A>,
    pending: Option<Vec<R::Item>>,
    cursor: Option<Cursor>,
    has_more: bool,
    continuations: u32,
}

impl<'c, A, R, E> Pager<'c, A, R, E>
where
    A: Serialize + ContinueArg,
    R: DeserializeOwned + Paginated,
    E: DeserializeOwned,
{
    /// Start from the page returned by the list route.
    pub fn new(client: &'c TeamClient, continue_route: Route<A, R, E>, first_page: R) -> Self {
        let page = first_page.into_page();
        Self {
            client,
            continue_route,
            template: None,
            pending: Some(page.items),
            cursor: page.cursor,
            has_more: page.has_more,
            continuations: 0,
        }
    }

    /// Build every continuation from `template` via [`ContinueArg::continue_from`].
    pub fn with_template(mut self, template: A) -> Self {
        self.template = Some(template);
        self
    }

    /// Whether [`Pager::next_page`] can still yield items.
    pub fn has_more(&self) -> bool {
        self.pending.is_some() || self.has_more
    }

    /// Number of continuation calls issued so far.
    pub fn continuations(&self) -> u32 {
        self.continuations
    }

    /// The next page of items, or `None` once the listing is exhausted.
    ///
    /// The first call returns the items of the initial page without a network
    /// round trip. A failed continuation leaves the pager untouched, so the
    /// same cursor is used if the caller tries again.
    pub async fn next_page(&mut self) -> CallResult<Option<Vec<R::Item>>, E> {
        if let Some(items) = self.pending.take() {
            return Ok(Some(items));
        }
        if !self.has_more {
            return Ok(None);
        }
        let cursor = match &self.cursor {
            Some(cursor) => cursor.clone(),
            None => return Err(missing_cursor(self.continue_route.name()).into()),
        };

        let arg = match &self.template {
            Some(template) => template.continue_from(cursor),
            None => A::from_cursor(cursor),
        };
        let page = self.client.call(&self.continue_route, &arg).await?.into_page();
        self.continuations = self.continuations.saturating_add(1);

        debug!(
            route = self.continue_route.name(),
            items = page.items.len(),
            has_more = page.has_more,
            continuations = self.continuations,
            "fetched continuation page"
        );

        // Only the latest cursor may be sent. A page with `has_more` and no
        // cursor makes the next call fail instead of resending an old one.
        self.has_more = page.has_more;
        self.cursor = page.cursor;
        Ok(Some(page.items))
    }

    /// Drain every remaining page into one vector, in server order.
    pub async fn collect_remaining(mut self) -> CallResult<Vec<R::Item>, E> {
        let mut all = Vec::new();
        while let Some(items) = self.next_page().await? {
            all.extend(items);
        }
        Ok(all)
    }

    /// Yield items one by one, fetching continuation pages lazily.
    pub fn into_stream(self) -> impl Stream<Item = CallResult<R::Item, E>> + 'c
    where
        A: 'c,
        R: 'c,
        R::Item: 'c,
        E: 'c,
    {
        stream::try_unfold(self, |mut pager| async move {
            let next = pager.next_page().await?;
            Ok::<_, CallError<E>>(next.map(|items| {
                let page = stream::iter(items.into_iter().map(Ok::<R::Item, CallError<E>>));
                (page, pager)
            }))
        })
        .try_flatten()
    }
}

/// Failure of [`collect_all`], split by the call that failed.
#[derive(Debug)]
pub enum PageError<L, C> {
    List(CallError<L>),
    Continue(CallError<C>),
}

impl<L, C> fmt::Display for PageError<L, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::List(err) => write!(f, "listing failed: {}", err),
            PageError::Continue(err) => write!(f, "listing continuation failed: {}", err),
        }
    }
}

impl<L: fmt::Debug + 'static, C: fmt::Debug + 'static> std::error::Error for PageError<L, C> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PageError::List(err) => Some(err),
            PageError::Continue(err) => Some(err),
        }
    }
}

/// Call `list_route` then follow `continue_route` until `has_more` is false.
pub async fn collect_all<LA, R, LE, CA, CE>(
    client: &TeamClient,
    list_route: &Route<LA, R, LE>,
    arg: &LA,
    continue_route: Route<CA, R, CE>,
) -> Result<Vec<R::Item>, PageError<LE, CE>>
where
    LA: Serialize,
    R: DeserializeOwned + Paginated,
    LE: DeserializeOwned,
    CA: Serialize + ContinueArg,
    CE: DeserializeOwned,
{
    let first = client.call(list_route, arg).await.map_err(PageError::List)?;
    Pager::new(client, continue_route, first)
        .collect_remaining()
        .await
        .map_err(PageError::Continue)
}

/// Page through a listing that takes its own cursor back on the same route.
///
/// Continuations are derived from `arg`, so every page uses the caller's filters.
pub async fn collect_same_route<A, R, E>(
    client: &TeamClient,
    route: &Route<A, R, E>,
    arg: &A,
) -> Result<Vec<R::Item>, PageError<E, E>>
where
    A: Serialize + ContinueArg + Clone,
    R: DeserializeOwned + Paginated,
    E: DeserializeOwned,
{
    let first = client.call(route, arg).await.map_err(PageError::List)?;
    Pager::new(client, *route, first)
        .with_template(arg.clone())
        .collect_remaining()
        .await
        .map_err(PageError::Continue)
}

fn missing_cursor(route: &'static str) -> ProtocolError {
    ProtocolError::new(
        route,
        Some(200),
        CodecPhase::Pagination,
        serde_json::Error::custom("page reported has_more without a cursor"),
    )
}
