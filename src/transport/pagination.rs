//! Page parsing and accumulation
//!
//! Providers answer list endpoints with an items array under a well-known key
//! and a next-page locator that is either a full URL or an opaque cursor.
//! [`PageSchema`] captures those key names per provider, and [`paginate`]
//! drives an arbitrary page-fetching function until the locator runs out.
//! Composition is explicit: the fetch function is ordinary code calling the
//! transport, not a wrapped-up request.

use crate::error::AppError;
use serde_json::Value;
use std::future::Future;
use tracing::debug;

/// Locator for the next page of a list response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextLocator {
    /// Absolute URL of the next page
    Url(String),
    /// Opaque cursor token, re-issued as a query parameter
    Cursor(String),
}

impl From<String> for NextLocator {
    fn from(value: String) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            NextLocator::Url(value)
        } else {
            NextLocator::Cursor(value)
        }
    }
}

/// One page of a list response
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items of this page, in arrival order
    pub items: Vec<T>,
    /// Locator of the next page, absent on the final page
    pub next: Option<NextLocator>,
}

/// Provider-specific key names for list responses
///
/// The default matches the Concur v3 contract (`Items`/`NextPage`); other
/// providers are covered by constructing a schema with their keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSchema {
    /// Key under which the items array lives
    pub items_key: &'static str,
    /// Key under which the next-page locator lives
    pub next_key: &'static str,
    /// Query parameter used to re-issue an opaque cursor
    pub cursor_param: &'static str,
}

impl Default for PageSchema {
    fn default() -> Self {
        Self::new("Items", "NextPage", "page")
    }
}

impl PageSchema {
    /// Creates a schema from explicit key names
    #[must_use]
    pub const fn new(items_key: &'static str, next_key: &'static str, cursor_param: &'static str) -> Self {
        Self {
            items_key,
            next_key,
            cursor_param,
        }
    }

    /// Parses a response body into a [`Page`]
    ///
    /// A missing or non-string next-page value marks the final page. A body
    /// without the items key is either an empty final page (empty object) or
    /// a single entity, which is yielded as a one-item final page.
    ///
    /// # Errors
    /// * `AppError::ResponseParse` - The body is not a JSON object, or the
    ///   items key holds something other than an array
    pub fn parse(&self, body: Value) -> Result<Page<Value>, AppError> {
        let Value::Object(mut map) = body else {
            return Err(AppError::ResponseParse(
                "expected a JSON object page body".to_string(),
            ));
        };

        let next = map.remove(self.next_key).and_then(|value| match value {
            Value::String(s) if !s.is_empty() => Some(NextLocator::from(s)),
            _ => None,
        });

        let items = match map.remove(self.items_key) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(AppError::ResponseParse(format!(
                    "field `{}` is not an array",
                    self.items_key
                )));
            }
            None if map.is_empty() => Vec::new(),
            // Entity endpoints answer with the object itself
            None => vec![Value::Object(map)],
        };

        Ok(Page { items, next })
    }
}

/// Accumulates every page produced by `fetch_page` into a single result set
///
/// Starts with no locator and keeps following `Page::next` until it is
/// absent. Items are appended in arrival order and never deduplicated. A page
/// with zero items but a present locator is still followed; endpoints have
/// been seen returning empty pages mid-stream.
pub async fn paginate<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, AppError>
where
    F: FnMut(Option<NextLocator>) -> Fut,
    Fut: Future<Output = Result<Page<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor: Option<NextLocator> = None;
    let mut page_count = 0u32;

    loop {
        let page = fetch_page(cursor.take()).await?;
        page_count += 1;

        if page.items.is_empty() {
            debug!("page {} contained no items", page_count);
        }
        all_items.extend(page.items);

        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    debug!(
        "accumulated {} items across {} pages",
        all_items.len(),
        page_count
    );
    Ok(all_items)
}
