//! Pagination over `/v2` collections
//!
//! The control plane returns an opaque `next_url` with every page; a page
//! without one is the last. [`fetch_all`] follows those links from the first
//! page to the last and hands back every record in arrival order.

use std::collections::HashSet;

use log::debug;

use super::request::{Cursor, RequestFactory};
use super::transport::HttpTransport;
use crate::error::{ApiError, Result};

/// One decoded page of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records on this page, in API order
    pub records: Vec<T>,

    /// Cursor for the following page; `None` once the collection is exhausted
    pub next: Option<String>,
}

impl<T> Page<T> {
    pub fn new(records: Vec<T>, next: Option<String>) -> Self {
        Self { records, next }
    }

    /// Check if there are more pages to fetch.
    pub fn has_next_page(&self) -> bool {
        self.next.is_some()
    }
}

/// Decodes a raw page body.
pub trait PageParser: Send + Sync {
    type Record;

    fn parse(&self, body: &[u8]) -> Result<Page<Self::Record>>;
}

/// Walk every page of a collection and return all records.
///
/// Any transport or decode failure aborts the walk and discards whatever was
/// already accumulated; callers never see a truncated listing. There is no
/// retry.
pub async fn fetch_all<F, T, P>(factory: &F, transport: &T, parser: &P) -> Result<Vec<P::Record>>
where
    F: RequestFactory + ?Sized,
    T: HttpTransport + ?Sized,
    P: PageParser + ?Sized,
{
    let mut records = Vec::new();
    let mut visited = HashSet::new();
    let mut cursor = Cursor::First;
    let mut pages = 0usize;

    loop {
        let request = factory.build(&cursor)?;
        debug!("GET {}", request.url);

        let body = transport.execute(request).await?;
        let page = parser.parse(&body)?;
        pages += 1;

        debug!(
            "Page {} returned {} records (more: {})",
            pages,
            page.records.len(),
            page.has_next_page()
        );
        records.extend(page.records);

        match page.next {
            None => break,
            Some(next) => {
                if !visited.insert(next.clone()) {
                    return Err(ApiError::InvalidResponse(format!(
                        "pagination loop: next_url '{}' was already fetched",
                        next
                    ))
                    .into());
                }
                cursor = Cursor::Next(next);
            }
        }
    }

    debug!("Fetched {} records across {} pages", records.len(), pages);
    Ok(records)
}
