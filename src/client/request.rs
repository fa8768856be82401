//! Request factories for control-plane collections
//!
//! A [`RequestFactory`] turns a pagination [`Cursor`] into a fully-formed
//! [`RequestDescriptor`]. Factories are stateless and compose by wrapping:
//! [`Authorized`] decorates any factory with the session's bearer credential.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use serde_json::{Value, json};

use crate::config::Session;
use crate::error::{ApiError, ConfigError, Error, Result};

/// Position in a paginated collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// The first page; filters and page size are applied here.
    First,
    /// An opaque `next_url` returned by the previous page.
    Next(String),
}

/// Everything needed to issue one HTTP request.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// A GET request with no headers yet.
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

/// Builds a request for a given cursor.
pub trait RequestFactory: Send + Sync {
    fn build(&self, cursor: &Cursor) -> Result<RequestDescriptor>;
}

/// The three collections this tool reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Apps,
    Spaces,
    Organizations,
}

impl Collection {
    fn path(&self) -> &'static str {
        match self {
            Collection::Apps => "/v2/apps",
            Collection::Spaces => "/v2/spaces",
            Collection::Organizations => "/v2/organizations",
        }
    }
}

/// Query predicate sent as `q=<field>:<value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Diego(bool),
    Name(String),
}

impl Filter {
    fn to_query(&self) -> String {
        match self {
            Filter::Diego(enabled) => format!("diego:{}", enabled),
            Filter::Name(name) => format!("name:{}", name),
        }
    }
}

/// Builds list requests for one collection.
///
/// # Example
/// ```ignore
/// let factory = CollectionRequestFactory::new(base, Collection::Apps)
///     .filter(Filter::Diego(true))
///     .page_size(50);
/// let first = factory.build(&Cursor::First)?;
/// ```
#[derive(Debug, Clone)]
pub struct CollectionRequestFactory {
    base: Url,
    collection: Collection,
    filter: Option<Filter>,
    page_size: Option<usize>,
    space_guid: Option<String>,
}

impl CollectionRequestFactory {
    pub fn new(base: Url, collection: Collection) -> Self {
        Self {
            base,
            collection,
            filter: None,
            page_size: None,
            space_guid: None,
        }
    }

    /// Restrict the first page with a query predicate.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set `results-per-page` on the first page.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Scope an application listing to one space (`/v2/spaces/<guid>/apps`).
    pub fn in_space(mut self, space_guid: Option<&str>) -> Self {
        self.space_guid = space_guid.map(String::from);
        self
    }

    fn first_page_url(&self) -> Result<Url> {
        let path = match (&self.space_guid, self.collection) {
            (Some(space), Collection::Apps) => format!("/v2/spaces/{}/apps", space),
            _ => self.collection.path().to_string(),
        };

        let mut url = self
            .base
            .join(&path)
            .map_err(|e| ConfigError::Invalid(format!("cannot build URL for {}: {}", path, e)))?;

        {
            let mut query = url.query_pairs_mut();
            if let Some(ref filter) = self.filter {
                query.append_pair("q", &filter.to_query());
            }
            if let Some(size) = self.page_size {
                query.append_pair("results-per-page", &size.to_string());
            }
            if self.collection == Collection::Spaces {
                query.append_pair("inline-relations-depth", "1");
            }
        }

        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }

    fn next_page_url(&self, next: &str) -> Result<Url> {
        let url = self
            .base
            .join(next)
            .map_err(|e| ApiError::InvalidResponse(format!("bad next_url '{}': {}", next, e)))?;

        // The credential must never leave the API host.
        if url.origin() != self.base.origin() {
            return Err(ApiError::InvalidResponse(format!(
                "next_url '{}' points outside {}",
                next, self.base
            ))
            .into());
        }

        Ok(url)
    }
}

impl RequestFactory for CollectionRequestFactory {
    fn build(&self, cursor: &Cursor) -> Result<RequestDescriptor> {
        let url = match cursor {
            Cursor::First => self.first_page_url()?,
            Cursor::Next(next) => self.next_page_url(next)?,
        };
        Ok(RequestDescriptor::get(url))
    }
}

/// Single-shot `PUT /v2/apps/<guid>` updating the Diego flag.
///
/// Not paginated, so every cursor yields the same request.
#[derive(Debug, Clone)]
pub struct DiegoFlagUpdate {
    base: Url,
    app_guid: String,
    enabled: bool,
}

impl DiegoFlagUpdate {
    pub fn new(base: Url, app_guid: impl Into<String>, enabled: bool) -> Self {
        Self {
            base,
            app_guid: app_guid.into(),
            enabled,
        }
    }
}

impl RequestFactory for DiegoFlagUpdate {
    fn build(&self, _cursor: &Cursor) -> Result<RequestDescriptor> {
        let path = format!("/v2/apps/{}", self.app_guid);
        let url = self
            .base
            .join(&path)
            .map_err(|e| ConfigError::Invalid(format!("cannot build URL for {}: {}", path, e)))?;

        Ok(RequestDescriptor {
            method: Method::PUT,
            url,
            headers: HeaderMap::new(),
            body: Some(json!({ "diego": self.enabled })),
        })
    }
}

/// Decorates a factory with the session's bearer credential.
///
/// The credential is captured once when wrapping; it is not refreshed while
/// pages are being walked.
#[derive(Debug, Clone)]
pub struct Authorized<F> {
    inner: F,
    credential: HeaderValue,
}

impl<F: RequestFactory> Authorized<F> {
    /// Wrap `inner`, failing fast when the session has no credential.
    pub fn new<S: Session + ?Sized>(inner: F, session: &S) -> Result<Self> {
        if !session.is_logged_in() {
            return Err(Error::NotLoggedIn);
        }

        let token = session.access_token()?;
        let mut credential = HeaderValue::from_str(&token).map_err(|_| {
            ConfigError::Invalid("access token contains characters not allowed in a header".into())
        })?;
        credential.set_sensitive(true);

        Ok(Self { inner, credential })
    }
}

impl<F: RequestFactory> RequestFactory for Authorized<F> {
    fn build(&self, cursor: &Cursor) -> Result<RequestDescriptor> {
        let mut request = self.inner.build(cursor)?;
        request
            .headers
            .insert(AUTHORIZATION, self.credential.clone());
        Ok(request)
    }
}
