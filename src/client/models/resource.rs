//! The `/v2` resource envelope shared by every collection

use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::client::pagination::{Page, PageParser};
use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Deserialize)]
pub(super) struct Metadata {
    pub guid: String,
}

/// One `{ "metadata": ..., "entity": ... }` item.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct Resource<E> {
    pub metadata: Metadata,
    pub entity: E,
}

#[derive(Debug, Deserialize)]
struct Envelope<E> {
    #[serde(default)]
    next_url: Option<String>,
    resources: Vec<Resource<E>>,
}

/// A record that can be built from a resource's guid and entity.
pub trait FromResource: Sized {
    type Entity: DeserializeOwned;

    fn from_resource(guid: String, entity: Self::Entity) -> Self;
}

/// Decodes one collection page into typed records.
#[derive(Debug)]
pub struct ResourceParser<T> {
    _record: PhantomData<fn() -> T>,
}

impl<T> ResourceParser<T> {
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> Default for ResourceParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FromResource> PageParser for ResourceParser<T> {
    type Record = T;

    fn parse(&self, body: &[u8]) -> Result<Page<T>> {
        let envelope: Envelope<T::Entity> = serde_json::from_slice(body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse page: {}", e)))?;

        let records = envelope
            .resources
            .into_iter()
            .map(|r| T::from_resource(r.metadata.guid, r.entity))
            .collect();

        Ok(Page::new(
            records,
            envelope.next_url.filter(|next| !next.is_empty()),
        ))
    }
}
