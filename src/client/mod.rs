//! Cloud controller API client
//!
//! Requests are built by [`request::RequestFactory`] implementations, signed
//! by [`request::Authorized`], executed by an [`HttpTransport`] and decoded by
//! the parsers in [`models`]. [`pagination::fetch_all`] ties them together
//! for collection listings.

use async_trait::async_trait;

use crate::error::Result;

pub mod cloud_controller;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod request;
pub mod transport;

pub use cloud_controller::CloudControllerClient;
pub use models::{AppSummary, Application, Organization, Space};

/// Cloud controller operations used by the commands.
#[async_trait]
pub trait CloudControllerApi: Send + Sync {
    /// List every visible application whose Diego flag equals `diego`.
    async fn list_apps(&self, diego: bool) -> Result<Vec<Application>>;

    /// List every visible space, with inline organization details where available.
    async fn list_spaces(&self) -> Result<Vec<Space>>;

    /// List every visible organization.
    async fn list_orgs(&self) -> Result<Vec<Organization>>;

    /// Look up one application by name.
    ///
    /// An unknown name is not an error: the summary comes back with an empty GUID.
    async fn get_app(&self, name: &str) -> Result<AppSummary>;

    /// Request a new value for an application's Diego flag.
    ///
    /// Success only means the control plane accepted the write.
    async fn set_diego_flag(&self, app_guid: &str, enabled: bool) -> Result<()>;
}
