//! Application models

use serde::{Deserialize, Serialize};

use super::resource::{FromResource, ResourceParser};

/// Application resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Application {
    /// Application GUID
    pub guid: String,

    /// Application name
    pub name: String,

    /// GUID of the owning space
    pub space_guid: String,

    /// Whether the app runs on the Diego runtime
    pub diego: bool,
}

#[derive(Debug, Deserialize)]
pub struct AppEntity {
    name: String,
    space_guid: String,
    #[serde(default)]
    diego: Option<bool>,
}

impl FromResource for Application {
    type Entity = AppEntity;

    fn from_resource(guid: String, entity: AppEntity) -> Self {
        Self {
            guid,
            name: entity.name,
            space_guid: entity.space_guid,
            diego: entity.diego.unwrap_or(false),
        }
    }
}

/// Parser for `/v2/apps` pages
pub type ApplicationsParser = ResourceParser<Application>;

/// Result of looking an application up by name.
///
/// An empty `guid` means no application with that name is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSummary {
    pub guid: String,
    pub name: String,
    pub diego: bool,
}

impl AppSummary {
    /// Summary for a name that did not resolve.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self {
            guid: String::new(),
            name: name.into(),
            diego: false,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.guid.is_empty()
    }
}

impl From<Application> for AppSummary {
    fn from(app: Application) -> Self {
        Self {
            guid: app.guid,
            name: app.name,
            diego: app.diego,
        }
    }
}
