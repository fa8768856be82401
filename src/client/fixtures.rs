//! Test fixtures for control-plane payloads and records
//!
//! Provides raw `/v2` page bodies for parser and pagination tests, and
//! builders with sensible defaults for the typed records.
//! Import via `use crate::client::fixtures::*` in test modules.

use serde_json::{Value, json};

use super::models::{Application, Organization, Space};

// ============================================================================
// Raw page payloads
// ============================================================================

/// One application resource as returned by `/v2/apps`.
pub fn app_resource(guid: &str, name: &str, space_guid: &str, diego: bool) -> Value {
    json!({
        "metadata": { "guid": guid, "url": format!("/v2/apps/{}", guid) },
        "entity": { "name": name, "space_guid": space_guid, "diego": diego, "state": "STARTED" }
    })
}

/// One space resource, optionally carrying its organization inline.
pub fn space_resource(guid: &str, name: &str, org_guid: &str, org_name: Option<&str>) -> Value {
    let mut entity = json!({ "name": name, "organization_guid": org_guid });
    if let Some(org_name) = org_name {
        entity["organization"] = org_resource(org_guid, org_name);
    }
    json!({ "metadata": { "guid": guid }, "entity": entity })
}

/// One organization resource.
pub fn org_resource(guid: &str, name: &str) -> Value {
    json!({ "metadata": { "guid": guid }, "entity": { "name": name, "status": "active" } })
}

/// A complete page body.
pub fn page(resources: Vec<Value>, next_url: Option<&str>) -> Vec<u8> {
    let body = json!({
        "total_results": resources.len(),
        "prev_url": null,
        "next_url": next_url,
        "resources": resources,
    });
    body.to_string().into_bytes()
}

// ============================================================================
// ApplicationBuilder
// ============================================================================

/// Builder for test Application instances.
///
/// # Example
/// ```ignore
/// let app = ApplicationBuilder::new("app-1").name("web").space("space-1").diego(true).build();
/// ```
#[derive(Debug, Clone)]
pub struct ApplicationBuilder {
    guid: String,
    name: String,
    space_guid: String,
    diego: bool,
}

impl ApplicationBuilder {
    pub fn new(guid: impl Into<String>) -> Self {
        let guid = guid.into();
        Self {
            name: format!("app {}", &guid),
            guid,
            space_guid: "space-default".to_string(),
            diego: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn space(mut self, space_guid: impl Into<String>) -> Self {
        self.space_guid = space_guid.into();
        self
    }

    pub fn diego(mut self, diego: bool) -> Self {
        self.diego = diego;
        self
    }

    pub fn build(self) -> Application {
        Application {
            guid: self.guid,
            name: self.name,
            space_guid: self.space_guid,
            diego: self.diego,
        }
    }
}

// ============================================================================
// SpaceBuilder
// ============================================================================

/// Builder for test Space instances.
#[derive(Debug, Clone)]
pub struct SpaceBuilder {
    guid: String,
    name: String,
    organization_guid: String,
    organization: Option<Organization>,
}

impl SpaceBuilder {
    pub fn new(guid: impl Into<String>) -> Self {
        let guid = guid.into();
        Self {
            name: format!("space {}", &guid),
            guid,
            organization_guid: "org-default".to_string(),
            organization: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the owning organization GUID without inline details.
    pub fn org(mut self, org_guid: impl Into<String>) -> Self {
        self.organization_guid = org_guid.into();
        self
    }

    /// Set the owning organization with an inline name.
    pub fn inline_org(mut self, org_guid: impl Into<String>, name: impl Into<String>) -> Self {
        let org = Organization {
            guid: org_guid.into(),
            name: name.into(),
        };
        self.organization_guid = org.guid.clone();
        self.organization = Some(org);
        self
    }

    pub fn build(self) -> Space {
        Space {
            guid: self.guid,
            name: self.name,
            organization_guid: self.organization_guid,
            organization: self.organization,
        }
    }
}

/// An organization record.
pub fn org(guid: &str, name: &str) -> Organization {
    Organization {
        guid: guid.to_string(),
        name: name.to_string(),
    }
}
