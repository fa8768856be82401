//! Application listing rows
//!
//! Joins applications to their spaces and organizations. Ownership metadata
//! is secondary: an application whose space cannot be resolved still gets a
//! row, showing the raw space GUID and an empty organization.

use std::collections::HashMap;

use serde::Serialize;
use tabled::Tabled;

use crate::client::{Application, Organization, Space};

/// One application row for table/JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize)]
pub struct AppRow {
    /// Application name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Space name, or the raw space GUID when unresolved
    #[tabled(rename = "SPACE")]
    pub space: String,

    /// Organization name, or the raw organization GUID when the name is unknown
    #[tabled(rename = "ORG")]
    pub org: String,
}

/// Lookup tables for resolving application ownership.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    spaces: HashMap<String, Space>,
    orgs: HashMap<String, Organization>,
}

impl Directory {
    pub fn new(spaces: Vec<Space>, orgs: Vec<Organization>) -> Self {
        Self {
            spaces: spaces.into_iter().map(|s| (s.guid.clone(), s)).collect(),
            orgs: orgs.into_iter().map(|o| (o.guid.clone(), o)).collect(),
        }
    }

    /// Whether any space lacks an inline organization name.
    pub fn needs_org_lookup(spaces: &[Space]) -> bool {
        spaces.iter().any(|space| {
            space
                .organization
                .as_ref()
                .is_none_or(|org| org.name.is_empty())
        })
    }

    /// Space column for an application.
    pub fn space_display(&self, app: &Application) -> String {
        match self.spaces.get(&app.space_guid) {
            Some(space) => space.name.clone(),
            None => app.space_guid.clone(),
        }
    }

    /// Organization column for an application.
    pub fn org_display(&self, app: &Application) -> String {
        let Some(space) = self.spaces.get(&app.space_guid) else {
            return String::new();
        };

        let inline = space
            .organization
            .as_ref()
            .map(|org| org.name.as_str())
            .filter(|name| !name.is_empty());
        let listed = self
            .orgs
            .get(&space.organization_guid)
            .map(|org| org.name.as_str())
            .filter(|name| !name.is_empty());

        inline
            .or(listed)
            .unwrap_or(&space.organization_guid)
            .to_string()
    }

    /// One row per application, in application order.
    pub fn join(&self, apps: &[Application]) -> Vec<AppRow> {
        apps.iter()
            .map(|app| AppRow {
                name: app.name.clone(),
                space: self.space_display(app),
                org: self.org_display(app),
            })
            .collect()
    }
}
