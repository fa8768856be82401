//! Organization models

use serde::{Deserialize, Serialize};

use super::resource::{FromResource, ResourceParser};

/// Organization resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    /// Organization GUID
    pub guid: String,

    /// Organization name; empty when the API omitted it
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrgEntity {
    #[serde(default)]
    pub(super) name: Option<String>,
}

impl FromResource for Organization {
    type Entity = OrgEntity;

    fn from_resource(guid: String, entity: OrgEntity) -> Self {
        Self {
            guid,
            name: entity.name.unwrap_or_default(),
        }
    }
}

/// Parser for `/v2/organizations` pages
pub type OrganizationsParser = ResourceParser<Organization>;
