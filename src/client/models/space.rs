//! Space models

use serde::{Deserialize, Serialize};

use super::org::{OrgEntity, Organization};
use super::resource::{FromResource, Resource, ResourceParser};

/// Space resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Space {
    /// Space GUID
    pub guid: String,

    /// Space name
    pub name: String,

    /// GUID of the owning organization
    pub organization_guid: String,

    /// Owning organization, when the page was fetched with inline relations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
}

#[derive(Debug, Deserialize)]
pub struct SpaceEntity {
    name: String,
    organization_guid: String,
    #[serde(default)]
    organization: Option<Resource<OrgEntity>>,
}

impl FromResource for Space {
    type Entity = SpaceEntity;

    fn from_resource(guid: String, entity: SpaceEntity) -> Self {
        Self {
            guid,
            name: entity.name,
            organization_guid: entity.organization_guid,
            organization: entity
                .organization
                .map(|org| Organization::from_resource(org.metadata.guid, org.entity)),
        }
    }
}

/// Parser for `/v2/spaces` pages
pub type SpacesParser = ResourceParser<Space>;
