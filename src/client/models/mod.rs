//! Control-plane data models
//!
//! Typed records decoded from `/v2` collection pages, plus the parsers that
//! turn one raw page body into a [`Page`](super::pagination::Page).

mod app;
mod org;
mod resource;
mod space;

pub use app::{AppSummary, Application, ApplicationsParser};
pub use org::{Organization, OrganizationsParser};
pub use space::{Space, SpacesParser};
