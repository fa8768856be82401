//! Set-then-verify protocol for the Diego flag
//!
//! A write to the control plane only says the request was accepted. The
//! toggle therefore runs in two explicit steps: [`FlagToggle::set`] issues the
//! write and hands back a [`PendingVerification`], whose
//! [`PendingVerification::verify`] re-reads the application and reports
//! whether the flag converged.

use log::debug;

use crate::client::{AppSummary, CloudControllerApi};
use crate::error::{Error, Result};

/// Where a toggle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Setting,
    Verifying,
    Converged,
    Diverged,
}

/// A requested change to one application's Diego flag.
pub struct FlagToggle<'a> {
    api: &'a dyn CloudControllerApi,
    app_name: String,
    desired: bool,
}

impl<'a> FlagToggle<'a> {
    pub fn new(api: &'a dyn CloudControllerApi, app_name: impl Into<String>, desired: bool) -> Self {
        Self {
            api,
            app_name: app_name.into(),
            desired,
        }
    }

    pub fn state(&self) -> ToggleState {
        ToggleState::Setting
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn desired(&self) -> bool {
        self.desired
    }

    /// Resolve the application and write the requested flag.
    ///
    /// An unknown name fails with [`Error::AppNotFound`] before any write.
    pub async fn set(self) -> Result<PendingVerification<'a>> {
        let app = lookup(self.api, &self.app_name).await?;

        debug!(
            "{}: {:?} guid={} desired={}",
            self.app_name,
            self.state(),
            app.guid,
            self.desired
        );
        self.api.set_diego_flag(&app.guid, self.desired).await?;

        Ok(PendingVerification {
            api: self.api,
            app_name: self.app_name,
            desired: self.desired,
        })
    }
}

/// A toggle whose write was accepted but not yet confirmed.
pub struct PendingVerification<'a> {
    api: &'a dyn CloudControllerApi,
    app_name: String,
    desired: bool,
}

impl PendingVerification<'_> {
    pub fn state(&self) -> ToggleState {
        ToggleState::Verifying
    }

    /// Re-read the application once and compare its flag to the request.
    pub async fn verify(self) -> Result<ToggleState> {
        debug!("{}: {:?}", self.app_name, self.state());
        let app = lookup(self.api, &self.app_name).await?;

        let outcome = if app.diego == self.desired {
            ToggleState::Converged
        } else {
            ToggleState::Diverged
        };
        debug!("{}: {:?} (diego={})", self.app_name, outcome, app.diego);
        Ok(outcome)
    }
}

/// Current Diego flag of an application.
pub async fn diego_enabled(api: &dyn CloudControllerApi, app_name: &str) -> Result<bool> {
    Ok(lookup(api, app_name).await?.diego)
}

async fn lookup(api: &dyn CloudControllerApi, app_name: &str) -> Result<AppSummary> {
    let app = api.get_app(app_name).await?;
    if !app.is_found() {
        return Err(Error::AppNotFound(app_name.to_string()));
    }
    Ok(app)
}
