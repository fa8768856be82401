//! App listing commands
//!
//! `diego-apps` and `dea-apps` walk every page of matching applications, then
//! every page of spaces (and organizations when spaces lack inline names),
//! and print one row per application.

use colored::Colorize;
use log::{debug, warn};

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::CloudControllerApi;
use crate::error::Result;
use crate::models::{AppRow, Directory};
use crate::output::{Formattable, say_ok};

/// Which runtime a listing selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    Diego,
    Dea,
}

impl Runtime {
    /// Value of the `diego` flag for apps on this runtime.
    pub fn diego_flag(self) -> bool {
        matches!(self, Runtime::Diego)
    }

    pub fn label(self) -> &'static str {
        match self {
            Runtime::Diego => "Diego",
            Runtime::Dea => "DEA",
        }
    }
}

/// Fetch and join the rows for one runtime.
pub async fn fetch_rows(api: &dyn CloudControllerApi, runtime: Runtime) -> Result<Vec<AppRow>> {
    let apps = api.list_apps(runtime.diego_flag()).await?;
    debug!("Fetched {} {} apps", apps.len(), runtime.label());

    let spaces = api.list_spaces().await?;
    // Organization names are secondary; rows fall back to the org GUID.
    let orgs = if Directory::needs_org_lookup(&spaces) {
        match api.list_orgs().await {
            Ok(orgs) => orgs,
            Err(e) => {
                warn!("Could not list organizations, showing GUIDs instead: {}", e);
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };
    debug!("Fetched {} spaces, {} organizations", spaces.len(), orgs.len());

    Ok(Directory::new(spaces, orgs).join(&apps))
}

/// Run `diego-apps` or `dea-apps`.
pub async fn list(opts: &GlobalOptions, runtime: Runtime) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let interactive = ctx.format.is_interactive();

    if interactive {
        println!(
            "Getting apps on the {} runtime as {}...",
            runtime.label(),
            ctx.username().cyan().bold()
        );
    }

    let rows = fetch_rows(&ctx.client, runtime).await?;

    if interactive {
        say_ok();
    }
    rows.print(ctx.format)
}
