//! Diego flag commands

use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::CloudControllerApi;
use crate::error::{Error, Result};
use crate::output::say_ok;
use crate::toggle::{FlagToggle, ToggleState, diego_enabled};

/// Run `enable-diego` or `disable-diego`.
pub async fn set(opts: &GlobalOptions, app_name: &str, enabled: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    toggle(&ctx.client, app_name, enabled).await
}

/// Set the flag, then confirm it with a fresh read.
pub async fn toggle(api: &dyn CloudControllerApi, app_name: &str, enabled: bool) -> Result<()> {
    let toggle = FlagToggle::new(api, app_name, enabled);

    println!(
        "Setting {} Diego support to {}",
        toggle.app_name(),
        toggle.desired()
    );
    let pending = toggle.set().await?;
    say_ok();

    println!("Verifying {} Diego support is set to {}", app_name, enabled);
    match pending.verify().await? {
        ToggleState::Converged => {
            say_ok();
            Ok(())
        }
        state => {
            debug!("{} ended in {:?}", app_name, state);
            Err(Error::Diverged {
                app: app_name.to_string(),
                requested: enabled,
            })
        }
    }
}

/// Run `has-diego-enabled`.
pub async fn has_enabled(opts: &GlobalOptions, app_name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    println!("{}", diego_enabled(&ctx.client, app_name).await?);
    Ok(())
}
