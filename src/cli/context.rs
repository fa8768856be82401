//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, login validation, and client initialization.

use log::warn;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::CloudControllerClient;
use crate::config::{Config, Session};
use crate::error::{Error, Result};

/// Context for command execution containing config, client, and output options.
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: Config,
    /// Cloud controller client for the configured endpoint
    pub client: CloudControllerClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// This handles:
    /// - Loading config from path (or default location)
    /// - Applying the `--api` override if provided
    /// - Checking that a session is present
    /// - Creating the API client
    ///
    /// # Errors
    /// Returns error if config cannot be loaded, the user is not logged in,
    /// or the endpoint is unusable.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?.with_api_endpoint(opts.api_ref());
        Self::from_config(config, opts.format)
    }

    fn from_config(config: Config, format: OutputFormat) -> Result<Self> {
        if !config.is_logged_in() {
            return Err(Error::NotLoggedIn);
        }
        if let Some(expires_at) = config.token_expired_at() {
            warn!("Access token expired at {}; the API may reject it", expires_at);
        }

        let client = CloudControllerClient::new(config.clone())?;

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Name of the logged-in user, for progress lines.
    pub fn username(&self) -> String {
        self.config.username()
    }
}
