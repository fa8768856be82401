//! Configuration management for diego-enabler
//!
//! The configuration file doubles as the session store: whatever logged the
//! user in writes the API endpoint and access token here, and every command
//! reads them back through the [`Session`] trait.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

mod session;

pub use session::Session;

/// Control-plane maximum for `results-per-page`.
pub const MAX_PAGE_SIZE: usize = 100;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Control-plane API endpoint, e.g. `https://api.example.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,

    /// Bearer credential, stored either bare or as `bearer <token>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Display name of the logged-in user (falls back to the token's claims)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Targeted space; scopes application lookups by name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_guid: Option<String>,

    /// Accept self-signed certificates from the API
    #[serde(default)]
    pub skip_ssl_validation: bool,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Records requested per page when listing collections
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    MAX_PAGE_SIZE
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".diego-enabler").join("config.yaml"))
    }

    /// Resolve an optional override against the default path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path (defaults to ~/.diego-enabler/config.yaml)
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Replace the configured API endpoint (from `--api`).
    pub fn with_api_endpoint(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint {
            self.api_endpoint = Some(endpoint.to_string());
        }
        self
    }

    /// Page size clamped to what the control plane accepts.
    pub fn page_size(&self) -> usize {
        self.preferences.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}
