//! Session primitives backed by the configuration file

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::Deserialize;

use super::Config;
use crate::error::{ConfigError, Error, Result};

/// Identity and session state exposed by the host environment.
pub trait Session {
    /// Whether a credential is available for this invocation.
    fn is_logged_in(&self) -> bool;

    /// Bearer credential, ready for an `Authorization` header.
    fn access_token(&self) -> Result<String>;

    /// Control-plane API base URL.
    fn api_endpoint(&self) -> Result<Url>;

    /// Name shown in progress messages.
    fn username(&self) -> String;
}

/// The subset of access-token claims we read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Decode the payload segment of a JWT without verifying it.
    ///
    /// Returns `None` for anything that is not a three-part token with a
    /// JSON payload; opaque tokens are legitimate and simply carry no claims.
    pub fn decode(token: &str) -> Option<Self> {
        let raw = strip_scheme(token);
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() != 3 {
            return None;
        }

        let payload = URL_SAFE_NO_PAD
            .decode(parts[1].trim_end_matches('='))
            .ok()?;
        serde_json::from_slice(&payload).ok()
    }

    /// Expiry as a timestamp, when the token carries one.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }
}

fn strip_scheme(token: &str) -> &str {
    let trimmed = token.trim();
    match trimmed.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ => trimmed,
    }
}

impl Config {
    fn token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.eq_ignore_ascii_case("bearer") && !strip_scheme(t).is_empty())
    }

    /// Expiry of the access token, when it has already passed.
    ///
    /// An expired token is still sent; the API decides whether to accept it.
    pub fn token_expired_at(&self) -> Option<DateTime<Utc>> {
        self.token()
            .and_then(TokenClaims::decode)
            .and_then(|c| c.expires_at())
            .filter(|expires_at| *expires_at < Utc::now())
    }
}

impl Session for Config {
    fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    fn access_token(&self) -> Result<String> {
        let token = self.token().ok_or(Error::NotLoggedIn)?;

        if token
            .get(..7)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("bearer "))
        {
            Ok(token.to_string())
        } else {
            Ok(format!("Bearer {}", token))
        }
    }

    fn api_endpoint(&self) -> Result<Url> {
        let endpoint = self
            .api_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or(ConfigError::MissingApiEndpoint)?;

        Url::parse(endpoint).map_err(|e| {
            ConfigError::Invalid(format!("api_endpoint '{}': {}", endpoint, e)).into()
        })
    }

    fn username(&self) -> String {
        if let Some(name) = self.username.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }

        self.token()
            .and_then(TokenClaims::decode)
            .and_then(|c| c.user_name)
            .unwrap_or_else(|| "unknown".to_string())
    }
}
