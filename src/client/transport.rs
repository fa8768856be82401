//! HTTP transport for request descriptors

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};

use super::request::RequestDescriptor;
use crate::error::{ApiError, Result};

/// Executes one request and returns the body of a successful response.
///
/// Non-success statuses are mapped to [`ApiError`] variants.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: RequestDescriptor) -> Result<Vec<u8>>;
}

/// `reqwest`-backed transport.
pub struct ReqwestTransport {
    http: HttpClient,
}

impl ReqwestTransport {
    /// Build the HTTP client. No request timeout is set beyond reqwest's defaults.
    pub fn new(skip_ssl_validation: bool) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("diego-enabler/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(skip_ssl_validation)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: RequestDescriptor) -> Result<Vec<u8>> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(ApiError::from)?;
            return Ok(bytes.to_vec());
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, body).into())
    }
}

/// Map a non-success status and its body to an API error.
fn status_error(status: StatusCode, body: String) -> ApiError {
    let body_or = |fallback: String| if body.trim().is_empty() { fallback } else { body.clone() };

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(body_or("Resource not found".to_string())),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(body_or("Bad request".to_string()))
        }
        status if status.is_server_error() => {
            ApiError::ServerError(body_or(format!("Server error: {}", status)))
        }
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}
