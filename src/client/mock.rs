//! Test doubles for the cloud controller
//!
//! [`ScriptedTransport`] replays canned HTTP responses in order and records
//! every request it receives. [`MockCloudController`] implements
//! [`CloudControllerApi`] directly for command-level tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::CloudControllerApi;
use super::models::{AppSummary, Application, Organization, Space};
use super::request::RequestDescriptor;
use super::transport::HttpTransport;
use crate::error::{ApiError, Result};

// ============================================================================
// ScriptedTransport
// ============================================================================

/// Transport that replays scripted responses in order.
///
/// # Example
/// ```ignore
/// let transport = ScriptedTransport::new()
///     .with_body(page(vec![app_resource("a", "web", "s", true)], Some("/v2/apps?page=2")))
///     .with_error(ApiError::ServerError("boom".into()));
/// ```
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<std::result::Result<Vec<u8>, ApiError>>>>,
    requests: Arc<Mutex<Vec<RequestDescriptor>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    pub fn with_body(self, body: Vec<u8>) -> Self {
        self.push(Ok(body));
        self
    }

    /// Queue a failed response.
    pub fn with_error(self, error: ApiError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, response: std::result::Result<Vec<u8>, ApiError>) {
        self.responses
            .try_lock()
            .expect("scripted transport is configured before use")
            .push_back(response);
    }

    /// Every request executed so far, in order.
    pub async fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: RequestDescriptor) -> Result<Vec<u8>> {
        self.requests.lock().await.push(request);

        match self.responses.lock().await.pop_front() {
            Some(response) => response.map_err(Into::into),
            None => Err(ApiError::Network("no scripted response left".to_string()).into()),
        }
    }
}

// ============================================================================
// MockCloudController
// ============================================================================

/// Mock cloud controller for command-level tests.
///
/// `get_app` answers from a queue so tests can script the read before a
/// write and the re-read after it independently.
#[derive(Default)]
pub struct MockCloudController {
    apps: Arc<Mutex<Vec<Application>>>,
    spaces: Arc<Mutex<Vec<Space>>>,
    orgs: Arc<Mutex<Vec<Organization>>>,
    lookups: Arc<Mutex<VecDeque<AppSummary>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Error returned by `set_diego_flag` only
    set_error: Arc<Mutex<Option<ApiError>>>,
    /// Error returned by `list_orgs` only
    orgs_error: Arc<Mutex<Option<ApiError>>>,
    call_count: Arc<Mutex<CallCounts>>,
    /// `(guid, enabled)` pairs passed to `set_diego_flag`
    flag_writes: Arc<Mutex<Vec<(String, bool)>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_apps: usize,
    pub list_spaces: usize,
    pub list_orgs: usize,
    pub get_app: usize,
    pub set_diego_flag: usize,
}

impl MockCloudController {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_apps(self, apps: Vec<Application>) -> Self {
        *self.apps.lock().await = apps;
        self
    }

    pub async fn with_spaces(self, spaces: Vec<Space>) -> Self {
        *self.spaces.lock().await = spaces;
        self
    }

    pub async fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        *self.orgs.lock().await = orgs;
        self
    }

    /// Queue the answer for the next `get_app` call.
    pub async fn with_lookup(self, summary: AppSummary) -> Self {
        self.lookups.lock().await.push_back(summary);
        self
    }

    /// Configure an error to return on the next API call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Configure `set_diego_flag` to fail.
    pub async fn with_set_error(self, error: ApiError) -> Self {
        *self.set_error.lock().await = Some(error);
        self
    }

    /// Configure `list_orgs` to fail.
    pub async fn with_orgs_error(self, error: ApiError) -> Self {
        *self.orgs_error.lock().await = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn flag_writes(&self) -> Vec<(String, bool)> {
        self.flag_writes.lock().await.clone()
    }

    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl CloudControllerApi for MockCloudController {
    async fn list_apps(&self, diego: bool) -> Result<Vec<Application>> {
        self.check_error().await?;
        self.call_count.lock().await.list_apps += 1;

        Ok(self
            .apps
            .lock()
            .await
            .iter()
            .filter(|app| app.diego == diego)
            .cloned()
            .collect())
    }

    async fn list_spaces(&self) -> Result<Vec<Space>> {
        self.check_error().await?;
        self.call_count.lock().await.list_spaces += 1;
        Ok(self.spaces.lock().await.clone())
    }

    async fn list_orgs(&self) -> Result<Vec<Organization>> {
        self.check_error().await?;
        self.call_count.lock().await.list_orgs += 1;

        if let Some(e) = self.orgs_error.lock().await.take() {
            return Err(e.into());
        }
        Ok(self.orgs.lock().await.clone())
    }

    async fn get_app(&self, name: &str) -> Result<AppSummary> {
        self.check_error().await?;
        self.call_count.lock().await.get_app += 1;

        Ok(self
            .lookups
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| AppSummary::not_found(name)))
    }

    async fn set_diego_flag(&self, app_guid: &str, enabled: bool) -> Result<()> {
        self.check_error().await?;
        self.call_count.lock().await.set_diego_flag += 1;
        self.flag_writes
            .lock()
            .await
            .push((app_guid.to_string(), enabled));

        if let Some(e) = self.set_error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{ApplicationBuilder, page};
    use crate::error::Error;
    use reqwest::Url;

    fn request() -> RequestDescriptor {
        RequestDescriptor::get(Url::parse("https://api.example.com/v2/apps").unwrap())
    }

    #[tokio::test]
    async fn test_scripted_transport_replays_in_order() {
        let transport = ScriptedTransport::new()
            .with_body(page(vec![], None))
            .with_error(ApiError::Forbidden);

        assert!(transport.execute(request()).await.is_ok());
        assert!(matches!(
            transport.execute(request()).await,
            Err(Error::Api(ApiError::Forbidden))
        ));
        assert!(matches!(
            transport.execute(request()).await,
            Err(Error::Api(ApiError::Network(_)))
        ));
        assert_eq!(transport.requests().await.len(), 3);
    }

    #[tokio::test]
    async fn test_mock_filters_apps_by_flag() {
        let mock = MockCloudController::new()
            .with_apps(vec![
                ApplicationBuilder::new("a").diego(true).build(),
                ApplicationBuilder::new("b").diego(false).build(),
            ])
            .await;

        assert_eq!(mock.list_apps(true).await.unwrap().len(), 1);
        assert_eq!(mock.list_apps(false).await.unwrap()[0].guid, "b");
        assert_eq!(mock.call_counts().await.list_apps, 2);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let mock = MockCloudController::new()
            .with_error(ApiError::Unauthorized)
            .await;

        assert!(mock.list_spaces().await.is_err());
        assert!(mock.list_spaces().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_lookup_queue_falls_back_to_not_found() {
        let mock = MockCloudController::new()
            .with_lookup(AppSummary {
                guid: "g".to_string(),
                name: "web".to_string(),
                diego: true,
            })
            .await;

        assert!(mock.get_app("web").await.unwrap().is_found());
        assert!(!mock.get_app("web").await.unwrap().is_found());
    }
}
