//! Cloud controller client implementation

use async_trait::async_trait;
use log::debug;
use reqwest::Url;

use super::models::{
    AppSummary, Application, ApplicationsParser, Organization, OrganizationsParser, Space,
    SpacesParser,
};
use super::pagination::{PageParser, fetch_all};
use super::request::{
    Authorized, Collection, CollectionRequestFactory, Cursor, DiegoFlagUpdate, Filter,
    RequestFactory,
};
use super::transport::{HttpTransport, ReqwestTransport};
use super::CloudControllerApi;
use crate::config::{Config, Session};
use crate::error::Result;

/// Cloud controller client bound to one session.
pub struct CloudControllerClient<T = ReqwestTransport> {
    config: Config,
    base_url: Url,
    transport: T,
}

impl CloudControllerClient<ReqwestTransport> {
    /// Create a client for the configured API endpoint.
    pub fn new(config: Config) -> Result<Self> {
        let transport = ReqwestTransport::new(config.skip_ssl_validation)?;
        Self::with_transport(config, transport)
    }
}

impl<T: HttpTransport> CloudControllerClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn with_transport(config: Config, transport: T) -> Result<Self> {
        let base_url = config.api_endpoint()?;
        Ok(Self {
            config,
            base_url,
            transport,
        })
    }

    fn collection(&self, collection: Collection) -> CollectionRequestFactory {
        CollectionRequestFactory::new(self.base_url.clone(), collection)
            .page_size(self.config.page_size())
    }

    async fn walk<P: PageParser>(
        &self,
        factory: CollectionRequestFactory,
        parser: P,
    ) -> Result<Vec<P::Record>> {
        let factory = Authorized::new(factory, &self.config)?;
        fetch_all(&factory, &self.transport, &parser).await
    }
}

#[async_trait]
impl<T: HttpTransport> CloudControllerApi for CloudControllerClient<T> {
    async fn list_apps(&self, diego: bool) -> Result<Vec<Application>> {
        let factory = self.collection(Collection::Apps).filter(Filter::Diego(diego));
        self.walk(factory, ApplicationsParser::new()).await
    }

    async fn list_spaces(&self) -> Result<Vec<Space>> {
        self.walk(self.collection(Collection::Spaces), SpacesParser::new())
            .await
    }

    async fn list_orgs(&self) -> Result<Vec<Organization>> {
        self.walk(
            self.collection(Collection::Organizations),
            OrganizationsParser::new(),
        )
        .await
    }

    async fn get_app(&self, name: &str) -> Result<AppSummary> {
        let factory = Authorized::new(
            self.collection(Collection::Apps)
                .in_space(self.config.space_guid.as_deref())
                .filter(Filter::Name(name.to_string())),
            &self.config,
        )?;

        let body = self.transport.execute(factory.build(&Cursor::First)?).await?;
        let page = ApplicationsParser::new().parse(&body)?;

        let summary = page
            .records
            .into_iter()
            .find(|app| app.name == name)
            .map(AppSummary::from)
            .unwrap_or_else(|| AppSummary::not_found(name));

        debug!(
            "Resolved app '{}' to guid '{}' (diego: {})",
            name, summary.guid, summary.diego
        );
        Ok(summary)
    }

    async fn set_diego_flag(&self, app_guid: &str, enabled: bool) -> Result<()> {
        let factory = Authorized::new(
            DiegoFlagUpdate::new(self.base_url.clone(), app_guid, enabled),
            &self.config,
        )?;

        let request = factory.build(&Cursor::First)?;
        debug!("PUT {} diego={}", request.url, enabled);
        self.transport.execute(request).await?;
        Ok(())
    }
}
