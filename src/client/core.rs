use crate::client::builder::SignalClientBuilder;
use crate::coerce::coerce_single;
use crate::models::{About, Configuration};
use crate::modules::{
    AccountsModule, AttachmentsModule, ContactsModule, DevicesModule, GroupsModule,
    IdentitiesModule, MessagesModule, ProfilesModule, ReceiptsModule, SearchModule,
    StickersModule,
};
use crate::response::normalize;
use crate::transport::HttpTransport;
use crate::{Ack, Result};
use reqwest::Method;
use std::sync::Arc;

/// Client for a Signal messaging REST gateway.
///
/// One client owns one connection pool; the module values handed out by the
/// accessors share it and hold no other state, so calls may interleave
/// freely across tasks.
#[derive(Debug)]
pub struct SignalClient {
    pub(crate) transport: Arc<HttpTransport>,
}

impl SignalClient {
    /// Create a client for the gateway at `base_url` with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        SignalClientBuilder::new().base_url(base_url).build()
    }

    /// Create a builder for a client with custom configuration.
    pub fn builder() -> SignalClientBuilder {
        SignalClientBuilder::new()
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn accounts(&self) -> AccountsModule {
        AccountsModule::new(self.transport.clone())
    }

    pub fn devices(&self) -> DevicesModule {
        DevicesModule::new(self.transport.clone())
    }

    pub fn groups(&self) -> GroupsModule {
        GroupsModule::new(self.transport.clone())
    }

    pub fn messages(&self) -> MessagesModule {
        MessagesModule::new(self.transport.clone())
    }

    pub fn contacts(&self) -> ContactsModule {
        ContactsModule::new(self.transport.clone())
    }

    pub fn profiles(&self) -> ProfilesModule {
        ProfilesModule::new(self.transport.clone())
    }

    pub fn identities(&self) -> IdentitiesModule {
        IdentitiesModule::new(self.transport.clone())
    }

    pub fn receipts(&self) -> ReceiptsModule {
        ReceiptsModule::new(self.transport.clone())
    }

    pub fn search(&self) -> SearchModule {
        SearchModule::new(self.transport.clone())
    }

    pub fn stickers(&self) -> StickersModule {
        StickersModule::new(self.transport.clone())
    }

    pub fn attachments(&self) -> AttachmentsModule {
        AttachmentsModule::new(self.transport.clone())
    }

    /// Gateway build and version information.
    pub async fn about(&self) -> Result<About> {
        let payload = self
            .transport
            .execute(Method::GET, "/v1/about", None, None)
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }

    /// Gateway configuration, including the dual-cased logging section.
    pub async fn configuration(&self) -> Result<Configuration> {
        let payload = self
            .transport
            .execute(Method::GET, "/v1/configuration", None, None)
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }

    /// Liveness probe against the gateway.
    pub async fn health_check(&self) -> Result<Ack> {
        self.transport
            .execute(Method::GET, "/v1/health", None, None)
            .await
    }
}
