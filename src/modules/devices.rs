use crate::coerce::coerce_many;
use crate::models::LinkedDevice;
use crate::response::normalize;
use crate::transport::HttpTransport;
use crate::{Ack, Result};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Device registration and linking operations.
pub struct DevicesModule {
    transport: Arc<HttpTransport>,
}

impl DevicesModule {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Devices linked to the account. The gateway usually nests these under
    /// a `devices` key, but bare lists and single objects occur too.
    pub async fn get_linked_devices(&self, number: &str) -> Result<Vec<LinkedDevice>> {
        let payload = self
            .transport
            .execute(Method::GET, &format!("/v1/devices/{number}"), None, None)
            .await?;
        Ok(coerce_many(normalize(payload, Some("devices"))))
    }

    pub async fn link_device(&self, number: &str, device_name: &str) -> Result<Ack> {
        let body = json!({ "name": device_name });
        self.transport
            .execute(
                Method::POST,
                &format!("/v1/devices/{number}"),
                None,
                Some(&body),
            )
            .await
    }

    /// QR code link for provisioning a new device.
    pub async fn get_qr_code_link(&self, device_name: Option<&str>) -> Result<Ack> {
        let query: Vec<(&str, String)> = device_name
            .map(|name| vec![("name", name.to_string())])
            .unwrap_or_default();
        self.transport
            .execute(Method::GET, "/v1/qrcodelink", Some(&query), None)
            .await
    }

    pub async fn register_device(&self, number: &str) -> Result<Ack> {
        self.transport
            .execute(Method::POST, &format!("/v1/register/{number}"), None, None)
            .await
    }

    pub async fn verify_device(&self, number: &str, token: &str) -> Result<Ack> {
        self.transport
            .execute(
                Method::POST,
                &format!("/v1/register/{number}/verify/{token}"),
                None,
                None,
            )
            .await
    }
}
