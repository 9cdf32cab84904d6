use crate::coerce::{coerce_many, coerce_single};
use crate::models::Identity;
use crate::response::normalize;
use crate::transport::HttpTransport;
use crate::{Ack, Result};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Identity trust operations.
pub struct IdentitiesModule {
    transport: Arc<HttpTransport>,
}

impl IdentitiesModule {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_identities(&self, number: &str) -> Result<Vec<Identity>> {
        let payload = self
            .transport
            .execute(Method::GET, &format!("/v1/identities/{number}"), None, None)
            .await?;
        Ok(coerce_many(normalize(payload, Some("identities"))))
    }

    pub async fn get_identity(&self, number: &str, recipient: &str) -> Result<Identity> {
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/identities/{number}/{recipient}"),
                None,
                None,
            )
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }

    /// Set the trust level for a recipient's identity. The level string is
    /// passed through to the gateway as-is.
    pub async fn trust_identity(
        &self,
        number: &str,
        recipient: &str,
        trust_level: &str,
        verified_safety_number: Option<&str>,
    ) -> Result<Ack> {
        let mut body = json!({ "trustLevel": trust_level });
        if let Some(safety_number) = verified_safety_number {
            body["verifiedSafetyNumber"] = json!(safety_number);
        }
        self.transport
            .execute(
                Method::PUT,
                &format!("/v1/identities/{number}/{recipient}"),
                None,
                Some(&body),
            )
            .await
    }

    pub async fn verify_identity(
        &self,
        number: &str,
        recipient: &str,
        safety_number: &str,
    ) -> Result<Ack> {
        let body = json!({ "safetyNumber": safety_number });
        self.transport
            .execute(
                Method::PUT,
                &format!("/v1/identities/{number}/{recipient}/verify"),
                None,
                Some(&body),
            )
            .await
    }

    pub async fn reset_identity_session(&self, number: &str, recipient: &str) -> Result<Ack> {
        self.transport
            .execute(
                Method::DELETE,
                &format!("/v1/identities/{number}/{recipient}/session"),
                None,
                None,
            )
            .await
    }
}
