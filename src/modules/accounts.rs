use crate::coerce::coerce_single;
use crate::models::{AccountDetails, AccountRegistration, AccountVerification};
use crate::response::normalize;
use crate::transport::HttpTransport;
use crate::{Ack, Result};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Account registration and management operations.
pub struct AccountsModule {
    transport: Arc<HttpTransport>,
}

impl AccountsModule {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Register a new account, optionally passing a captcha token.
    pub async fn register_account(
        &self,
        number: &str,
        captcha: Option<&str>,
    ) -> Result<AccountRegistration> {
        let mut body = json!({});
        if let Some(captcha) = captcha {
            body["captcha"] = json!(captcha);
        }
        let payload = self
            .transport
            .execute(
                Method::POST,
                &format!("/v1/accounts/{number}"),
                None,
                Some(&body),
            )
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }

    /// Verify a registered account with the code received out of band.
    pub async fn verify_account(
        &self,
        number: &str,
        verification_code: &str,
    ) -> Result<AccountVerification> {
        let payload = self
            .transport
            .execute(
                Method::POST,
                &format!("/v1/accounts/{number}/verify/{verification_code}"),
                None,
                None,
            )
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }

    pub async fn get_account_details(&self, number: &str) -> Result<AccountDetails> {
        let payload = self
            .transport
            .execute(Method::GET, &format!("/v1/accounts/{number}"), None, None)
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }

    /// Update account registration ids. The gateway expects camel-cased keys.
    pub async fn update_account(
        &self,
        number: &str,
        registration_id: Option<i64>,
        pni_registration_id: Option<i64>,
    ) -> Result<Ack> {
        let mut body = json!({});
        if let Some(id) = registration_id {
            body["registrationId"] = json!(id);
        }
        if let Some(id) = pni_registration_id {
            body["pniRegistrationId"] = json!(id);
        }
        self.transport
            .execute(
                Method::PUT,
                &format!("/v1/accounts/{number}"),
                None,
                Some(&body),
            )
            .await
    }

    pub async fn delete_account(&self, number: &str) -> Result<Ack> {
        self.transport
            .execute(Method::DELETE, &format!("/v1/accounts/{number}"), None, None)
            .await
    }

    pub async fn set_pin(&self, number: &str, pin: &str) -> Result<Ack> {
        let body = json!({ "pin": pin });
        self.transport
            .execute(
                Method::PUT,
                &format!("/v1/accounts/{number}/pin"),
                None,
                Some(&body),
            )
            .await
    }

    pub async fn remove_pin(&self, number: &str) -> Result<Ack> {
        self.transport
            .execute(
                Method::DELETE,
                &format!("/v1/accounts/{number}/pin"),
                None,
                None,
            )
            .await
    }
}
