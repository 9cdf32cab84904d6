use crate::coerce::{coerce_many, coerce_single};
use crate::models::Contact;
use crate::response::normalize;
use crate::transport::HttpTransport;
use crate::{Ack, Result};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Contact management operations.
pub struct ContactsModule {
    transport: Arc<HttpTransport>,
}

impl ContactsModule {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_contacts(&self, number: &str) -> Result<Vec<Contact>> {
        let payload = self
            .transport
            .execute(Method::GET, &format!("/v1/contacts/{number}"), None, None)
            .await?;
        Ok(coerce_many(normalize(payload, Some("contacts"))))
    }

    pub async fn get_contact(&self, number: &str, contact: &str) -> Result<Contact> {
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/contacts/{number}/{contact}"),
                None,
                None,
            )
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }

    /// Add a contact. The gateway expects the expiration as a string.
    pub async fn add_contact(
        &self,
        number: &str,
        contact: &str,
        name: Option<&str>,
        expiration: Option<i64>,
    ) -> Result<Ack> {
        let mut body = json!({ "contact": contact });
        if let Some(name) = name {
            body["name"] = json!(name);
        }
        if let Some(expiration) = expiration {
            body["expiration"] = json!(expiration.to_string());
        }
        self.transport
            .execute(
                Method::POST,
                &format!("/v1/contacts/{number}"),
                None,
                Some(&body),
            )
            .await
    }

    pub async fn update_contact(
        &self,
        number: &str,
        contact: &str,
        name: Option<&str>,
        expiration: Option<i64>,
        blocked: Option<bool>,
    ) -> Result<Ack> {
        let mut body = json!({});
        if let Some(name) = name {
            body["name"] = json!(name);
        }
        if let Some(expiration) = expiration {
            body["expiration"] = json!(expiration.to_string());
        }
        if let Some(blocked) = blocked {
            body["blocked"] = json!(blocked);
        }
        self.transport
            .execute(
                Method::PUT,
                &format!("/v1/contacts/{number}/{contact}"),
                None,
                Some(&body),
            )
            .await
    }

    pub async fn delete_contact(&self, number: &str, contact: &str) -> Result<Ack> {
        self.transport
            .execute(
                Method::DELETE,
                &format!("/v1/contacts/{number}/{contact}"),
                None,
                None,
            )
            .await
    }

    pub async fn block_contact(&self, number: &str, contact: &str) -> Result<Ack> {
        self.transport
            .execute(
                Method::PUT,
                &format!("/v1/contacts/{number}/{contact}/block"),
                None,
                None,
            )
            .await
    }

    pub async fn unblock_contact(&self, number: &str, contact: &str) -> Result<Ack> {
        self.transport
            .execute(
                Method::PUT,
                &format!("/v1/contacts/{number}/{contact}/unblock"),
                None,
                None,
            )
            .await
    }

    pub async fn get_blocked_contacts(&self, number: &str) -> Result<Vec<Contact>> {
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/contacts/{number}/blocked"),
                None,
                None,
            )
            .await?;
        Ok(coerce_many(normalize(payload, Some("contacts"))))
    }
}
