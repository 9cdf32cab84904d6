use crate::coerce::{coerce_many, coerce_single};
use crate::models::Profile;
use crate::response::normalize;
use crate::transport::HttpTransport;
use crate::{Ack, Result};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Profile management operations.
pub struct ProfilesModule {
    transport: Arc<HttpTransport>,
}

impl ProfilesModule {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_profile(&self, number: &str) -> Result<Profile> {
        let payload = self
            .transport
            .execute(Method::GET, &format!("/v1/profiles/{number}"), None, None)
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }

    pub async fn update_profile(
        &self,
        number: &str,
        name: Option<&str>,
        about: Option<&str>,
        avatar: Option<&str>,
        emoji: Option<&str>,
    ) -> Result<Ack> {
        let mut body = json!({});
        if let Some(name) = name {
            body["name"] = json!(name);
        }
        if let Some(about) = about {
            body["about"] = json!(about);
        }
        if let Some(avatar) = avatar {
            body["avatar"] = json!(avatar);
        }
        if let Some(emoji) = emoji {
            body["emoji"] = json!(emoji);
        }
        self.transport
            .execute(
                Method::PUT,
                &format!("/v1/profiles/{number}"),
                None,
                Some(&body),
            )
            .await
    }

    pub async fn get_contact_profile(&self, number: &str, contact: &str) -> Result<Profile> {
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/profiles/{number}/contacts/{contact}"),
                None,
                None,
            )
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }

    /// Profiles of all known contacts, nested under `contacts` when wrapped.
    pub async fn get_contacts_profiles(&self, number: &str) -> Result<Vec<Profile>> {
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/profiles/{number}/contacts"),
                None,
                None,
            )
            .await?;
        Ok(coerce_many(normalize(payload, Some("contacts"))))
    }

    pub async fn set_profile_sharing(
        &self,
        number: &str,
        contact: &str,
        enabled: bool,
    ) -> Result<Ack> {
        let body = json!({ "enabled": enabled });
        self.transport
            .execute(
                Method::PUT,
                &format!("/v1/profiles/{number}/contacts/{contact}/sharing"),
                None,
                Some(&body),
            )
            .await
    }
}
