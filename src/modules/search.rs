use crate::coerce::{coerce_many, coerce_single};
use crate::models::{Contact, Group, Message, SearchResults};
use crate::response::normalize;
use crate::transport::HttpTransport;
use crate::Result;
use reqwest::Method;
use std::sync::Arc;

/// Search operations across messages, contacts, and groups.
pub struct SearchModule {
    transport: Arc<HttpTransport>,
}

impl SearchModule {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    fn query(query: &str, limit: Option<u32>) -> Vec<(&'static str, String)> {
        let mut params = vec![("query", query.to_string())];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }

    pub async fn search_messages(
        &self,
        number: &str,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Message>> {
        let params = Self::query(query, limit);
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/search/{number}/messages"),
                Some(&params),
                None,
            )
            .await?;
        Ok(coerce_many(normalize(payload, Some("messages"))))
    }

    pub async fn search_contacts(
        &self,
        number: &str,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Contact>> {
        let params = Self::query(query, limit);
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/search/{number}/contacts"),
                Some(&params),
                None,
            )
            .await?;
        Ok(coerce_many(normalize(payload, Some("contacts"))))
    }

    pub async fn search_groups(
        &self,
        number: &str,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Group>> {
        let params = Self::query(query, limit);
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/search/{number}/groups"),
                Some(&params),
                None,
            )
            .await?;
        Ok(coerce_many(normalize(payload, Some("groups"))))
    }

    /// Search every entity kind at once. Sections the gateway omits come
    /// back as empty sequences.
    pub async fn search_all(
        &self,
        number: &str,
        query: &str,
        limit: Option<u32>,
    ) -> Result<SearchResults> {
        let params = Self::query(query, limit);
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/search/{number}"),
                Some(&params),
                None,
            )
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }
}
