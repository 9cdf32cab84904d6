use crate::coerce::{coerce_many, coerce_single};
use crate::models::{Message, MessageMention, MessageQuote, MessageType};
use crate::response::normalize;
use crate::transport::HttpTransport;
use crate::{Ack, Result};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Message sending and receiving operations.
pub struct MessagesModule {
    transport: Arc<HttpTransport>,
}

impl MessagesModule {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Send a message to one or more recipients.
    ///
    /// The returned [`Message`] reflects what the gateway echoed back;
    /// text, source, and direction are backfilled from the request when the
    /// response omits them (response fields win).
    pub async fn send_message(
        &self,
        number: &str,
        message: &str,
        recipients: &[&str],
        attachments: Option<&[&str]>,
        mentions: Option<&[MessageMention]>,
        quote: Option<&MessageQuote>,
    ) -> Result<Message> {
        let mut body = json!({
            "number": number,
            "message": message,
            "recipients": recipients,
        });
        if let Some(attachments) = attachments {
            body["attachments"] = json!(attachments);
        }
        if let Some(mentions) = mentions {
            body["mention"] = json!(mentions);
        }
        if let Some(quote) = quote {
            body["quote"] = json!(quote);
        }
        let payload = self
            .transport
            .execute(Method::POST, "/v2/send", None, Some(&body))
            .await?;

        let mut sent: Message = coerce_single(normalize(payload, None));
        if sent.message.is_none() {
            sent.message = Some(message.to_string());
        }
        if sent.source.is_none() {
            sent.source = Some(number.to_string());
        }
        if sent.message_type.is_none() {
            sent.message_type = Some(MessageType::Outgoing);
        }
        Ok(sent)
    }

    pub async fn send_typing_indicator(
        &self,
        number: &str,
        recipient: &str,
        stop: bool,
    ) -> Result<Ack> {
        let body = json!({ "stop": stop });
        self.transport
            .execute(
                Method::PUT,
                &format!("/v1/typing-indicator/{number}/{recipient}"),
                None,
                Some(&body),
            )
            .await
    }

    /// Pending messages for the account. Elements that arrive as bare
    /// strings coerce into text-only messages.
    pub async fn get_messages(&self, number: &str, limit: Option<u32>) -> Result<Vec<Message>> {
        let query: Vec<(&str, String)> = limit
            .map(|limit| vec![("limit", limit.to_string())])
            .unwrap_or_default();
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/receive/{number}"),
                Some(&query),
                None,
            )
            .await?;
        Ok(coerce_many(normalize(payload, Some("messages"))))
    }

    pub async fn delete_message(&self, number: &str, message_id: &str) -> Result<Ack> {
        self.transport
            .execute(
                Method::DELETE,
                &format!("/v1/messages/{number}/{message_id}"),
                None,
                None,
            )
            .await
    }
}
