use crate::coerce::{coerce_many, coerce_single};
use crate::models::{Receipt, ReceiptType};
use crate::response::normalize;
use crate::transport::HttpTransport;
use crate::Result;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Message receipt operations.
pub struct ReceiptsModule {
    transport: Arc<HttpTransport>,
}

impl ReceiptsModule {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_receipts(&self, number: &str, limit: Option<u32>) -> Result<Vec<Receipt>> {
        let query: Vec<(&str, String)> = limit
            .map(|limit| vec![("limit", limit.to_string())])
            .unwrap_or_default();
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/receipts/{number}"),
                Some(&query),
                None,
            )
            .await?;
        Ok(coerce_many(normalize(payload, Some("receipts"))))
    }

    pub async fn get_message_receipts(
        &self,
        number: &str,
        message_id: &str,
    ) -> Result<Vec<Receipt>> {
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/receipts/{number}/messages/{message_id}"),
                None,
                None,
            )
            .await?;
        Ok(coerce_many(normalize(payload, Some("receipts"))))
    }

    /// Mark messages as read for a recipient.
    pub async fn send_read_receipt(
        &self,
        number: &str,
        recipient: &str,
        timestamps: &[i64],
    ) -> Result<Receipt> {
        self.send_receipt(number, recipient, ReceiptType::Read, timestamps)
            .await
    }

    /// Mark messages as viewed for a recipient.
    pub async fn send_viewed_receipt(
        &self,
        number: &str,
        recipient: &str,
        timestamps: &[i64],
    ) -> Result<Receipt> {
        self.send_receipt(number, recipient, ReceiptType::Viewed, timestamps)
            .await
    }

    /// Mark messages as delivered for a recipient.
    pub async fn send_delivery_receipt(
        &self,
        number: &str,
        recipient: &str,
        timestamps: &[i64],
    ) -> Result<Receipt> {
        self.send_receipt(number, recipient, ReceiptType::Delivery, timestamps)
            .await
    }

    async fn send_receipt(
        &self,
        number: &str,
        recipient: &str,
        kind: ReceiptType,
        timestamps: &[i64],
    ) -> Result<Receipt> {
        let segment = match kind {
            ReceiptType::Read => "read",
            ReceiptType::Viewed => "viewed",
            ReceiptType::Delivery => "delivery",
        };
        let body = json!({ "timestamps": timestamps });
        let payload = self
            .transport
            .execute(
                Method::PUT,
                &format!("/v1/receipts/{number}/{recipient}/{segment}"),
                None,
                Some(&body),
            )
            .await?;

        let mut receipt: Receipt = coerce_single(normalize(payload, None));
        if receipt.receipt_type.is_none() {
            receipt.receipt_type = Some(kind);
        }
        if receipt.sender.is_none() {
            receipt.sender = Some(number.to_string());
        }
        if receipt.timestamp.is_none() {
            receipt.timestamp = timestamps.first().copied();
        }
        Ok(receipt)
    }
}
