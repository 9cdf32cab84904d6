use crate::coerce::{coerce_many, coerce_single};
use crate::models::Attachment;
use crate::response::normalize;
use crate::transport::HttpTransport;
use crate::{Ack, Result};
use bytes::Bytes;
use reqwest::Method;
use std::sync::Arc;

/// Attachment storage operations.
///
/// Uploads and downloads are binary paths: the payload bypasses JSON
/// normalization entirely and only the acknowledgement (for uploads) goes
/// through coercion.
pub struct AttachmentsModule {
    transport: Arc<HttpTransport>,
}

impl AttachmentsModule {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Upload raw attachment bytes under the given content type.
    pub async fn upload_attachment(
        &self,
        number: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<Attachment> {
        let payload = self
            .transport
            .execute_raw(&format!("/v1/attachments/{number}"), data, content_type)
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }

    /// Download an attachment's raw bytes.
    pub async fn get_attachment(&self, number: &str, attachment_id: &str) -> Result<Bytes> {
        self.transport
            .execute_bytes(&format!("/v1/attachments/{number}/{attachment_id}"))
            .await
    }

    pub async fn delete_attachment(&self, number: &str, attachment_id: &str) -> Result<Ack> {
        self.transport
            .execute(
                Method::DELETE,
                &format!("/v1/attachments/{number}/{attachment_id}"),
                None,
                None,
            )
            .await
    }

    pub async fn get_attachment_info(
        &self,
        number: &str,
        attachment_id: &str,
    ) -> Result<Attachment> {
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/attachments/{number}/{attachment_id}/info"),
                None,
                None,
            )
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }

    pub async fn get_attachments(&self, number: &str) -> Result<Vec<Attachment>> {
        let payload = self
            .transport
            .execute(Method::GET, &format!("/v1/attachments/{number}"), None, None)
            .await?;
        Ok(coerce_many(normalize(payload, Some("attachments"))))
    }
}
