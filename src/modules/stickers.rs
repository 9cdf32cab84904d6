use crate::coerce::{coerce_many, coerce_single};
use crate::models::StickerPack;
use crate::response::normalize;
use crate::transport::HttpTransport;
use crate::{Ack, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// One sticker image in a pack upload.
pub struct StickerUpload {
    pub image: Vec<u8>,
    pub emoji: String,
}

/// Sticker pack management operations.
pub struct StickersModule {
    transport: Arc<HttpTransport>,
}

impl StickersModule {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_sticker_packs(&self, number: &str) -> Result<Vec<StickerPack>> {
        let payload = self
            .transport
            .execute(Method::GET, &format!("/v1/stickers/{number}"), None, None)
            .await?;
        Ok(coerce_many(normalize(payload, Some("stickers"))))
    }

    pub async fn get_sticker_pack(&self, number: &str, pack_id: &str) -> Result<StickerPack> {
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/stickers/{number}/{pack_id}"),
                None,
                None,
            )
            .await?;
        Ok(coerce_single(normalize(payload, None)))
    }

    /// Install a published pack. The gateway expects camel-cased keys.
    pub async fn install_sticker_pack(
        &self,
        number: &str,
        pack_id: &str,
        pack_key: &str,
    ) -> Result<Ack> {
        let body = json!({ "packId": pack_id, "packKey": pack_key });
        self.transport
            .execute(
                Method::POST,
                &format!("/v1/stickers/{number}"),
                None,
                Some(&body),
            )
            .await
    }

    pub async fn uninstall_sticker_pack(&self, number: &str, pack_id: &str) -> Result<Ack> {
        self.transport
            .execute(
                Method::DELETE,
                &format!("/v1/stickers/{number}/{pack_id}"),
                None,
                None,
            )
            .await
    }

    /// Upload a new pack as a multipart form: title, author, cover image,
    /// then one `sticker_N`/`emoji_N` pair per sticker. This is a binary
    /// path and bypasses response normalization.
    pub async fn upload_sticker_pack(
        &self,
        number: &str,
        title: &str,
        author: &str,
        cover: Vec<u8>,
        stickers: Vec<StickerUpload>,
    ) -> Result<Ack> {
        let mut form = Form::new()
            .text("title", title.to_string())
            .text("author", author.to_string())
            .part("cover", Part::bytes(cover));

        for (index, sticker) in stickers.into_iter().enumerate() {
            form = form
                .part(format!("sticker_{index}"), Part::bytes(sticker.image))
                .text(format!("emoji_{index}"), sticker.emoji);
        }

        self.transport
            .execute_multipart(&format!("/v1/stickers/{number}/upload"), form)
            .await
    }
}
