use crate::coerce::{FromRecord, RawRecord, RecordView};
use crate::models::Attachment;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Sticker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for Sticker {
    const PRIMARY_FIELD: &'static str = "id";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            id: view.i64("id"),
            emoji: view.string("emoji"),
            pack_id: view.string("pack_id"),
            pack_key: view.string("pack_key"),
            attachment: view.nested("attachment"),
            extra: view.into_extra(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StickerPack {
    pub id: String,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub stickers: Vec<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed: Option<bool>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for StickerPack {
    const PRIMARY_FIELD: &'static str = "id";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            id: view.string("id").unwrap_or_default(),
            key: view.string("key").unwrap_or_default(),
            title: view.string("title"),
            author: view.string("author"),
            stickers: view.list("stickers"),
            cover: view.nested("cover"),
            installed: view.bool("installed"),
            extra: view.into_extra(),
        }
    }
}
