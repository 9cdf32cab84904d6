use crate::coerce::{FromRecord, RawRecord, RecordView};
use serde::Serialize;

/// A stored attachment as described by the gateway. The binary content
/// itself travels through the attachments module's download path.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Attachment {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_note: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<RawRecord>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for Attachment {
    const PRIMARY_FIELD: &'static str = "id";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            id: view.string("id").unwrap_or_default(),
            content_type: view.string("content_type"),
            filename: view.string("filename"),
            size: view.i64("size"),
            stored_filename: view.string("stored_filename"),
            width: view.i64("width"),
            height: view.i64("height"),
            voice_note: view.bool("voice_note"),
            caption: view.string("caption"),
            preview: view.object("preview"),
            extra: view.into_extra(),
        }
    }
}
