use crate::coerce::{FromRecord, RawRecord, RecordView};
use crate::models::{GroupInfo, Sticker};
use serde::Serialize;

/// Direction of a message relative to the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Incoming,
    Outgoing,
    Sync,
}

impl MessageType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "incoming" => Some(MessageType::Incoming),
            "outgoing" => Some(MessageType::Outgoing),
            "sync" => Some(MessageType::Sync),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MessageAttachment {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for MessageAttachment {
    const PRIMARY_FIELD: &'static str = "id";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            id: view.string("id").unwrap_or_default(),
            content_type: view.string("content_type"),
            filename: view.string("filename"),
            size: view.i64("size"),
            extra: view.into_extra(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MessageMention {
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for MessageMention {
    const PRIMARY_FIELD: &'static str = "uuid";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            uuid: view.string("uuid").unwrap_or_default(),
            start: view.i64("start"),
            length: view.i64("length"),
            extra: view.into_extra(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MessageQuote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub author: String,
    pub text: String,
    pub attachments: Vec<MessageAttachment>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for MessageQuote {
    const PRIMARY_FIELD: &'static str = "text";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            id: view.i64("id"),
            author: view.string("author").unwrap_or_default(),
            text: view.string("text").unwrap_or_default(),
            attachments: view.list("attachments"),
            extra: view.into_extra(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Reaction {
    pub emoji: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_author_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_timestamp: Option<i64>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for Reaction {
    const PRIMARY_FIELD: &'static str = "emoji";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            emoji: view.string("emoji").unwrap_or_default(),
            author: view.string("author"),
            author_uuid: view.string("author_uuid"),
            target_author: view.string("target_author"),
            target_author_uuid: view.string("target_author_uuid"),
            timestamp: view.i64("timestamp"),
            received_timestamp: view.i64("received_timestamp"),
            extra: view.into_extra(),
        }
    }
}

/// A sent or received message. Receive endpoints occasionally emit bare
/// strings in their list, which coerce through the `message` field.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_device: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_delivered_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_legacy_message: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidentified_sender: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_view_once: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_story: Option<bool>,
    pub attachments: Vec<MessageAttachment>,
    pub mentions: Vec<MessageMention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<MessageQuote>,
    pub reactions: Vec<Reaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_info: Option<GroupInfo>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for Message {
    const PRIMARY_FIELD: &'static str = "message";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            id: view.string("id"),
            message_type: view.enum_str("type", MessageType::parse),
            source: view.string("source"),
            source_uuid: view.string("source_uuid"),
            source_device: view.i64("source_device"),
            timestamp: view.i64("timestamp"),
            server_timestamp: view.i64("server_timestamp"),
            server_delivered_timestamp: view.i64("server_delivered_timestamp"),
            has_legacy_message: view.bool("has_legacy_message"),
            unidentified_sender: view.bool("unidentified_sender"),
            message: view.string("message"),
            expiration: view.i64("expiration"),
            is_view_once: view.bool("is_view_once"),
            is_story: view.bool("is_story"),
            attachments: view.list("attachments"),
            mentions: view.list("mentions"),
            quote: view.nested("quote"),
            reactions: view.list("reactions"),
            sticker: view.nested("sticker"),
            group_info: view.nested("group_info"),
            extra: view.into_extra(),
        }
    }
}
