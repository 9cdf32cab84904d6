use crate::coerce::{FromRecord, RawRecord, RecordView};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptType {
    Read,
    Viewed,
    Delivery,
}

impl ReceiptType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "read" => Some(ReceiptType::Read),
            "viewed" => Some(ReceiptType::Viewed),
            "delivery" => Some(ReceiptType::Delivery),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Receipt {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub receipt_type: Option<ReceiptType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_device: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<i64>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for Receipt {
    const PRIMARY_FIELD: &'static str = "type";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            receipt_type: view.enum_str("type", ReceiptType::parse),
            sender: view.string("sender"),
            sender_uuid: view.string("sender_uuid"),
            sender_device: view.i64("sender_device"),
            timestamp: view.i64("timestamp"),
            when: view.i64("when"),
            extra: view.into_extra(),
        }
    }
}
