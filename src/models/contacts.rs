use crate::coerce::{FromRecord, RawRecord, RecordView};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for Contact {
    const PRIMARY_FIELD: &'static str = "number";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            uuid: view.string("uuid"),
            number: view.string("number"),
            name: view.string("name"),
            given_name: view.string("given_name"),
            family_name: view.string("family_name"),
            color: view.string("color"),
            profile_key: view.string("profile_key"),
            blocked: view.bool("blocked"),
            expiration: view.i64("expiration"),
            extra: view.into_extra(),
        }
    }
}
