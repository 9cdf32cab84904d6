use crate::coerce::{FromRecord, RawRecord, RecordView};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Profile {
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
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_sharing: Option<bool>,
    pub capabilities: Vec<String>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for Profile {
    const PRIMARY_FIELD: &'static str = "number";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            uuid: view.string("uuid"),
            number: view.string("number"),
            name: view.string("name"),
            given_name: view.string("given_name"),
            family_name: view.string("family_name"),
            about: view.string("about"),
            about_emoji: view.string("about_emoji"),
            avatar: view.string("avatar"),
            color: view.string("color"),
            profile_sharing: view.bool("profile_sharing"),
            capabilities: view.string_list("capabilities"),
            extra: view.into_extra(),
        }
    }
}
