use crate::coerce::{FromRecord, RawRecord, RecordView};
use crate::models::{Contact, Group, Message};
use serde::Serialize;

/// Combined result of a search across all entity kinds. Sections the
/// gateway omits come back as empty sequences.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub messages: Vec<Message>,
    pub contacts: Vec<Contact>,
    pub groups: Vec<Group>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for SearchResults {
    const PRIMARY_FIELD: &'static str = "query";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            query: view.string("query"),
            messages: view.list("messages"),
            contacts: view.list("contacts"),
            groups: view.list("groups"),
            extra: view.into_extra(),
        }
    }
}
