use crate::coerce::{FromRecord, RawRecord, RecordView};
use serde::Serialize;

/// Member role inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupRole {
    Administrator,
    #[default]
    Default,
}

impl GroupRole {
    /// Unrecognized values fall back to [`GroupRole::Default`].
    pub fn parse(value: &str) -> Self {
        match value {
            "ADMINISTRATOR" => GroupRole::Administrator,
            _ => GroupRole::Default,
        }
    }
}

/// A group member. Member lists sometimes arrive as bare phone-number
/// strings, which coerce through the `number` field.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GroupMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub role: GroupRole,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for GroupMember {
    const PRIMARY_FIELD: &'static str = "number";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            uuid: view.string("uuid"),
            number: view.string("number"),
            role: view
                .string("role")
                .map(|s| GroupRole::parse(&s))
                .unwrap_or_default(),
            extra: view.into_extra(),
        }
    }
}

/// Group summary embedded in incoming messages.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GroupInfo {
    pub group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub members: Vec<GroupMember>,
    pub pending_members: Vec<GroupMember>,
    pub requesting_members: Vec<GroupMember>,
    pub admins: Vec<GroupMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_add_member: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_edit_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_send_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_expiration_time: Option<i64>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for GroupInfo {
    const PRIMARY_FIELD: &'static str = "group_id";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            group_id: view.string("group_id").unwrap_or_default(),
            name: view.string("name"),
            description: view.string("description"),
            members: view.list("members"),
            pending_members: view.list("pending_members"),
            requesting_members: view.list("requesting_members"),
            admins: view.list("admins"),
            active: view.bool("active"),
            blocked: view.bool("blocked"),
            permission_add_member: view.string("permission_add_member"),
            permission_edit_details: view.string("permission_edit_details"),
            permission_send_message: view.string("permission_send_message"),
            link: view.string("link"),
            message_expiration_time: view.i64("message_expiration_time"),
            extra: view.into_extra(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Group {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub members: Vec<GroupMember>,
    pub pending_members: Vec<GroupMember>,
    pub requesting_members: Vec<GroupMember>,
    pub admins: Vec<GroupMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_add_member: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_edit_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_send_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_expiration_time: Option<i64>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for Group {
    const PRIMARY_FIELD: &'static str = "id";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            id: view.string("id").unwrap_or_default(),
            internal_id: view.string("internal_id"),
            name: view.string("name"),
            description: view.string("description"),
            avatar: view.string("avatar"),
            members: view.list("members"),
            pending_members: view.list("pending_members"),
            requesting_members: view.list("requesting_members"),
            admins: view.list("admins"),
            active: view.bool("active"),
            blocked: view.bool("blocked"),
            permission_add_member: view.string("permission_add_member"),
            permission_edit_details: view.string("permission_edit_details"),
            permission_send_message: view.string("permission_send_message"),
            link: view.string("link"),
            message_expiration_time: view.i64("message_expiration_time"),
            extra: view.into_extra(),
        }
    }
}
