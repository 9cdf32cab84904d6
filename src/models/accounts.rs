use crate::coerce::{FromRecord, RawRecord, RecordView};
use serde::Serialize;

/// Outcome of an account registration request.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AccountRegistration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_required: Option<bool>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for AccountRegistration {
    const PRIMARY_FIELD: &'static str = "number";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            captcha_required: view.bool("captcha_required"),
            verification_required: view.bool("verification_required"),
            extra: view.into_extra(),
        }
    }
}

/// Outcome of an account verification request.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AccountVerification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered: Option<bool>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for AccountVerification {
    const PRIMARY_FIELD: &'static str = "number";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            uuid: view.string("uuid"),
            number: view.string("number"),
            registered: view.bool("registered"),
            extra: view.into_extra(),
        }
    }
}

/// Registered account details.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AccountDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered: Option<bool>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for AccountDetails {
    const PRIMARY_FIELD: &'static str = "number";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            uuid: view.string("uuid"),
            number: view.string("number"),
            registered: view.bool("registered"),
            extra: view.into_extra(),
        }
    }
}
