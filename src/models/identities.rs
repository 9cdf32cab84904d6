use crate::coerce::{FromRecord, RawRecord, RecordView};
use serde::Serialize;

/// Trust state of a recipient's identity key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrustLevel {
    TrustedUnverified,
    TrustedVerified,
    Untrusted,
}

impl TrustLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "TRUSTED_UNVERIFIED" => Some(TrustLevel::TrustedUnverified),
            "TRUSTED_VERIFIED" => Some(TrustLevel::TrustedVerified),
            "UNTRUSTED" => Some(TrustLevel::Untrusted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Identity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_level: Option<TrustLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanned_safety_number: Option<String>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for Identity {
    const PRIMARY_FIELD: &'static str = "number";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            uuid: view.string("uuid"),
            number: view.string("number"),
            trust_level: view.enum_str("trust_level", TrustLevel::parse),
            added: view.string("added"),
            fingerprint: view.string("fingerprint"),
            safety_number: view.string("safety_number"),
            scanned_safety_number: view.string("scanned_safety_number"),
            extra: view.into_extra(),
        }
    }
}
