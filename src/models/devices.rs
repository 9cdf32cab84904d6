use crate::coerce::{FromRecord, RawRecord, RecordView};
use serde::Serialize;

/// Device kind reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Desktop,
    #[default]
    Unknown,
}

impl DeviceType {
    /// Unrecognized values fall back to [`DeviceType::Unknown`].
    pub fn parse(value: &str) -> Self {
        match value {
            "mobile" => DeviceType::Mobile,
            "desktop" => DeviceType::Desktop,
            _ => DeviceType::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Device {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for Device {
    const PRIMARY_FIELD: &'static str = "id";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            id: view.i64("id"),
            name: view.string("name"),
            created: view.string("created"),
            last_seen: view.string("last_seen"),
            device_type: view
                .string("type")
                .map(|s| DeviceType::parse(&s))
                .unwrap_or_default(),
            extra: view.into_extra(),
        }
    }
}

/// A device linked to the primary account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedDevice {
    #[serde(flatten)]
    pub device: Device,
    pub linked: bool,
}

impl FromRecord for LinkedDevice {
    const PRIMARY_FIELD: &'static str = "id";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        let linked = view.bool("linked").unwrap_or(true);
        Self {
            device: Device::from_record(view.into_extra()),
            linked,
        }
    }
}
