use crate::coerce::{FromRecord, RawRecord, RecordView};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Gateway build/version information.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct About {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<i64>,
    pub capabilities: HashMap<String, Vec<String>>,
    pub mode: String,
    pub version: String,
    pub versions: Vec<String>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for About {
    const PRIMARY_FIELD: &'static str = "version";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        let capabilities = view
            .object("capabilities")
            .map(|map| {
                map.into_iter()
                    .map(|(name, value)| {
                        let entries = match value {
                            Value::Array(items) => items
                                .into_iter()
                                .filter_map(|item| match item {
                                    Value::String(s) => Some(s),
                                    _ => None,
                                })
                                .collect(),
                            _ => Vec::new(),
                        };
                        (name, entries)
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            build: view.i64("build"),
            capabilities,
            mode: view.string("mode").unwrap_or_default(),
            version: view.string("version").unwrap_or_default(),
            versions: view.string_list("versions"),
            extra: view.into_extra(),
        }
    }
}

/// Logging section of the gateway configuration.
///
/// The gateway emits the level under `level` or `Level` depending on build;
/// the lowercase spelling is canonical and is never overwritten by the
/// capitalized one when already populated.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for LoggingConfig {
    const PRIMARY_FIELD: &'static str = "level";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        Self {
            level: view.string_dual("level", "Level"),
            extra: view.into_extra(),
        }
    }
}

/// Gateway configuration. Dual-cased like its logging section.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Configuration {
    pub logging: LoggingConfig,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl FromRecord for Configuration {
    const PRIMARY_FIELD: &'static str = "logging";

    fn from_record(record: RawRecord) -> Self {
        let mut view = RecordView::new(record);
        let canonical = view.nested::<LoggingConfig>("logging");
        let alias = view.nested::<LoggingConfig>("Logging");
        let logging = match (canonical, alias) {
            (Some(cfg), Some(alias)) => {
                if cfg.level.is_empty() {
                    alias
                } else {
                    cfg
                }
            }
            (Some(cfg), None) => cfg,
            (None, Some(alias)) => alias,
            (None, None) => LoggingConfig::default(),
        };
        Self {
            logging,
            extra: view.into_extra(),
        }
    }
}
