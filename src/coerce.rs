//! Tolerant coercion from raw records to typed entities.
//!
//! Coercion is total: any string-keyed record produces an entity. Fields are
//! taken only from their native JSON types — a mismatched value degrades that
//! one field to absent and stays in the entity's extension bag, so nothing
//! the server sent is ever discarded. Degradation is strictly per-field,
//! never per-record, never per-call.

use crate::response::Normalized;
use serde_json::{Map, Value};

/// A string-keyed JSON record, the unit of coercion.
pub type RawRecord = Map<String, Value>;

/// Entities buildable from a raw record.
///
/// `PRIMARY_FIELD` names the record key that receives a bare scalar payload
/// for this entity — e.g. a group endpoint answering with just an id string.
pub trait FromRecord: Sized {
    const PRIMARY_FIELD: &'static str;

    fn from_record(record: RawRecord) -> Self;
}

/// Coerce one raw value into an entity.
///
/// Objects coerce directly; null coerces from an empty record (everything
/// absent); any other scalar is wrapped into `{PRIMARY_FIELD: value}` first.
pub fn coerce_value<T: FromRecord>(value: Value) -> T {
    match value {
        Value::Object(map) => T::from_record(map),
        Value::Null => T::from_record(RawRecord::new()),
        scalar => {
            let mut record = RawRecord::new();
            record.insert(T::PRIMARY_FIELD.to_string(), scalar);
            T::from_record(record)
        }
    }
}

/// Coerce a normalized payload whose declared result is a single entity.
pub fn coerce_single<T: FromRecord>(form: Normalized) -> T {
    match form {
        Normalized::Single(value) => coerce_value(value),
        Normalized::Many(items) => coerce_value(items.into_iter().next().unwrap_or(Value::Null)),
    }
}

/// Coerce a normalized payload whose declared result is a sequence.
///
/// A single object for a list call is a one-element sequence; a record that
/// fails coercion of some field still yields an entity.
pub fn coerce_many<T: FromRecord>(form: Normalized) -> Vec<T> {
    match form {
        Normalized::Many(items) => items.into_iter().map(coerce_value).collect(),
        Normalized::Single(value) => vec![coerce_value(value)],
    }
}

/// Extraction view over one raw record.
///
/// This is the single place the field-level tolerance policy lives.
/// Extraction methods remove the key from the record on success and leave it
/// in place on a type mismatch; whatever remains when the declared fields
/// have been taken is the entity's extension bag.
pub struct RecordView {
    record: RawRecord,
}

impl RecordView {
    pub fn new(record: RawRecord) -> Self {
        Self { record }
    }

    fn take(&mut self, key: &str) -> Option<Value> {
        self.record.remove(key)
    }

    fn put_back(&mut self, key: &str, value: Value) {
        self.record.insert(key.to_string(), value);
    }

    /// Take a string field. Non-string values stay in the extension bag.
    pub fn string(&mut self, key: &str) -> Option<String> {
        match self.take(key) {
            Some(Value::String(s)) => Some(s),
            Some(other) => {
                self.put_back(key, other);
                None
            }
            None => None,
        }
    }

    /// Dual-cased string field: the canonical lowercase key wins when it is
    /// present and non-empty; the capitalized alias only fills in otherwise.
    /// Both spellings are declared fields and leave the extension bag.
    pub fn string_dual(&mut self, canonical: &str, alias: &str) -> String {
        let primary = self.string(canonical).unwrap_or_default();
        let fallback = self.string(alias).unwrap_or_default();
        if primary.is_empty() {
            fallback
        } else {
            primary
        }
    }

    /// Take an optional enum-valued string field. A string that does not
    /// name a known member stays in the extension bag, like any other
    /// mismatch. Enums with a fallback member go through [`string`] and map
    /// unrecognized values to that member instead.
    ///
    /// [`string`]: RecordView::string
    pub fn enum_str<T>(&mut self, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        match self.string(key) {
            Some(s) => match parse(&s) {
                Some(parsed) => Some(parsed),
                None => {
                    self.put_back(key, Value::String(s));
                    None
                }
            },
            None => None,
        }
    }

    /// Take an integer field. Accepted only from a native JSON number with an
    /// integral value — no string-to-number coercion.
    pub fn i64(&mut self, key: &str) -> Option<i64> {
        match self.take(key) {
            Some(Value::Number(n)) => match n.as_i64() {
                Some(v) => Some(v),
                None => {
                    self.put_back(key, Value::Number(n));
                    None
                }
            },
            Some(other) => {
                self.put_back(key, other);
                None
            }
            None => None,
        }
    }

    /// Take a boolean field. Accepted only from a native JSON boolean.
    pub fn bool(&mut self, key: &str) -> Option<bool> {
        match self.take(key) {
            Some(Value::Bool(b)) => Some(b),
            Some(other) => {
                self.put_back(key, other);
                None
            }
            None => None,
        }
    }

    /// Take a declared field as a raw value, whatever its shape.
    pub fn value(&mut self, key: &str) -> Option<Value> {
        self.take(key)
    }

    /// Take an object-valued field as a raw record.
    pub fn object(&mut self, key: &str) -> Option<RawRecord> {
        match self.take(key) {
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                self.put_back(key, other);
                None
            }
            None => None,
        }
    }

    /// Take and recursively coerce a nested entity.
    pub fn nested<T: FromRecord>(&mut self, key: &str) -> Option<T> {
        self.object(key).map(T::from_record)
    }

    /// Take and recursively coerce a sequence of nested entities.
    ///
    /// Absent or non-array values yield an empty sequence; scalar elements
    /// are wrapped via the entity's primary field.
    pub fn list<T: FromRecord>(&mut self, key: &str) -> Vec<T> {
        match self.take(key) {
            Some(Value::Array(items)) => items.into_iter().map(coerce_value).collect(),
            Some(other) => {
                self.put_back(key, other);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Take a sequence of strings; non-string elements are skipped.
    pub fn string_list(&mut self, key: &str) -> Vec<String> {
        match self.take(key) {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            Some(other) => {
                self.put_back(key, other);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Everything not claimed by a declared field, keys unchanged.
    pub fn into_extra(self) -> RawRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[derive(Debug, PartialEq)]
    struct Probe {
        id: String,
        count: Option<i64>,
        extra: RawRecord,
    }

    impl FromRecord for Probe {
        const PRIMARY_FIELD: &'static str = "id";

        fn from_record(record: RawRecord) -> Self {
            let mut view = RecordView::new(record);
            Self {
                id: view.string("id").unwrap_or_default(),
                count: view.i64("count"),
                extra: view.into_extra(),
            }
        }
    }

    #[test]
    fn mismatched_field_degrades_and_is_retained() {
        let probe = Probe::from_record(record(json!({"id": 7, "count": "many"})));
        assert_eq!(probe.id, "");
        assert_eq!(probe.count, None);
        assert_eq!(probe.extra.get("id"), Some(&json!(7)));
        assert_eq!(probe.extra.get("count"), Some(&json!("many")));
    }

    #[test]
    fn unknown_keys_land_in_extension_bag() {
        let probe = Probe::from_record(record(json!({"id": "p1", "color": "blue"})));
        assert_eq!(probe.id, "p1");
        assert_eq!(probe.extra.get("color"), Some(&json!("blue")));
        assert!(!probe.extra.contains_key("id"));
    }

    #[test]
    fn scalar_payload_wraps_into_primary_field() {
        let probe: Probe = coerce_value(json!("p1"));
        assert_eq!(probe.id, "p1");
        assert!(probe.extra.is_empty());
    }

    #[test]
    fn null_payload_coerces_from_empty_record() {
        let probe: Probe = coerce_value(Value::Null);
        assert_eq!(probe, Probe::from_record(RawRecord::new()));
    }

    #[test]
    fn single_form_becomes_one_element_sequence() {
        let probes: Vec<Probe> = coerce_many(Normalized::Single(json!({"id": "p1"})));
        assert_eq!(probes.len(), 1);
        assert_eq!(probes[0].id, "p1");
    }

    #[test]
    fn bad_record_in_sequence_does_not_abort_the_rest() {
        let probes: Vec<Probe> = coerce_many(Normalized::Many(vec![
            json!({"id": "p1"}),
            json!({"id": 99, "count": true}),
            json!({"id": "p3", "count": 2}),
        ]));
        assert_eq!(probes.len(), 3);
        assert_eq!(probes[0].id, "p1");
        assert_eq!(probes[1].id, "");
        assert_eq!(probes[2].count, Some(2));
    }

    #[test]
    fn integers_are_not_parsed_from_strings() {
        let mut view = RecordView::new(record(json!({"count": "12"})));
        assert_eq!(view.i64("count"), None);
    }

    #[test]
    fn floats_do_not_pass_as_integers() {
        let mut view = RecordView::new(record(json!({"count": 1.5})));
        assert_eq!(view.i64("count"), None);
        assert_eq!(view.into_extra().get("count"), Some(&json!(1.5)));
    }

    #[test]
    fn dual_case_alias_fills_absent_canonical() {
        let mut view = RecordView::new(record(json!({"Level": "info"})));
        assert_eq!(view.string_dual("level", "Level"), "info");
        assert!(view.into_extra().is_empty());
    }

    #[test]
    fn dual_case_canonical_wins_when_non_empty() {
        let mut view = RecordView::new(record(json!({"level": "debug", "Level": "info"})));
        assert_eq!(view.string_dual("level", "Level"), "debug");
        assert!(view.into_extra().is_empty());
    }

    #[test]
    fn dual_case_empty_canonical_yields_to_alias() {
        let mut view = RecordView::new(record(json!({"level": "", "Level": "info"})));
        assert_eq!(view.string_dual("level", "Level"), "info");
    }

    #[test]
    fn unrecognized_enum_value_is_retained() {
        #[derive(Debug, PartialEq)]
        enum Kind {
            On,
        }
        let parse = |s: &str| match s {
            "on" => Some(Kind::On),
            _ => None,
        };

        let mut view = RecordView::new(record(json!({"kind": "on"})));
        assert_eq!(view.enum_str("kind", parse), Some(Kind::On));
        assert!(view.into_extra().is_empty());

        let mut view = RecordView::new(record(json!({"kind": "off"})));
        assert_eq!(view.enum_str("kind", parse), None);
        assert_eq!(view.into_extra().get("kind"), Some(&json!("off")));
    }

    #[test]
    fn list_wraps_scalar_elements() {
        let mut view = RecordView::new(record(json!({"items": ["p1", {"id": "p2"}]})));
        let probes: Vec<Probe> = view.list("items");
        assert_eq!(probes[0].id, "p1");
        assert_eq!(probes[1].id, "p2");
    }

    #[test]
    fn non_array_list_field_is_empty_and_retained() {
        let mut view = RecordView::new(record(json!({"items": "p1"})));
        let probes: Vec<Probe> = view.list("items");
        assert!(probes.is_empty());
        assert_eq!(view.into_extra().get("items"), Some(&json!("p1")));
    }
}
