//! Response shape normalization.
//!
//! The gateway is not self-consistent about wrapping: some endpoints nest
//! results under an entity name, some return bare arrays, and some return a
//! single object even for list calls. [`normalize`] absorbs all three shapes
//! so the coercion layer only ever sees one of two forms.

use serde_json::Value;

/// Canonical payload form consumed by the coercion layer.
///
/// Elements of `Many` stay raw: a list may legitimately contain scalars
/// (e.g. bare message strings), which are wrapped per element during
/// coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Single(Value),
    Many(Vec<Value>),
}

/// Reduce a decoded payload to its canonical form.
///
/// Precedence is fixed:
/// 1. an object containing `container` hands its nested value to rules 2-4
///    (key presence alone decides; a wrong-shaped nested value still
///    proceeds — rejecting impossible fields is the coercer's job),
/// 2. an array becomes `Many`,
/// 3. an object becomes `Single`,
/// 4. anything else (scalar, null) becomes `Single` and is wrapped into a
///    record downstream.
pub fn normalize(payload: Value, container: Option<&str>) -> Normalized {
    let payload = match payload {
        Value::Object(mut map) => match container.and_then(|key| map.remove(key)) {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    };

    match payload {
        Value::Array(items) => Normalized::Many(items),
        other => Normalized::Single(other),
    }
}
