//! Lenient accessors over raw JSON payloads.
//!
//! The backend has shipped several shapes for the same resource over time.
//! Mappers read fields only through these helpers so that "missing" and
//! `null` mean the same thing everywhere.

use super::BusinessId;
use crate::shared::coalesce::pick_first_defined;
use serde_json::{Map, Value};

/// Known shapes of a collection response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollectionPayload<'a> {
    /// `{ "items": [...] }`
    Wrapped(&'a [Value]),
    /// `[...]`
    Bare(&'a [Value]),
    /// Anything else; read as an empty collection.
    Unrecognized,
}

impl<'a> CollectionPayload<'a> {
    pub fn classify(payload: &'a Value) -> Self {
        match payload {
            Value::Array(records) => Self::Bare(records),
            Value::Object(map) => match map.get("items") {
                Some(Value::Array(records)) => Self::Wrapped(records),
                _ => Self::Unrecognized,
            },
            _ => Self::Unrecognized,
        }
    }

    pub fn records(self) -> &'a [Value] {
        match self {
            Self::Wrapped(records) | Self::Bare(records) => records,
            Self::Unrecognized => &[],
        }
    }
}

/// Field lookup where `null` counts as missing.
pub fn field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|value| !value.is_null())
}

/// First present field among several historical spellings.
pub fn first_field<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    pick_first_defined(keys.iter().map(|key| field(record, key)))
}

/// Nested object, ignoring non-object values.
pub fn object<'a>(value: Option<&'a Value>) -> Option<&'a Map<String, Value>> {
    value.and_then(Value::as_object)
}

pub fn text(value: Option<&Value>) -> String {
    opt_text(value).unwrap_or_default()
}

pub fn opt_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Numbers may arrive as JSON numbers or numeric strings.
pub fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn id(value: Option<&Value>) -> Option<BusinessId> {
    value.and_then(BusinessId::from_value)
}

/// Flags come as booleans or as 0/1.
pub fn flag(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
