use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Business identifier as issued by the backend.
///
/// The API sends ids both as JSON numbers and as strings, so the canonical
/// form is the trimmed string. Blank strings are not ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BusinessId(String);

impl BusinessId {
    /// Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn from_i64(value: i64) -> Self {
        Self(value.to_string())
    }

    /// Reads an id from a scalar JSON value (number or string).
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Some(Self::from_i64(int))
                } else {
                    match number.as_f64() {
                        Some(float) if float.fract() == 0.0 && float.abs() < 9.0e15 => {
                            Some(Self::from_i64(float as i64))
                        }
                        _ => Some(Self(number.to_string())),
                    }
                }
            }
            serde_json::Value::String(text) => Self::parse(text),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, when the id is an integer.
    pub fn numeric(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for BusinessId {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<'de> Deserialize<'de> for BusinessId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("expected a non-blank number or string id"))
    }
}
