use super::payload::{field, first_field, id, object, opt_text};
use super::BusinessId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference record nested in clients and products (`{ID, id, nombre, codigo}`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleItem {
    pub id: Option<BusinessId>,
    pub nombre: Option<String>,
    pub codigo: Option<String>,
}

impl SimpleItem {
    /// `None` unless the value is a non-empty object.
    pub fn from_payload(value: Option<&Value>) -> Option<Self> {
        let map = object(value)?;
        if map.is_empty() {
            return None;
        }
        let value = value?;
        Some(Self {
            id: id(first_field(value, &["ID", "id"])),
            nombre: opt_text(field(value, "nombre")),
            codigo: opt_text(field(value, "codigo")),
        })
    }

    pub fn list_from_payload(value: Option<&Value>) -> Vec<Self> {
        value
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| Self::from_payload(Some(entry)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Provincia {
    pub provincia_id: Option<BusinessId>,
    pub codigo: Option<String>,
    pub nombre: Option<String>,
    pub pais: Option<String>,
}

impl Provincia {
    pub fn from_payload(value: Option<&Value>) -> Option<Self> {
        let map = object(value)?;
        if map.is_empty() {
            return None;
        }
        let value = value?;
        Some(Self {
            provincia_id: id(first_field(value, &["provincia_id", "ID", "id"])),
            codigo: opt_text(field(value, "codigo")),
            nombre: opt_text(field(value, "nombre")),
            pais: opt_text(field(value, "pais")),
        })
    }
}
