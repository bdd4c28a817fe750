use crate::domain::common::payload::{field, first_field, flag, id, opt_text};
use crate::domain::common::{BusinessId, CollectionPayload};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Price list header (`listaPrecioBean`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListaPrecio {
    pub lista_precio_id: Option<BusinessId>,
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub activo: Option<bool>,
}

fn to_lista_precio_vm(payload: &Value) -> ListaPrecio {
    ListaPrecio {
        lista_precio_id: id(first_field(
            payload,
            &["listaPrecioID", "listaPrecioId", "ID", "id"],
        )),
        nombre: opt_text(field(payload, "nombre")),
        descripcion: opt_text(field(payload, "descripcion")),
        activo: flag(field(payload, "activo")),
    }
}

/// Accepts `{items: [...]}` or a bare array; sorted by name, then id.
pub fn normalize_lista_precios_payload(payload: &Value) -> Vec<ListaPrecio> {
    let mut listas: Vec<ListaPrecio> = CollectionPayload::classify(payload)
        .records()
        .iter()
        .map(to_lista_precio_vm)
        .collect();
    listas.sort_by(|a, b| {
        a.nombre
            .cmp(&b.nombre)
            .then_with(|| a.lista_precio_id.cmp(&b.lista_precio_id))
    });
    listas
}
