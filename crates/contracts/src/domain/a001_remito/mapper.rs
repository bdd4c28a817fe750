use super::aggregate::{Item, ProductoRef, Remito};
use crate::domain::common::payload::{field, first_field, id, number, text};
use crate::domain::common::CollectionPayload;
use crate::shared::coalesce::pick_first_defined;
use serde_json::Value;

fn normalize_producto_ref(item: &Value) -> ProductoRef {
    let nested = field(item, "producto").filter(|v| v.is_object());
    let resolved = pick_first_defined([
        nested.and_then(|p| first_field(p, &["ID", "id"])),
        first_field(item, &["productoId", "productoid"]),
    ]);
    ProductoRef { id: id(resolved) }
}

fn to_item_vm(item: &Value) -> Item {
    Item {
        transaccion_cv_item_id: id(field(item, "transaccionCVItemId")),
        transaccion_id: id(field(item, "transaccionId")),
        producto: normalize_producto_ref(item),
        descripcion: text(field(item, "descripcion")),
        cantidad: number(field(item, "cantidad")),
        precio: number(field(item, "precio")),
    }
}

pub fn to_remito_vm(remito: &Value) -> Remito {
    let items = first_field(remito, &["transaccionProductoItem", "items"])
        .and_then(Value::as_array)
        .map(|items| items.iter().map(to_item_vm).collect())
        .unwrap_or_default();

    Remito {
        transaccion_id: id(first_field(remito, &["transaccionId", "transaccionid"])),
        numero_remito: text(field(remito, "numeroRemito")),
        fecha: text(field(remito, "fecha")),
        observacion: text(field(remito, "observacion")),
        cliente_id: id(field(remito, "clienteId")),
        comision_vendedor: number(field(remito, "comisionVendedor")),
        deposito_id: id(field(remito, "depositoId")),
        circuito_contable_id: id(field(remito, "circuitoContableId")),
        items,
    }
}

/// Newest first; same-date remitos by numeric transaction id, highest first.
/// Undated remitos and non-numeric ids go last. The sort is stable.
pub fn sort_remitos_by_fecha_desc(mut remitos: Vec<Remito>) -> Vec<Remito> {
    remitos.sort_by(|left, right| right.sort_key().cmp(&left.sort_key()));
    remitos
}

pub fn normalize_remitos_payload(payload: &Value) -> Vec<Remito> {
    let remitos = CollectionPayload::classify(payload)
        .records()
        .iter()
        .map(to_remito_vm)
        .collect();
    sort_remitos_by_fecha_desc(remitos)
}
