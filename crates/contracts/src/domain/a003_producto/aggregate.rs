use crate::domain::common::payload::{field, first_field, flag, id, number, opt_text};
use crate::domain::common::{BusinessId, SimpleItem};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TasaIva {
    #[serde(flatten)]
    pub item: SimpleItem,
    pub porcentaje: Option<f64>,
}

impl TasaIva {
    fn from_payload(value: Option<&Value>) -> Option<Self> {
        let item = SimpleItem::from_payload(value)?;
        let porcentaje = value.and_then(|v| number(first_field(v, &["porcentaje", "tasaDefault"])));
        Some(Self { item, porcentaje })
    }
}

/// Product record (`ProductoVentaBean`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub producto_id: Option<BusinessId>,
    pub nombre: Option<String>,
    pub codigo: Option<String>,
    pub usrcode: Option<String>,
    pub codigo_barra: Option<String>,
    pub unidad_medida: Option<SimpleItem>,
    pub tasa_iva: Option<TasaIva>,
    pub cuenta_contable: Option<SimpleItem>,
    pub precio_venta: Option<f64>,
    pub precio_ult_compra: Option<f64>,
    pub activo: Option<bool>,
}

pub fn to_producto_vm(payload: &Value) -> Producto {
    Producto {
        producto_id: id(first_field(payload, &["productoid", "productoId", "ID", "id"])),
        nombre: opt_text(field(payload, "nombre")),
        codigo: opt_text(field(payload, "codigo")),
        usrcode: opt_text(first_field(payload, &["usrcode", "usrCode"])),
        codigo_barra: opt_text(field(payload, "codigoBarra")),
        unidad_medida: SimpleItem::from_payload(field(payload, "unidadMedida")),
        tasa_iva: TasaIva::from_payload(field(payload, "tasaIva")),
        cuenta_contable: SimpleItem::from_payload(field(payload, "cuentaContable")),
        precio_venta: number(field(payload, "precioVenta")),
        precio_ult_compra: number(field(payload, "precioUltCompra")),
        activo: flag(field(payload, "activo")),
    }
}
