use crate::domain::common::payload::{field, first_field, flag, id, opt_text};
use crate::domain::common::{BusinessId, Provincia, SimpleItem};
use crate::shared::coalesce::pick_first_defined;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Client record (`clienteBean`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub cliente_id: Option<BusinessId>,
    pub nombre: Option<String>,
    pub razon_social: Option<String>,
    pub nombre_comercial: Option<String>,
    pub identificacion_tributaria: Option<SimpleItem>,
    pub categoria_fiscal: Option<SimpleItem>,
    pub cuit: Option<String>,
    pub responsabilidad_organizacion_item: Vec<SimpleItem>,
    pub es_cliente_extranjero: Option<bool>,
    pub es_proveedor: Option<bool>,
    pub direccion: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub codigo_postal: Option<String>,
    pub provincia: Option<Provincia>,
    pub pais: Option<SimpleItem>,
    pub localidad: Option<SimpleItem>,
    pub cuenta_venta: Option<SimpleItem>,
    pub cuenta_compra: Option<SimpleItem>,
    pub lista_precio_venta: Option<SimpleItem>,
    pub usr_code: Option<String>,
    pub descripcion: Option<String>,
}

/// Maps a raw `clienteBean` payload. Unknown keys are ignored.
pub fn to_cliente_vm(payload: &Value) -> Cliente {
    Cliente {
        cliente_id: id(first_field(
            payload,
            &["cliente_id", "clienteId", "clienteid", "ID", "id"],
        )),
        nombre: opt_text(field(payload, "nombre")),
        razon_social: opt_text(field(payload, "razonSocial")),
        nombre_comercial: opt_text(field(payload, "nombreComercial")),
        identificacion_tributaria: SimpleItem::from_payload(field(
            payload,
            "identificacionTributaria",
        )),
        categoria_fiscal: SimpleItem::from_payload(field(payload, "categoriaFiscal")),
        cuit: pick_first_defined([
            opt_text(field(payload, "cuit")),
            opt_text(field(payload, "CUIT")),
        ]),
        responsabilidad_organizacion_item: SimpleItem::list_from_payload(field(
            payload,
            "responsabilidadOrganizacionItem",
        )),
        es_cliente_extranjero: flag(first_field(
            payload,
            &["esclienteextranjero", "esClienteExtranjero"],
        )),
        es_proveedor: flag(field(payload, "esProveedor")),
        direccion: opt_text(field(payload, "direccion")),
        email: opt_text(field(payload, "email")),
        telefono: opt_text(field(payload, "telefono")),
        codigo_postal: opt_text(field(payload, "codigoPostal")),
        provincia: Provincia::from_payload(field(payload, "provincia")),
        pais: SimpleItem::from_payload(field(payload, "pais")),
        localidad: SimpleItem::from_payload(field(payload, "localidad")),
        cuenta_venta: SimpleItem::from_payload(first_field(
            payload,
            &["cuentaVenta_id", "cuentaVenta"],
        )),
        cuenta_compra: SimpleItem::from_payload(first_field(
            payload,
            &["cuentaCompra_id", "cuentaCompra"],
        )),
        lista_precio_venta: SimpleItem::from_payload(field(payload, "listaPrecioVenta")),
        usr_code: opt_text(field(payload, "usrCode")),
        descripcion: opt_text(field(payload, "descripcion")),
    }
}
