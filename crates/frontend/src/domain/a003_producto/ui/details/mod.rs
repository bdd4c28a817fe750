use crate::layout::global_context::use_app_context;
use crate::shared::messages::UI_MESSAGES;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{PAGE_CAT_DETAIL, PAGE_CAT_NESTED};
use crate::shared::table::{cell_text, simple_item_rows, slot_message, DetailBody, SlotMessages};
use crate::state::DetailStatus;
use contracts::domain::a003_producto::{Producto, TasaIva};
use leptos::prelude::*;

const PRODUCTO_MESSAGES: SlotMessages = SlotMessages {
    loading: UI_MESSAGES.producto_loading,
    not_found: UI_MESSAGES.producto_not_found,
    load_error: UI_MESSAGES.producto_load_error,
};

fn producto_rows(producto: &Producto) -> Vec<(&'static str, String)> {
    vec![
        ("productoid", cell_text(producto.producto_id.as_ref())),
        ("nombre", cell_text(producto.nombre.as_ref())),
        ("codigo", cell_text(producto.codigo.as_ref())),
        ("usrcode", cell_text(producto.usrcode.as_ref())),
        ("codigoBarra", cell_text(producto.codigo_barra.as_ref())),
        ("precioVenta", cell_text(producto.precio_venta)),
        ("precioUltCompra", cell_text(producto.precio_ult_compra)),
        ("activo", cell_text(producto.activo)),
    ]
}

fn tasa_iva_rows(tasa: &TasaIva) -> Vec<(&'static str, String)> {
    let mut rows = simple_item_rows(&tasa.item);
    rows.push(("porcentaje", cell_text(tasa.porcentaje)));
    rows
}

/// Product as the main table, with its unit, tax rate and account.
#[component]
pub fn ProductoMainView() -> impl IntoView {
    let view_state = use_app_context().view;
    let slot = Memo::new(move |_| view_state.with(|v| v.producto_detail.clone()));

    let title = move || {
        slot.with(|s| format!("Detalle de producto {}", s.entity_id().unwrap_or_default()))
    };
    let body = move || {
        slot.with(|s| match slot_message(s, &PRODUCTO_MESSAGES) {
            Some(message) => Err(message),
            None => Ok(s.data().map(producto_rows).unwrap_or_default()),
        })
    };

    view! {
        {move || view! {
            <PageFrame page_id="a003_producto--detail" category=PAGE_CAT_DETAIL title=title()>
                <DetailBody rows=body() />
            </PageFrame>
        }}
        {move || slot.with(|s| {
            if s.status() != DetailStatus::Ready {
                return None;
            }
            let producto = s.data()?;
            let unidad_medida = producto
                .unidad_medida
                .as_ref()
                .map(simple_item_rows)
                .ok_or_else(|| UI_MESSAGES.producto_unidad_medida_not_found.to_string());
            let tasa_iva = producto
                .tasa_iva
                .as_ref()
                .map(tasa_iva_rows)
                .ok_or_else(|| UI_MESSAGES.producto_tasa_iva_not_found.to_string());
            let cuenta_contable = producto
                .cuenta_contable
                .as_ref()
                .map(simple_item_rows)
                .ok_or_else(|| UI_MESSAGES.producto_cuenta_contable_not_found.to_string());

            Some(view! {
                <PageFrame page_id="a003_producto--unidad-medida" category=PAGE_CAT_NESTED title="unidadMedida">
                    <DetailBody rows=unidad_medida />
                </PageFrame>
                <PageFrame page_id="a003_producto--tasa-iva" category=PAGE_CAT_NESTED title="tasaIva">
                    <DetailBody rows=tasa_iva />
                </PageFrame>
                <PageFrame page_id="a003_producto--cuenta-contable" category=PAGE_CAT_NESTED title="cuentaContable">
                    <DetailBody rows=cuenta_contable />
                </PageFrame>
            })
        })}
    }
}
