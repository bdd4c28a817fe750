use crate::layout::global_context::use_app_context;
use crate::shared::messages::UI_MESSAGES;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{PAGE_CAT_DETAIL, PAGE_CAT_NESTED};
use crate::shared::table::{cell_text, simple_item_rows, slot_message, DetailBody, SlotMessages};
use crate::state::DetailStatus;
use contracts::domain::a002_cliente::Cliente;
use contracts::domain::common::SimpleItem;
use leptos::prelude::*;

const CLIENTE_MESSAGES: SlotMessages = SlotMessages {
    loading: UI_MESSAGES.cliente_loading,
    not_found: UI_MESSAGES.cliente_not_found,
    load_error: UI_MESSAGES.cliente_load_error,
};

fn join_names(items: &[SimpleItem]) -> String {
    items
        .iter()
        .filter_map(|item| {
            item.nombre
                .clone()
                .or_else(|| item.id.as_ref().map(|id| id.to_string()))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn nombre(item: &Option<SimpleItem>) -> String {
    cell_text(item.as_ref().and_then(|i| i.nombre.as_ref()))
}

fn cliente_rows(cliente: &Cliente) -> Vec<(&'static str, String)> {
    vec![
        ("cliente_id", cell_text(cliente.cliente_id.as_ref())),
        ("nombre", cell_text(cliente.nombre.as_ref())),
        ("razonSocial", cell_text(cliente.razon_social.as_ref())),
        ("nombreComercial", cell_text(cliente.nombre_comercial.as_ref())),
        ("cuit", cell_text(cliente.cuit.as_ref())),
        (
            "responsabilidadOrganizacionItem",
            join_names(&cliente.responsabilidad_organizacion_item),
        ),
        ("esclienteextranjero", cell_text(cliente.es_cliente_extranjero)),
        ("esProveedor", cell_text(cliente.es_proveedor)),
        ("direccion", cell_text(cliente.direccion.as_ref())),
        ("email", cell_text(cliente.email.as_ref())),
        ("telefono", cell_text(cliente.telefono.as_ref())),
        ("codigoPostal", cell_text(cliente.codigo_postal.as_ref())),
        (
            "provincia",
            cell_text(cliente.provincia.as_ref().and_then(|p| p.nombre.as_ref())),
        ),
        ("pais", nombre(&cliente.pais)),
        ("localidad", nombre(&cliente.localidad)),
        ("cuentaVenta_id", nombre(&cliente.cuenta_venta)),
        ("cuentaCompra_id", nombre(&cliente.cuenta_compra)),
        ("listaPrecioVenta", nombre(&cliente.lista_precio_venta)),
        ("usrCode", cell_text(cliente.usr_code.as_ref())),
        ("descripcion", cell_text(cliente.descripcion.as_ref())),
    ]
}

/// Client slot: status message or data, then the tax sub-records once ready.
#[component]
pub fn ClienteDetails(page_id: &'static str) -> impl IntoView {
    let view_state = use_app_context().view;
    let slot = Memo::new(move |_| view_state.with(|v| v.cliente_detail.clone()));

    let title = move || {
        slot.with(|s| format!("Detalle de cliente {}", s.entity_id().unwrap_or_default()))
    };
    let body = move || {
        slot.with(|s| match slot_message(s, &CLIENTE_MESSAGES) {
            Some(message) => Err(message),
            None => Ok(s.data().map(cliente_rows).unwrap_or_default()),
        })
    };

    view! {
        {move || view! {
            <PageFrame page_id=page_id category=PAGE_CAT_DETAIL title=title()>
                <DetailBody rows=body() />
            </PageFrame>
        }}
        {move || slot.with(|s| {
            if s.status() != DetailStatus::Ready {
                return None;
            }
            let cliente = s.data()?.clone();
            Some(view! {
                <NestedSection
                    page_id="a002_cliente--identificacion-tributaria"
                    label="identificacionTributaria"
                    item=cliente.identificacion_tributaria
                    missing=UI_MESSAGES.identificacion_tributaria_not_found
                />
                <NestedSection
                    page_id="a002_cliente--categoria-fiscal"
                    label="categoriaFiscal"
                    item=cliente.categoria_fiscal
                    missing=UI_MESSAGES.categoria_fiscal_not_found
                />
            })
        })}
    }
}

#[component]
fn NestedSection(
    page_id: &'static str,
    label: &'static str,
    item: Option<SimpleItem>,
    missing: &'static str,
) -> impl IntoView {
    let rows = item
        .as_ref()
        .map(simple_item_rows)
        .ok_or_else(|| missing.to_string());

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_NESTED title=label>
            <DetailBody rows=rows />
        </PageFrame>
    }
}

/// Client as the main table.
#[component]
pub fn ClienteMainView() -> impl IntoView {
    view! { <ClienteDetails page_id="a002_cliente--detail" /> }
}
