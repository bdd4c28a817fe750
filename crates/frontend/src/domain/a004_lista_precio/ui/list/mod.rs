use crate::layout::global_context::use_app_context;
use crate::shared::messages::UI_MESSAGES;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table::{cell_text, MessageRow};
use crate::state::{CollectionSlot, CollectionStatus};
use contracts::domain::a004_lista_precio::ListaPrecio;
use leptos::prelude::*;

const LISTA_PRECIO_COLUMNS: [&str; 4] = ["listaPrecioID", "nombre", "descripcion", "activo"];

/// Message replacing the rows, if any.
fn status_message(slot: &CollectionSlot<ListaPrecio>) -> Option<String> {
    match slot.status() {
        CollectionStatus::Idle | CollectionStatus::Loading => {
            Some(UI_MESSAGES.lista_precio_loading.to_string())
        }
        CollectionStatus::Error => Some(
            slot.error_message()
                .unwrap_or(UI_MESSAGES.lista_precios_load_error)
                .to_string(),
        ),
        CollectionStatus::Ready if slot.items().is_empty() => {
            Some(UI_MESSAGES.no_lista_precios.to_string())
        }
        CollectionStatus::Ready => None,
    }
}

#[component]
pub fn ListaPrecioTable() -> impl IntoView {
    let view_state = use_app_context().view;
    let slot = Memo::new(move |_| view_state.with(|v| v.lista_precios.clone()));

    view! {
        <PageFrame page_id="a004_lista_precio--list" category=PAGE_CAT_LIST title="Listado de precios">
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {LISTA_PRECIO_COLUMNS.iter().map(|column| view! {
                                <th class="table__header-cell">{*column}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || slot.with(|s| match status_message(s) {
                            Some(message) => view! {
                                <MessageRow colspan=LISTA_PRECIO_COLUMNS.len() message=message />
                            }
                            .into_any(),
                            None => s
                                .items()
                                .iter()
                                .map(|lista| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{cell_text(lista.lista_precio_id.as_ref())}</td>
                                        <td class="table__cell">{cell_text(lista.nombre.as_ref())}</td>
                                        <td class="table__cell">{cell_text(lista.descripcion.as_ref())}</td>
                                        <td class="table__cell">{cell_text(lista.activo)}</td>
                                    </tr>
                                })
                                .collect_view()
                                .into_any(),
                        })}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
