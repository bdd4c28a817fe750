use crate::controller::ClienteTarget;
use crate::layout::global_context::use_app_context;
use crate::shared::messages::UI_MESSAGES;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_NESTED;
use crate::shared::table::{cell_text, MessageRow};
use contracts::domain::a001_remito::{Item, Remito};
use leptos::prelude::*;

const ITEM_COLUMNS: [&str; 6] = [
    "transaccionCVItemId",
    "transaccionId",
    "productoID",
    "descripcion",
    "cantidad",
    "precio",
];

/// Items of the selected remito, with product links and a link that loads
/// the remito's client below.
#[component]
pub fn ItemTable(remito: Remito) -> impl IntoView {
    let ctx = use_app_context();
    let transaccion_id = cell_text(remito.transaccion_id.as_ref());
    let title = format!("Detalle de items para transaccionId {}", transaccion_id);

    let cliente_link = remito.cliente_id.as_ref().map(|id| {
        let cliente_id = id.to_string();
        let transaccion_id = transaccion_id.clone();
        view! {
            <a
                href="#"
                class="link link--cliente"
                on:click=move |ev| {
                    ev.prevent_default();
                    let transaccion_id = transaccion_id.clone();
                    let cliente_id = cliente_id.clone();
                    ctx.spawn(move |controller| async move {
                        controller
                            .handle_cliente_click(
                                Some(transaccion_id.as_str()),
                                Some(cliente_id.as_str()),
                                ClienteTarget::Inline,
                            )
                            .await
                    });
                }
            >
                {format!("Ver cliente {}", id)}
            </a>
        }
    });

    let rows = if remito.items.is_empty() {
        view! { <MessageRow colspan=ITEM_COLUMNS.len() message=UI_MESSAGES.no_items /> }.into_any()
    } else {
        remito
            .items
            .into_iter()
            .map(item_row)
            .collect_view()
            .into_any()
    };

    view! {
        <PageFrame page_id="a001_remito--items" category=PAGE_CAT_NESTED title=title>
            <div class="section__actions">{cliente_link}</div>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {ITEM_COLUMNS.iter().map(|column| view! {
                                <th class="table__header-cell">{*column}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </PageFrame>
    }
}

fn item_row(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let producto_cell = item.producto.id.as_ref().map(|id| {
        let producto_id = id.to_string();
        view! {
            <a
                href="#"
                class="link link--producto"
                on:click=move |ev| {
                    ev.prevent_default();
                    let producto_id = producto_id.clone();
                    ctx.spawn(move |controller| async move {
                        controller.handle_producto_click(Some(producto_id.as_str())).await
                    });
                }
            >
                {id.to_string()}
            </a>
        }
    });

    view! {
        <tr class="table__row">
            <td class="table__cell">{cell_text(item.transaccion_cv_item_id)}</td>
            <td class="table__cell">{cell_text(item.transaccion_id)}</td>
            <td class="table__cell">{producto_cell}</td>
            <td class="table__cell">{item.descripcion}</td>
            <td class="table__cell">{cell_text(item.cantidad)}</td>
            <td class="table__cell">{cell_text(item.precio)}</td>
        </tr>
    }
}
