use crate::controller::ClienteTarget;
use crate::domain::a001_remito::ui::items::ItemTable;
use crate::domain::a002_cliente::ui::ClienteDetails;
use crate::layout::global_context::{use_app_context, AppContext};
use crate::shared::messages::UI_MESSAGES;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table::{cell_text, MessageRow};
use contracts::domain::a001_remito::Remito;
use leptos::prelude::*;

const REMITO_COLUMNS: [&str; 8] = [
    "transaccionId",
    "numeroRemito",
    "fecha",
    "observacion",
    "clienteId",
    "comisionVendedor",
    "depositoId",
    "circuitoContableId",
];

/// Remito list, items of the selected remito and its client, if loaded.
#[component]
pub fn RemitoMainView() -> impl IntoView {
    let view_state = use_app_context().view;
    let remitos = Memo::new(move |_| view_state.with(|v| v.visible_remitos.clone()));
    let selected = Memo::new(move |_| view_state.with(|v| v.selected_remito.clone()));
    let show_cliente = Memo::new(move |_| {
        view_state.with(|v| v.selected_remito.is_some() && !v.cliente_detail.is_idle())
    });

    view! {
        <PageFrame page_id="a001_remito--list" category=PAGE_CAT_LIST title="Remito de Venta">
            <RemitoTable remitos=remitos />
        </PageFrame>
        {move || selected.get().map(|remito| view! { <ItemTable remito=remito /> })}
        <Show when=move || show_cliente.get()>
            <ClienteDetails page_id="a002_cliente--detail-inline" />
        </Show>
    }
}

#[component]
fn RemitoTable(remitos: Memo<Vec<Remito>>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {REMITO_COLUMNS.iter().map(|column| view! {
                            <th class="table__header-cell">{*column}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = remitos.get();
                        if rows.is_empty() {
                            return view! {
                                <MessageRow colspan=REMITO_COLUMNS.len() message=UI_MESSAGES.no_remitos />
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|remito| remito_row(ctx, remito))
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn remito_row(ctx: AppContext, remito: Remito) -> impl IntoView {
    let transaccion_id = remito.transaccion_id.as_ref().map(|id| id.to_string());
    let cliente_id = remito.cliente_id.as_ref().map(|id| id.to_string());

    let transaccion_cell = transaccion_id.clone().map(|id| {
        let label = id.clone();
        view! {
            <a
                href="#"
                class="link link--transaccion"
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.dispatch(|controller| controller.handle_transaccion_click(&id));
                }
            >
                {label}
            </a>
        }
    });

    let cliente_cell = cliente_id.map(|id| {
        let label = id.clone();
        view! {
            <a
                href="#"
                class="link link--cliente"
                on:click=move |ev| {
                    ev.prevent_default();
                    let transaccion_id = transaccion_id.clone();
                    let cliente_id = id.clone();
                    ctx.spawn(move |controller| async move {
                        controller
                            .handle_cliente_click(
                                transaccion_id.as_deref(),
                                Some(cliente_id.as_str()),
                                ClienteTarget::MainTable,
                            )
                            .await
                    });
                }
            >
                {label}
            </a>
        }
    });

    view! {
        <tr class="table__row">
            <td class="table__cell">{transaccion_cell}</td>
            <td class="table__cell text-nowrap">{remito.numero_remito}</td>
            <td class="table__cell text-nowrap">{remito.fecha}</td>
            <td class="table__cell remito-observacion">{remito.observacion}</td>
            <td class="table__cell">{cliente_cell}</td>
            <td class="table__cell">{cell_text(remito.comision_vendedor)}</td>
            <td class="table__cell">{cell_text(remito.deposito_id)}</td>
            <td class="table__cell">{cell_text(remito.circuito_contable_id)}</td>
        </tr>
    }
}
