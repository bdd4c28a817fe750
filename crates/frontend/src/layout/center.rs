use crate::domain::a001_remito::ui::RemitoMainView;
use crate::domain::a002_cliente::ui::ClienteMainView;
use crate::domain::a003_producto::ui::ProductoMainView;
use crate::domain::a004_lista_precio::ui::ListaPrecioTable;
use crate::layout::global_context::use_app_context;
use crate::shared::messages::UI_MESSAGES;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_EMPTY;
use crate::state::{ActiveModule, MainTable};
use leptos::prelude::*;

/// Dispatches the main surface on the active module and main table.
#[component]
pub fn Center() -> impl IntoView {
    let view_state = use_app_context().view;
    let surface = Memo::new(move |_| view_state.with(|v| (v.active_module, v.main_table)));

    view! {
        <div data-zone="center" class="app-main__content">
            {move || match surface.get() {
                (ActiveModule::None, _) => view! { <EmptyState /> }.into_any(),
                (ActiveModule::ListaPrecio, _) => view! { <ListaPrecioTable /> }.into_any(),
                (_, MainTable::Cliente) => view! { <ClienteMainView /> }.into_any(),
                (_, MainTable::Producto) => view! { <ProductoMainView /> }.into_any(),
                _ => view! { <RemitoMainView /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <PageFrame page_id="app--empty" category=PAGE_CAT_EMPTY title=UI_MESSAGES.empty_state_title>
            <p class="section__hint">"Elige Remito de Venta o Listado de precios en el selector."</p>
        </PageFrame>
    }
}
