use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let view_state = ctx.view;

    let on_main_view_change = move |ev: leptos::ev::Event| {
        let selection = event_target_value(&ev);
        ctx.spawn(move |controller| async move {
            controller.handle_main_view_change(&selection).await
        });
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Comprobantes de venta"</span>
                <select
                    class="header__select"
                    aria-label="Vista principal"
                    prop:value=move || view_state.with(|v| v.main_view_value())
                    on:change=on_main_view_change
                >
                    <option value="">"Selecciona un modulo"</option>
                    <option value="remito">"Remito de Venta"</option>
                    <option value="listaPrecio">"Listado de precios"</option>
                </select>
            </div>
            <div class="header__actions">
                <Show when=move || view_state.with(|v| v.show_back)>
                    <button
                        class="button button--ghost"
                        on:click=move |_| ctx.dispatch(|controller| controller.handle_back())
                    >
                        {"Volver"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| ctx.dispatch(|controller| controller.handle_show_all())
                    >
                        {"Ver todos"}
                    </button>
                </Show>
            </div>
        </header>
    }
}
