use crate::layout::global_context::use_app_context;
use crate::layout::Shell;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;

/// Binds browser back/forward to the controller and renders the shell.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        ctx.spawn(|controller| async move { controller.handle_popstate().await });
    });

    view! { <Shell /> }
}
