use crate::controller::AppController;
use crate::layout::global_context::AppContext;
use crate::repositories::create_repositories;
use crate::routes::routes::AppRoutes;
use crate::routes::BrowserHistory;
use crate::shared::config::{data_source_from_browser, ApiEndpoints};
use crate::state::AppStore;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let repositories =
        create_repositories(data_source_from_browser(), &ApiEndpoints::from_browser());
    let controller = Rc::new(AppController::new(
        Rc::new(AppStore::new()),
        repositories,
        Rc::new(BrowserHistory),
    ));

    // Provide the AppContext to the whole app via context.
    let ctx = AppContext::new(controller);
    provide_context(ctx);

    ctx.spawn(|controller| async move { controller.init().await });

    view! {
        <AppRoutes />
    }
}
