use crate::controller::{AppController, RenderModel};
use leptos::prelude::*;
use std::future::Future;
use std::rc::Rc;

/// Shared by every component: the current render model and the controller.
///
/// The controller is not `Send`, so it lives in local arena storage; the
/// context itself stays `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub view: RwSignal<RenderModel>,
    controller: StoredValue<Rc<AppController>, LocalStorage>,
}

impl AppContext {
    /// Mirrors every store notification into the `view` signal.
    pub fn new(controller: Rc<AppController>) -> Self {
        let view = RwSignal::new(controller.render_model());
        controller
            .store()
            .subscribe(move |state| view.set(RenderModel::from_state(state)));

        Self {
            view,
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> Rc<AppController> {
        self.controller.get_value()
    }

    /// Runs a synchronous handler.
    pub fn dispatch(&self, action: impl FnOnce(&AppController)) {
        self.controller.with_value(|controller| action(controller.as_ref()));
    }

    /// Runs an async handler on the local executor.
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<AppController>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(action(self.controller()));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext context not found")
}
