//! Orchestration: turns user and browser events into store mutations,
//! repository calls and URL updates.
//!
//! Each handler runs its synchronous part inside one [`AppStore::batch`], so
//! a click produces exactly one notification. A detail fetch adds a second,
//! separate notification when its response lands, and only if the request
//! is still current.

pub mod render_model;

pub use render_model::RenderModel;

use crate::repositories::{DetailRepository, Repositories, RepositoryError};
use crate::routes::{HistoryMode, HistoryPort, Route, RouteSync};
use crate::shared::messages::UI_MESSAGES;
use crate::state::{
    AppStore, BannerVariant, CollectionStatus, DetailEntity, DetailKind, MainTable, RequestToken,
    RequestTrackers,
};
use contracts::domain::a001_remito::fallback_remitos;
use contracts::domain::a002_cliente::Cliente;
use contracts::domain::a003_producto::Producto;
use std::rc::Rc;

/// A detail entity the controller knows how to fetch.
pub trait LoadableDetail: DetailEntity {
    const NOT_FOUND_MESSAGE: &'static str;
    const LOAD_ERROR_MESSAGE: &'static str;

    fn repository(repositories: &Repositories) -> Rc<dyn DetailRepository<Self>>;
}

impl LoadableDetail for Cliente {
    const NOT_FOUND_MESSAGE: &'static str = UI_MESSAGES.cliente_not_found;
    const LOAD_ERROR_MESSAGE: &'static str = UI_MESSAGES.cliente_load_error;

    fn repository(repositories: &Repositories) -> Rc<dyn DetailRepository<Self>> {
        repositories.cliente.clone()
    }
}

impl LoadableDetail for Producto {
    const NOT_FOUND_MESSAGE: &'static str = UI_MESSAGES.producto_not_found;
    const LOAD_ERROR_MESSAGE: &'static str = UI_MESSAGES.producto_load_error;

    fn repository(repositories: &Repositories) -> Rc<dyn DetailRepository<Self>> {
        repositories.producto.clone()
    }
}

/// Where a clicked client is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClienteTarget {
    /// Below the selected remito, keeping the remito table.
    Inline,
    /// As the main table.
    MainTable,
}

/// A detail request that has been started and still has to be awaited.
#[derive(Debug)]
struct PendingDetail {
    kind: DetailKind,
    token: RequestToken,
    entity_id: String,
}

pub struct AppController {
    store: Rc<AppStore>,
    repositories: Repositories,
    trackers: RequestTrackers,
    routes: RouteSync,
}

impl AppController {
    pub fn new(
        store: Rc<AppStore>,
        repositories: Repositories,
        history: Rc<dyn HistoryPort>,
    ) -> Self {
        Self {
            store,
            repositories,
            trackers: RequestTrackers::new(),
            routes: RouteSync::new(history),
        }
    }

    pub fn store(&self) -> &Rc<AppStore> {
        &self.store
    }

    pub fn render_model(&self) -> RenderModel {
        RenderModel::from_state(&self.store.state())
    }

    /// Startup: load the remito list, then follow the URL.
    pub async fn init(&self) {
        log::info!("Starting remito viewer");
        self.load_remitos().await;
    }

    // ------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------

    /// Loads the remito list. On failure the sample remitos are shown under
    /// a warning banner. The URL is applied afterwards in the same render.
    pub async fn load_remitos(&self) {
        let result = self.repositories.remito.list().await;

        let pending = self.store.batch(|store| {
            match result {
                Ok(remitos) => {
                    log::debug!("Loaded {} remitos", remitos.len());
                    store.set_remitos(remitos);
                    store.clear_banner();
                }
                Err(e) => {
                    log::error!("Could not load remitos: {}", e);
                    store.set_remitos(fallback_remitos());
                    store.set_banner(UI_MESSAGES.remitos_load_error, BannerVariant::Warning);
                }
            }
            self.begin_route()
        });

        self.finish_detail(pending).await;
    }

    /// Loads the price lists, reusing a ready or in-flight list unless `force`
    /// is set.
    pub async fn load_lista_precios(&self, force: bool) {
        if let Some(token) = self.begin_lista_precios(force) {
            self.finish_lista_precios(token).await;
        }
    }

    /// Returns a token when a fetch is needed and marks the slot loading.
    fn begin_lista_precios(&self, force: bool) -> Option<RequestToken> {
        let status = self.store.state().lista_precios.status();
        if !force && matches!(status, CollectionStatus::Ready | CollectionStatus::Loading) {
            return None;
        }
        self.store.set_lista_precios_loading();
        Some(self.trackers.lista_precios.next())
    }

    async fn finish_lista_precios(&self, token: RequestToken) {
        let result = self.repositories.lista_precio.list().await;
        if !self.trackers.lista_precios.is_current(token) {
            log::debug!("Discarding stale price list response");
            return;
        }
        self.store.batch(|store| match result {
            Ok(listas) => {
                store.set_lista_precios_ready(listas);
                store.clear_banner();
            }
            Err(e) => {
                log::error!("Could not load price lists: {}", e);
                store.set_lista_precios_error(UI_MESSAGES.lista_precios_load_error);
                store.set_banner(UI_MESSAGES.lista_precios_load_error, BannerVariant::Warning);
            }
        });
    }

    // ------------------------------------------------------------------
    // Detail loading
    // ------------------------------------------------------------------

    /// Fetches one detail record into its slot.
    ///
    /// A blank id is answered with the not-found message without calling the
    /// repository. A response that is no longer current is dropped.
    pub async fn load_detail<E: LoadableDetail>(&self, entity_id: Option<&str>) {
        let pending = self.begin_detail::<E>(entity_id);
        self.finish_detail(pending).await;
    }

    fn begin_detail<E: LoadableDetail>(&self, entity_id: Option<&str>) -> Option<PendingDetail> {
        let entity_id = match entity_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => {
                self.store.set_detail_error::<E>(None, E::NOT_FOUND_MESSAGE);
                return None;
            }
        };

        let token = self.trackers.for_kind(E::KIND).next();
        self.store.set_detail_loading::<E>(&entity_id);
        Some(PendingDetail {
            kind: E::KIND,
            token,
            entity_id,
        })
    }

    async fn finish_detail(&self, pending: Option<PendingDetail>) {
        let Some(pending) = pending else {
            return;
        };
        match pending.kind {
            DetailKind::Cliente => self.fetch_detail::<Cliente>(pending).await,
            DetailKind::Producto => self.fetch_detail::<Producto>(pending).await,
        }
    }

    async fn fetch_detail<E: LoadableDetail>(&self, pending: PendingDetail) {
        let result = E::repository(&self.repositories)
            .get_by_id(&pending.entity_id)
            .await;
        self.complete_detail::<E>(pending, result);
    }

    fn complete_detail<E: LoadableDetail>(
        &self,
        pending: PendingDetail,
        result: Result<Option<E>, RepositoryError>,
    ) {
        if !self.trackers.for_kind(E::KIND).is_current(pending.token) {
            log::debug!(
                "Discarding stale {} response for {}",
                E::KIND.as_str(),
                pending.entity_id
            );
            return;
        }

        match result {
            Ok(Some(entity)) => self.store.set_detail_ready(&pending.entity_id, entity),
            Ok(None) => self.store.set_detail_not_found::<E>(&pending.entity_id),
            Err(e) => {
                log::error!(
                    "Could not load {} {}: {}",
                    E::KIND.as_str(),
                    pending.entity_id,
                    e
                );
                self.store
                    .set_detail_error::<E>(Some(&pending.entity_id), E::LOAD_ERROR_MESSAGE);
            }
        }
    }

    // ------------------------------------------------------------------
    // URL
    // ------------------------------------------------------------------

    /// Derives the view from the current URL: `productoId`, then
    /// `clienteId`, then `remitoVentaId`, then a default for the mode.
    pub async fn apply_route_from_url(&self) {
        let pending = self.store.batch(|_| self.begin_route());
        self.finish_detail(pending).await;
    }

    fn begin_route(&self) -> Option<PendingDetail> {
        let route = self.routes.read();
        let store = &self.store;
        log::debug!("Applying route {:?}", route);

        if let Some(producto_id) = route.producto_id.as_deref() {
            store.clear_selection();
            store.show_producto_as_main_table();
            return self.begin_detail::<Producto>(Some(producto_id));
        }

        if let Some(cliente_id) = route.cliente_id.as_deref() {
            store.clear_selection();
            store.show_cliente_as_main_table();
            return self.begin_detail::<Cliente>(Some(cliente_id));
        }

        if let Some(remito_venta_id) = route.remito_venta_id.as_deref() {
            store.show_remito_as_main_table();
            store.select_transaccion(remito_venta_id);
            return None;
        }

        match store.state().main_table {
            MainTable::None => store.clear_selection(),
            MainTable::ListaPrecio => {}
            _ => {
                store.show_remito_as_main_table();
                store.clear_selection();
            }
        }
        None
    }

    /// Browser back/forward: drop in-flight detail responses, then follow
    /// the new URL.
    pub async fn handle_popstate(&self) {
        self.trackers.invalidate_all();
        self.apply_route_from_url().await;
    }

    // ------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------

    pub fn handle_transaccion_click(&self, transaccion_id: &str) {
        self.trackers.invalidate_all();
        self.store.batch(|store| {
            self.routes
                .write(&Route::remito(Some(transaccion_id)), HistoryMode::Push);
            store.show_remito_as_main_table();
            store.select_transaccion(transaccion_id);
        });
    }

    pub async fn handle_cliente_click(
        &self,
        transaccion_id: Option<&str>,
        cliente_id: Option<&str>,
        target: ClienteTarget,
    ) {
        self.trackers.producto.invalidate();
        let transaccion_id = transaccion_id.map(str::trim).filter(|id| !id.is_empty());

        let pending = self.store.batch(|store| {
            match transaccion_id {
                Some(id) => store.select_transaccion(id),
                None => store.clear_selection(),
            }

            match target {
                ClienteTarget::MainTable => {
                    self.routes
                        .write(&Route::cliente(cliente_id), HistoryMode::Push);
                    store.show_cliente_as_main_table();
                }
                ClienteTarget::Inline => {
                    self.routes
                        .write(&Route::remito(transaccion_id), HistoryMode::Push);
                    store.show_remito_as_main_table();
                }
            }

            self.begin_detail::<Cliente>(cliente_id)
        });

        self.finish_detail(pending).await;
    }

    pub async fn handle_producto_click(&self, producto_id: Option<&str>) {
        self.trackers.cliente.invalidate();
        let pending = self.store.batch(|store| {
            self.routes
                .write(&Route::producto(producto_id), HistoryMode::Push);
            store.show_producto_as_main_table();
            store.reset_detail::<Cliente>();
            self.begin_detail::<Producto>(producto_id)
        });

        self.finish_detail(pending).await;
    }

    /// Main view selector: `"remito"`, `"listaPrecio"`, anything else empties
    /// the view.
    pub async fn handle_main_view_change(&self, selection: &str) {
        self.trackers.invalidate_all();
        let fetch_listas = self.store.batch(|store| {
            self.routes.write(&Route::empty(), HistoryMode::Push);
            store.clear_selection();

            match MainTable::parse(selection) {
                Some(MainTable::Remito) => {
                    store.show_remito_as_main_table();
                    None
                }
                Some(MainTable::ListaPrecio) => {
                    store.show_lista_precio_as_main_table();
                    self.begin_lista_precios(false)
                }
                _ => {
                    store.show_empty_main_table();
                    None
                }
            }
        });

        if let Some(token) = fetch_listas {
            self.finish_lista_precios(token).await;
        }
    }

    pub fn handle_show_all(&self) {
        self.trackers.invalidate_all();
        self.store.batch(|store| {
            self.routes.write(&Route::empty(), HistoryMode::Push);
            store.show_remito_as_main_table();
            store.clear_selection();
        });
    }

    /// Goes back in history when there is somewhere to go (the view follows
    /// on the popstate). Otherwise replaces the URL and shows the full list.
    pub fn handle_back(&self) {
        self.trackers.invalidate_all();

        if self.routes.can_go_back() {
            self.routes.back();
            return;
        }

        self.store.batch(|store| {
            self.routes.write(&Route::empty(), HistoryMode::Replace);
            store.show_remito_as_main_table();
            store.clear_selection();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::ListRepository;
    use crate::routes::history::MemoryHistory;
    use crate::state::{AppState, Banner, DetailStatus};
    use async_trait::async_trait;
    use contracts::domain::a001_remito::{to_remito_vm, Remito};
    use contracts::domain::a004_lista_precio::ListaPrecio;
    use contracts::domain::common::BusinessId;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::future::Future;

    type Reply<R> = oneshot::Sender<Result<R, RepositoryError>>;

    /// Repository whose calls stay pending until the test answers them.
    struct Pending<R> {
        calls: RefCell<Vec<(String, Option<Reply<R>>)>>,
    }

    impl<R> Pending<R> {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                calls: RefCell::new(Vec::new()),
            })
        }

        fn push(&self, id: &str) -> oneshot::Receiver<Result<R, RepositoryError>> {
            let (tx, rx) = oneshot::channel();
            self.calls.borrow_mut().push((id.to_string(), Some(tx)));
            rx
        }

        fn requested(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(id, _)| id.clone()).collect()
        }

        fn resolve(&self, index: usize, result: Result<R, RepositoryError>) {
            let reply = self.calls.borrow_mut()[index]
                .1
                .take()
                .expect("call already answered");
            let _ = reply.send(result);
        }
    }

    fn dropped() -> RepositoryError {
        RepositoryError::Network("dropped".to_string())
    }

    #[async_trait(?Send)]
    impl<T: 'static> ListRepository<T> for Pending<Vec<T>> {
        async fn list(&self) -> Result<Vec<T>, RepositoryError> {
            let rx = self.push("");
            rx.await.unwrap_or_else(|_| Err(dropped()))
        }
    }

    #[async_trait(?Send)]
    impl<T: 'static> DetailRepository<T> for Pending<Option<T>> {
        async fn get_by_id(&self, id: &str) -> Result<Option<T>, RepositoryError> {
            let rx = self.push(id);
            rx.await.unwrap_or_else(|_| Err(dropped()))
        }
    }

    struct Harness {
        pool: LocalPool,
        controller: Rc<AppController>,
        history: Rc<MemoryHistory>,
        remitos: Rc<Pending<Vec<Remito>>>,
        listas: Rc<Pending<Vec<ListaPrecio>>>,
        clientes: Rc<Pending<Option<Cliente>>>,
        productos: Rc<Pending<Option<Producto>>>,
        renders: Rc<Cell<usize>>,
    }

    impl Harness {
        fn new(url: &str) -> Self {
            let remitos = Pending::new();
            let listas = Pending::new();
            let clientes = Pending::new();
            let productos = Pending::new();
            let repositories = Repositories {
                remito: remitos.clone(),
                lista_precio: listas.clone(),
                cliente: clientes.clone(),
                producto: productos.clone(),
            };

            let history = Rc::new(MemoryHistory::new(url));
            let store = Rc::new(AppStore::new());
            let renders = Rc::new(Cell::new(0));
            let counter = renders.clone();
            store.subscribe(move |_| counter.set(counter.get() + 1));

            Self {
                pool: LocalPool::new(),
                controller: Rc::new(AppController::new(store, repositories, history.clone())),
                history,
                remitos,
                listas,
                clientes,
                productos,
                renders,
            }
        }

        fn spawn<F, Fut>(&mut self, start: F)
        where
            F: FnOnce(Rc<AppController>) -> Fut,
            Fut: Future<Output = ()> + 'static,
        {
            let future = start(self.controller.clone());
            self.pool.spawner().spawn_local(future).unwrap();
            self.pool.run_until_stalled();
        }

        fn settle(&mut self) {
            self.pool.run_until_stalled();
        }

        fn state(&self) -> Rc<AppState> {
            self.controller.store().state()
        }

        fn init_with(&mut self, remitos: Vec<Remito>) {
            self.spawn(|c| async move { c.init().await });
            self.remitos.resolve(0, Ok(remitos));
            self.settle();
        }
    }

    fn remito(transaccion_id: i64, fecha: &str, cliente_id: i64) -> Remito {
        to_remito_vm(&json!({
            "transaccionId": transaccion_id,
            "numeroRemito": format!("X-0001-{:08}", transaccion_id),
            "fecha": fecha,
            "clienteId": cliente_id,
        }))
    }

    fn sample_remitos() -> Vec<Remito> {
        let mut remitos = fallback_remitos();
        remitos.push(remito(1, "2023-05-01", 77));
        remitos
    }

    fn cliente(nombre: &str) -> Cliente {
        Cliente {
            cliente_id: Some(BusinessId::from_i64(5182181)),
            nombre: Some(nombre.to_string()),
            ..Default::default()
        }
    }

    fn producto(nombre: &str) -> Producto {
        Producto {
            nombre: Some(nombre.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_init_shows_full_list() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        let state = h.state();
        assert_eq!(state.main_table, MainTable::Remito);
        assert_eq!(state.remitos.len(), 2);
        assert!(state.selected_transaccion_id.is_none());
        assert!(state.banner.is_none());
        assert!(!h.controller.render_model().show_back);
    }

    #[test]
    fn test_remito_load_failure_uses_fallback() {
        let mut h = Harness::new("/");
        h.spawn(|c| async move { c.init().await });
        h.remitos.resolve(0, Err(RepositoryError::Status { status: 500 }));
        h.settle();

        let state = h.state();
        assert_eq!(state.remitos.len(), 1);
        assert!(state.remitos[0].has_transaccion("38925753"));
        assert_eq!(state.remitos[0].numero_remito, "X-0001-00000064");
        assert_eq!(
            state.banner,
            Some(Banner {
                message: UI_MESSAGES.remitos_load_error.to_string(),
                variant: BannerVariant::Warning,
            })
        );
    }

    #[test]
    fn test_deep_link_to_remito_after_failure() {
        let mut h = Harness::new("/?remitoVentaId=38925753");
        h.spawn(|c| async move { c.init().await });
        h.remitos.resolve(0, Err(dropped()));
        h.settle();

        let view = h.controller.render_model();
        assert!(view.selected_remito.is_some());
        assert!(view.show_back);
    }

    #[test]
    fn test_transaccion_then_cliente_inline() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.controller.handle_transaccion_click("38925753");
        assert_eq!(h.history.current(), "/?remitoVentaId=38925753");
        assert_eq!(h.state().visible_remitos().len(), 1);

        h.spawn(|c| async move {
            c.handle_cliente_click(Some("38925753"), Some("5182181"), ClienteTarget::Inline)
                .await
        });
        assert_eq!(h.clientes.requested(), vec!["5182181".to_string()]);
        let state = h.state();
        assert_eq!(state.cliente_detail.status(), DetailStatus::Loading);
        assert_eq!(state.cliente_detail.entity_id(), Some("5182181"));
        assert_eq!(state.main_table, MainTable::Remito);

        h.clientes.resolve(0, Ok(Some(cliente("ACME SA"))));
        h.settle();

        let state = h.state();
        assert_eq!(state.cliente_detail.status(), DetailStatus::Ready);
        assert_eq!(state.cliente_detail.data(), Some(&cliente("ACME SA")));
        let visible = state.visible_remitos();
        assert_eq!(visible.len(), 1);
        assert!(visible[0].has_transaccion("38925753"));
        assert_eq!(h.history.current(), "/?remitoVentaId=38925753");
    }

    #[test]
    fn test_cliente_as_main_table_writes_route() {
        let mut h = Harness::new("/?mock=1");
        h.init_with(sample_remitos());

        h.spawn(|c| async move {
            c.handle_cliente_click(Some("38925753"), Some("5182181"), ClienteTarget::MainTable)
                .await
        });
        assert_eq!(h.history.current(), "/?clienteId=5182181&mock=1");
        assert_eq!(h.state().main_table, MainTable::Cliente);
        assert!(h.controller.render_model().show_back);
    }

    #[test]
    fn test_stale_producto_response_is_dropped() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move { c.handle_producto_click(Some("1")).await });
        h.spawn(|c| async move { c.handle_producto_click(Some("2")).await });
        assert_eq!(h.productos.requested(), vec!["1".to_string(), "2".to_string()]);

        h.productos.resolve(0, Ok(Some(producto("old"))));
        h.settle();
        let state = h.state();
        assert_eq!(state.producto_detail.status(), DetailStatus::Loading);
        assert_eq!(state.producto_detail.entity_id(), Some("2"));
        assert!(state.producto_detail.data().is_none());

        h.productos.resolve(1, Ok(None));
        h.settle();
        let state = h.state();
        assert_eq!(state.producto_detail.status(), DetailStatus::NotFound);
        assert_eq!(state.producto_detail.entity_id(), Some("2"));
    }

    #[test]
    fn test_late_first_response_does_not_overwrite_second() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move { c.handle_producto_click(Some("1")).await });
        h.spawn(|c| async move { c.handle_producto_click(Some("2")).await });
        h.productos.resolve(1, Ok(Some(producto("new"))));
        h.settle();
        h.productos.resolve(0, Ok(Some(producto("old"))));
        h.settle();

        assert_eq!(h.state().producto_detail.data(), Some(&producto("new")));
    }

    #[test]
    fn test_blank_id_never_reaches_repository() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move { c.handle_producto_click(Some("   ")).await });
        assert!(h.productos.requested().is_empty());
        let state = h.state();
        let slot = &state.producto_detail;
        assert_eq!(slot.status(), DetailStatus::Error);
        assert_eq!(slot.error_message(), Some(UI_MESSAGES.producto_not_found));
        assert_eq!(slot.entity_id(), None);

        h.spawn(|c| async move { c.load_detail::<Cliente>(None).await });
        assert!(h.clientes.requested().is_empty());
        assert_eq!(
            h.state().cliente_detail.error_message(),
            Some(UI_MESSAGES.cliente_not_found)
        );
    }

    #[test]
    fn test_invalidated_cliente_response_changes_nothing() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move {
            c.handle_cliente_click(None, Some("5182181"), ClienteTarget::MainTable)
                .await
        });
        h.controller.trackers.cliente.invalidate();
        let before = h.state().cliente_detail.clone();
        let renders = h.renders.get();

        h.clientes.resolve(0, Ok(Some(cliente("ACME SA"))));
        h.settle();

        assert_eq!(h.state().cliente_detail, before);
        assert_eq!(h.renders.get(), renders);
    }

    #[test]
    fn test_show_all_discards_pending_cliente() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move {
            c.handle_cliente_click(Some("38925753"), Some("5182181"), ClienteTarget::MainTable)
                .await
        });
        h.controller.handle_show_all();
        assert_eq!(h.history.current(), "/");

        h.clientes.resolve(0, Ok(Some(cliente("ACME SA"))));
        h.settle();

        let state = h.state();
        assert_eq!(state.main_table, MainTable::Remito);
        assert!(state.cliente_detail.is_idle());
        assert_eq!(state.visible_remitos().len(), 2);
    }

    #[test]
    fn test_cliente_click_discards_pending_producto() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move { c.handle_producto_click(Some("1672624")).await });
        h.spawn(|c| async move {
            c.handle_cliente_click(None, Some("5182181"), ClienteTarget::MainTable)
                .await
        });
        h.productos.resolve(0, Ok(Some(producto("Bolsa"))));
        h.settle();

        assert!(h.state().producto_detail.is_idle());
        assert_eq!(h.state().main_table, MainTable::Cliente);
    }

    #[test]
    fn test_producto_click_resets_pending_cliente() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move {
            c.handle_cliente_click(None, Some("5182181"), ClienteTarget::MainTable)
                .await
        });
        assert_eq!(h.state().cliente_detail.status(), DetailStatus::Loading);

        h.spawn(|c| async move { c.handle_producto_click(Some("1672624")).await });
        assert!(h.state().cliente_detail.is_idle());

        h.clientes.resolve(0, Ok(Some(cliente("ACME SA"))));
        h.settle();
        let state = h.state();
        assert!(state.cliente_detail.is_idle());
        assert_eq!(state.main_table, MainTable::Producto);
        assert_eq!(state.producto_detail.status(), DetailStatus::Loading);
    }

    #[test]
    fn test_deep_link_loads_producto() {
        let mut h = Harness::new("/?productoId=42");
        h.init_with(Vec::new());

        let state = h.state();
        assert_eq!(state.main_table, MainTable::Producto);
        assert_eq!(h.productos.requested(), vec!["42".to_string()]);
        assert_eq!(state.producto_detail.status(), DetailStatus::Loading);
        assert_eq!(state.producto_detail.entity_id(), Some("42"));

        h.productos.resolve(0, Ok(Some(producto("Bolsa"))));
        h.settle();
        assert_eq!(h.state().producto_detail.status(), DetailStatus::Ready);
    }

    #[test]
    fn test_deep_link_producto_wins_over_cliente() {
        let mut h = Harness::new("/?clienteId=5&productoId=42");
        h.init_with(Vec::new());

        assert_eq!(h.state().main_table, MainTable::Producto);
        assert!(h.clientes.requested().is_empty());
    }

    #[test]
    fn test_detail_error_keeps_requested_id() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move {
            c.handle_cliente_click(Some("38925753"), Some("5182181"), ClienteTarget::Inline)
                .await
        });
        h.clientes.resolve(0, Err(RepositoryError::Status { status: 500 }));
        h.settle();

        let state = h.state();
        let slot = &state.cliente_detail;
        assert_eq!(slot.status(), DetailStatus::Error);
        assert_eq!(slot.entity_id(), Some("5182181"));
        assert_eq!(slot.error_message(), Some(UI_MESSAGES.cliente_load_error));
    }

    #[test]
    fn test_popstate_invalidates_and_follows_url() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move {
            c.handle_cliente_click(Some("38925753"), Some("5182181"), ClienteTarget::MainTable)
                .await
        });
        assert_eq!(h.history.length(), 2);

        h.history.back();
        h.spawn(|c| async move { c.handle_popstate().await });
        let state = h.state();
        assert_eq!(state.main_table, MainTable::Remito);
        assert!(state.selected_transaccion_id.is_none());

        h.clientes.resolve(0, Ok(Some(cliente("ACME SA"))));
        h.settle();
        assert!(h.state().cliente_detail.is_idle());
    }

    #[test]
    fn test_back_uses_history_when_available() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.controller.handle_transaccion_click("38925753");
        h.controller.handle_back();
        assert_eq!(h.history.current(), "/");
        // The view follows on popstate.
        assert!(h.state().selected_transaccion_id.is_some());

        h.spawn(|c| async move { c.handle_popstate().await });
        assert!(h.state().selected_transaccion_id.is_none());
    }

    #[test]
    fn test_back_without_history_replaces_url() {
        let mut h = Harness::new("/?remitoVentaId=38925753");
        h.init_with(sample_remitos());
        assert!(h.state().selected_transaccion_id.is_some());

        h.controller.handle_back();
        assert_eq!(h.history.current(), "/");
        assert_eq!(h.history.length(), 1);
        let state = h.state();
        assert_eq!(state.main_table, MainTable::Remito);
        assert!(state.selected_transaccion_id.is_none());
    }

    #[test]
    fn test_lista_precios_are_cached() {
        let mut h = Harness::new("/?remitoVentaId=38925753");
        h.init_with(sample_remitos());

        h.spawn(|c| async move { c.handle_main_view_change("listaPrecio").await });
        assert_eq!(h.history.current(), "/");
        let state = h.state();
        assert_eq!(state.main_table, MainTable::ListaPrecio);
        assert_eq!(state.lista_precios.status(), CollectionStatus::Loading);
        assert!(state.selected_transaccion_id.is_none());

        h.listas.resolve(0, Ok(vec![ListaPrecio::default()]));
        h.settle();
        assert_eq!(h.state().lista_precios.status(), CollectionStatus::Ready);

        h.spawn(|c| async move { c.handle_main_view_change("remito").await });
        h.spawn(|c| async move { c.handle_main_view_change("listaPrecio").await });
        assert_eq!(h.listas.requested().len(), 1);
        assert_eq!(h.state().lista_precios.items().len(), 1);

        h.spawn(|c| async move { c.load_lista_precios(true).await });
        assert_eq!(h.listas.requested().len(), 2);
        assert_eq!(h.state().lista_precios.status(), CollectionStatus::Loading);
    }

    #[test]
    fn test_lista_precios_in_flight_is_reused() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move { c.handle_main_view_change("listaPrecio").await });
        h.spawn(|c| async move { c.handle_main_view_change("remito").await });
        h.spawn(|c| async move { c.handle_main_view_change("listaPrecio").await });
        assert_eq!(h.listas.requested().len(), 1);

        h.listas.resolve(0, Ok(vec![ListaPrecio::default()]));
        h.settle();
        let state = h.state();
        assert_eq!(state.lista_precios.status(), CollectionStatus::Ready);
        assert_eq!(state.lista_precios.items().len(), 1);
    }

    #[test]
    fn test_stale_lista_precios_failure_is_dropped() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move { c.handle_main_view_change("listaPrecio").await });
        h.spawn(|c| async move { c.load_lista_precios(true).await });
        assert_eq!(h.listas.requested().len(), 2);

        h.listas.resolve(1, Ok(vec![ListaPrecio::default()]));
        h.settle();
        h.listas.resolve(0, Err(RepositoryError::Status { status: 500 }));
        h.settle();

        let state = h.state();
        assert_eq!(state.lista_precios.status(), CollectionStatus::Ready);
        assert_eq!(state.lista_precios.items().len(), 1);
        assert!(state.banner.is_none());
    }

    #[test]
    fn test_lista_precios_failure_sets_banner() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move { c.handle_main_view_change("listaPrecio").await });
        h.listas.resolve(0, Err(dropped()));
        h.settle();

        let state = h.state();
        assert_eq!(state.lista_precios.status(), CollectionStatus::Error);
        assert_eq!(
            state.lista_precios.error_message(),
            Some(UI_MESSAGES.lista_precios_load_error)
        );
        assert_eq!(
            state.banner.as_ref().map(|b| b.message.as_str()),
            Some(UI_MESSAGES.lista_precios_load_error)
        );
    }

    #[test]
    fn test_empty_selection_clears_view() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.spawn(|c| async move { c.handle_main_view_change("").await });
        assert_eq!(h.state().main_table, MainTable::None);

        h.spawn(|c| async move { c.handle_popstate().await });
        assert_eq!(h.state().main_table, MainTable::None);
        assert_eq!(h.controller.render_model().main_view_value(), "");
    }

    #[test]
    fn test_one_render_per_step() {
        let mut h = Harness::new("/");
        h.init_with(sample_remitos());

        h.renders.set(0);
        h.controller.handle_transaccion_click("38925753");
        assert_eq!(h.renders.get(), 1);

        h.renders.set(0);
        h.spawn(|c| async move { c.handle_producto_click(Some("1672624")).await });
        assert_eq!(h.renders.get(), 1);
        h.productos.resolve(0, Ok(None));
        h.settle();
        assert_eq!(h.renders.get(), 2);
    }
}
