//! Application store.
//!
//! Every mutation clones the current [`AppState`], edits the copy and swaps it
//! in whole, so a reader holding an `Rc<AppState>` always sees a complete
//! version. Subscribers are notified after each mutation, or once at the end
//! of a [`AppStore::batch`].

use super::detail::{CollectionSlot, DetailEntity, DetailSlot};
use super::mode_machine::{transition, MainTable};
use contracts::domain::a001_remito::Remito;
use contracts::domain::a002_cliente::Cliente;
use contracts::domain::a003_producto::Producto;
use contracts::domain::a004_lista_precio::ListaPrecio;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerVariant {
    Info,
    #[default]
    Warning,
    Danger,
}

impl BannerVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerVariant::Info => "info",
            BannerVariant::Warning => "warning",
            BannerVariant::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub message: String,
    pub variant: BannerVariant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Sorted newest first; replaced wholesale on every load.
    pub remitos: Rc<[Remito]>,
    pub main_table: MainTable,
    pub selected_transaccion_id: Option<String>,
    pub cliente_detail: DetailSlot<Cliente>,
    pub producto_detail: DetailSlot<Producto>,
    pub lista_precios: CollectionSlot<ListaPrecio>,
    pub banner: Option<Banner>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            remitos: Rc::from(Vec::new()),
            main_table: MainTable::default(),
            selected_transaccion_id: None,
            cliente_detail: DetailSlot::idle(),
            producto_detail: DetailSlot::idle(),
            lista_precios: CollectionSlot::idle(),
            banner: None,
        }
    }
}

impl AppState {
    /// Full list, or only the selected transaction when there is one.
    pub fn visible_remitos(&self) -> Vec<&Remito> {
        match self.selected_transaccion_id.as_deref() {
            None => self.remitos.iter().collect(),
            Some(selected) => self
                .remitos
                .iter()
                .filter(|remito| remito.has_transaccion(selected))
                .collect(),
        }
    }

    pub fn selected_remito(&self) -> Option<&Remito> {
        let selected = self.selected_transaccion_id.as_deref()?;
        self.remitos
            .iter()
            .find(|remito| remito.has_transaccion(selected))
    }

    pub fn detail<E: DetailEntity>(&self) -> &DetailSlot<E> {
        E::slot(self)
    }
}

fn normalize_id(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

pub type SubscriptionId = usize;

type Subscriber = Rc<dyn Fn(&AppState)>;

#[derive(Default)]
pub struct AppStore {
    state: RefCell<Rc<AppState>>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<SubscriptionId>,
    batch_depth: Cell<u32>,
    pending_notify: Cell<bool>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Rc<AppState> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self, subscriber: impl Fn(&AppState) + 'static) -> SubscriptionId {
        let id = self.next_subscription.get();
        self.next_subscription.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(subscriber)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .borrow_mut()
            .retain(|(subscription, _)| *subscription != id);
    }

    /// Runs several mutations and notifies subscribers once at the end.
    pub fn batch<R>(&self, mutations: impl FnOnce(&Self) -> R) -> R {
        self.batch_depth.set(self.batch_depth.get() + 1);
        let result = mutations(self);
        let depth = self.batch_depth.get() - 1;
        self.batch_depth.set(depth);
        if depth == 0 && self.pending_notify.replace(false) {
            self.notify();
        }
        result
    }

    fn update(&self, mutate: impl FnOnce(&mut AppState)) {
        let mut next = AppState::clone(&self.state.borrow());
        mutate(&mut next);
        *self.state.borrow_mut() = Rc::new(next);

        if self.batch_depth.get() > 0 {
            self.pending_notify.set(true);
        } else {
            self.notify();
        }
    }

    fn notify(&self) {
        let state = self.state();
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| subscriber.clone())
            .collect();
        for subscriber in subscribers {
            subscriber(&state);
        }
    }

    // ------------------------------------------------------------------
    // Remitos and banner
    // ------------------------------------------------------------------

    pub fn set_remitos(&self, remitos: Vec<Remito>) {
        self.update(|state| state.remitos = Rc::from(remitos));
    }

    pub fn set_banner(&self, message: impl Into<String>, variant: BannerVariant) {
        let banner = Banner {
            message: message.into(),
            variant,
        };
        self.update(|state| state.banner = Some(banner));
    }

    pub fn clear_banner(&self) {
        self.update(|state| state.banner = None);
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Drops the selected transaction; both detail slots go back to idle.
    pub fn clear_selection(&self) {
        self.update(|state| {
            state.selected_transaccion_id = None;
            state.cliente_detail = DetailSlot::idle();
            state.producto_detail = DetailSlot::idle();
        });
    }

    /// Blank ids clear the selection. Both detail slots go back to idle.
    pub fn select_transaccion(&self, transaccion_id: &str) {
        let selected = normalize_id(Some(transaccion_id));
        self.update(|state| {
            state.selected_transaccion_id = selected;
            state.cliente_detail = DetailSlot::idle();
            state.producto_detail = DetailSlot::idle();
        });
    }

    // ------------------------------------------------------------------
    // Main table
    // ------------------------------------------------------------------

    fn show_main_table(&self, requested: MainTable) {
        self.update(|state| state.main_table = transition(state.main_table, requested));
    }

    pub fn show_remito_as_main_table(&self) {
        self.show_main_table(MainTable::Remito);
    }

    pub fn show_cliente_as_main_table(&self) {
        self.show_main_table(MainTable::Cliente);
    }

    pub fn show_producto_as_main_table(&self) {
        self.show_main_table(MainTable::Producto);
    }

    pub fn show_lista_precio_as_main_table(&self) {
        self.show_main_table(MainTable::ListaPrecio);
    }

    pub fn show_empty_main_table(&self) {
        self.show_main_table(MainTable::None);
    }

    // ------------------------------------------------------------------
    // Detail slots
    // ------------------------------------------------------------------

    pub fn set_detail_loading<E: DetailEntity>(&self, entity_id: &str) {
        let slot = DetailSlot::loading(entity_id.trim());
        self.update(|state| *E::slot_mut(state) = slot);
    }

    pub fn set_detail_ready<E: DetailEntity>(&self, entity_id: &str, data: E) {
        let slot = DetailSlot::ready(entity_id.trim(), data);
        self.update(|state| *E::slot_mut(state) = slot);
    }

    pub fn set_detail_not_found<E: DetailEntity>(&self, entity_id: &str) {
        let slot = DetailSlot::not_found(entity_id.trim());
        self.update(|state| *E::slot_mut(state) = slot);
    }

    pub fn set_detail_error<E: DetailEntity>(&self, entity_id: Option<&str>, message: &str) {
        let slot = DetailSlot::error(normalize_id(entity_id), message);
        self.update(|state| *E::slot_mut(state) = slot);
    }

    pub fn reset_detail<E: DetailEntity>(&self) {
        self.update(|state| *E::slot_mut(state) = DetailSlot::idle());
    }

    // ------------------------------------------------------------------
    // Price lists
    // ------------------------------------------------------------------

    pub fn set_lista_precios_loading(&self) {
        self.update(|state| state.lista_precios = CollectionSlot::loading());
    }

    pub fn set_lista_precios_ready(&self, listas: Vec<ListaPrecio>) {
        self.update(|state| state.lista_precios = CollectionSlot::ready(listas));
    }

    pub fn set_lista_precios_error(&self, message: &str) {
        self.update(|state| state.lista_precios = CollectionSlot::error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DetailStatus;
    use contracts::domain::a001_remito::fallback_remitos;
    use contracts::domain::common::BusinessId;

    fn store_with_remitos() -> AppStore {
        let store = AppStore::new();
        let mut remitos = fallback_remitos();
        let mut other = remitos[0].clone();
        other.transaccion_id = Some(BusinessId::from_i64(1));
        remitos.push(other);
        store.set_remitos(remitos);
        store
    }

    #[test]
    fn test_initial_state() {
        let state = AppStore::new().state();
        assert!(state.remitos.is_empty());
        assert_eq!(state.main_table, MainTable::Remito);
        assert!(state.cliente_detail.is_idle());
        assert!(state.producto_detail.is_idle());
        assert!(state.banner.is_none());
    }

    #[test]
    fn test_visible_remitos_follow_selection() {
        let store = store_with_remitos();
        assert_eq!(store.state().visible_remitos().len(), 2);

        store.select_transaccion("38925753");
        let state = store.state();
        let visible = state.visible_remitos();
        assert_eq!(visible.len(), 1);
        assert!(visible[0].has_transaccion("38925753"));
        assert!(state.selected_remito().is_some());

        store.select_transaccion("  ");
        assert_eq!(store.state().selected_transaccion_id, None);
        assert_eq!(store.state().visible_remitos().len(), 2);
    }

    #[test]
    fn test_selection_resets_details() {
        let store = AppStore::new();
        store.set_detail_loading::<Cliente>("5");
        store.set_detail_loading::<Producto>("6");
        store.select_transaccion("1");
        assert!(store.state().cliente_detail.is_idle());
        assert!(store.state().producto_detail.is_idle());
    }

    #[test]
    fn test_mutation_replaces_state() {
        let store = AppStore::new();
        let before = store.state();
        store.set_banner("aviso", BannerVariant::Warning);
        let after = store.state();
        assert!(before.banner.is_none());
        assert_eq!(after.banner.as_ref().unwrap().message, "aviso");
        assert!(!Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_subscribers_notified_per_mutation() {
        let store = AppStore::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.clear_banner();
        store.show_empty_main_table();
        assert_eq!(calls.get(), 2);

        store.unsubscribe(id);
        store.clear_banner();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_batch_notifies_once_with_final_state() {
        let store = AppStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |state| sink.borrow_mut().push(state.main_table));

        store.batch(|store| {
            store.clear_selection();
            store.show_producto_as_main_table();
            store.set_detail_loading::<Producto>("42");
        });

        assert_eq!(*seen.borrow(), vec![MainTable::Producto]);
        assert_eq!(
            store.state().producto_detail.status(),
            DetailStatus::Loading
        );
    }

    #[test]
    fn test_nested_batch_notifies_at_outermost() {
        let store = AppStore::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        store.subscribe(move |_| counter.set(counter.get() + 1));

        store.batch(|outer| {
            outer.clear_banner();
            outer.batch(|inner| inner.show_empty_main_table());
        });
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_detail_error_without_id() {
        let store = AppStore::new();
        store.set_detail_error::<Cliente>(Some(" "), "No se encontro");
        let state = store.state();
        assert_eq!(state.cliente_detail.status(), DetailStatus::Error);
        assert_eq!(state.cliente_detail.entity_id(), None);
    }
}
