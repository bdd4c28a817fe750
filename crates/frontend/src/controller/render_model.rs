//! Read-only snapshot handed to the view after every state change.

use crate::state::{
    active_module, ActiveModule, AppState, Banner, CollectionSlot, DetailSlot, MainTable,
};
use contracts::domain::a001_remito::Remito;
use contracts::domain::a002_cliente::Cliente;
use contracts::domain::a003_producto::Producto;
use contracts::domain::a004_lista_precio::ListaPrecio;

/// Everything the view needs to paint one frame. Owns its data so it can
/// live in a reactive signal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderModel {
    pub banner: Option<Banner>,
    pub main_table: MainTable,
    pub active_module: ActiveModule,
    /// "Back" and "show all" affordances.
    pub show_back: bool,
    pub visible_remitos: Vec<Remito>,
    pub selected_remito: Option<Remito>,
    pub cliente_detail: DetailSlot<Cliente>,
    pub producto_detail: DetailSlot<Producto>,
    pub lista_precios: CollectionSlot<ListaPrecio>,
}

impl RenderModel {
    pub fn from_state(state: &AppState) -> Self {
        let active_module = active_module(state.main_table);
        let show_back = active_module == ActiveModule::Remito
            && (state.selected_transaccion_id.is_some()
                || matches!(state.main_table, MainTable::Cliente | MainTable::Producto));

        Self {
            banner: state.banner.clone(),
            main_table: state.main_table,
            active_module,
            show_back,
            visible_remitos: state.visible_remitos().into_iter().cloned().collect(),
            selected_remito: state.selected_remito().cloned(),
            cliente_detail: state.cliente_detail.clone(),
            producto_detail: state.producto_detail.clone(),
            lista_precios: state.lista_precios.clone(),
        }
    }

    /// Value of the main view `<select>`.
    pub fn main_view_value(&self) -> &'static str {
        match self.active_module {
            ActiveModule::None => "",
            ActiveModule::Remito => MainTable::Remito.as_str(),
            ActiveModule::ListaPrecio => MainTable::ListaPrecio.as_str(),
        }
    }
}
