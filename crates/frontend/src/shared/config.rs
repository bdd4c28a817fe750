//! Runtime configuration: data-source mode and API endpoints.
//!
//! The data source is resolved once at startup, in priority order:
//! `?mock=` query parameter, `window.__USE_MOCKS__`, `localStorage["USE_MOCKS"]`.
//! Anything else falls back to the live API.

use super::api_utils::api_url;
use std::collections::BTreeMap;
use wasm_bindgen::JsValue;
use web_sys::window;

const MOCK_QUERY_PARAM: &str = "mock";
const MOCK_GLOBAL_FLAG: &str = "__USE_MOCKS__";
const MOCK_STORAGE_KEY: &str = "USE_MOCKS";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DataSourceMode {
    #[default]
    Http,
    Mock,
}

impl DataSourceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSourceMode::Http => "http",
            DataSourceMode::Mock => "mock",
        }
    }
}

/// Pure resolution over the three sources.
///
/// `query` is the raw `mock` parameter, `global` is `window.__USE_MOCKS__`
/// (only `true` counts), `persisted` is the stored `USE_MOCKS` value.
///
/// `mock=0` and `mock=false` are an explicit off switch: they force HTTP even
/// when the global or persisted flag is set.
pub fn resolve_data_source(
    query: Option<&str>,
    global: Option<bool>,
    persisted: Option<&str>,
) -> DataSourceMode {
    match query.map(str::trim) {
        Some("1") | Some("true") => return DataSourceMode::Mock,
        Some("0") | Some("false") => return DataSourceMode::Http,
        _ => {}
    }

    if global == Some(true) {
        return DataSourceMode::Mock;
    }

    if persisted == Some("true") {
        return DataSourceMode::Mock;
    }

    DataSourceMode::Http
}

fn mock_query_param(search: &str) -> Option<String> {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return None;
    }
    serde_qs::from_str::<BTreeMap<String, String>>(query)
        .ok()
        .and_then(|mut params| params.remove(MOCK_QUERY_PARAM))
}

fn mock_global_flag() -> Option<bool> {
    let w = window()?;
    js_sys::Reflect::get(&w, &JsValue::from_str(MOCK_GLOBAL_FLAG))
        .ok()
        .and_then(|value| value.as_bool())
}

fn mock_storage_flag() -> Option<String> {
    match window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => storage.get_item(MOCK_STORAGE_KEY).ok().flatten(),
        Some(Err(e)) => {
            log::warn!("Could not read {} from localStorage: {:?}", MOCK_STORAGE_KEY, e);
            None
        }
        _ => None,
    }
}

/// Resolves the data source from the live browser environment.
pub fn data_source_from_browser() -> DataSourceMode {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    let mode = resolve_data_source(
        mock_query_param(&search).as_deref(),
        mock_global_flag(),
        mock_storage_flag().as_deref(),
    );
    log::info!("Data source: {}", mode.as_str());
    mode
}

pub const REMITOS_PATH: &str = "/API/1.1/remitoVentaBean";
pub const CLIENTES_PATH: &str = "/API/1.1/clienteBean";
pub const PRODUCTOS_PATH: &str = "/API/1.1/ProductoVentaBean";
pub const LISTA_PRECIOS_PATH: &str = "/API/1.1/listaPrecioBean";

/// Collection URLs of the REST backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub remitos: String,
    pub clientes: String,
    pub productos: String,
    pub lista_precios: String,
}

impl ApiEndpoints {
    /// Endpoints relative to `base` (an origin, or `""` for relative URLs).
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            remitos: format!("{}{}", base, REMITOS_PATH),
            clientes: format!("{}{}", base, CLIENTES_PATH),
            productos: format!("{}{}", base, PRODUCTOS_PATH),
            lista_precios: format!("{}{}", base, LISTA_PRECIOS_PATH),
        }
    }

    /// Endpoints on the page origin.
    pub fn from_browser() -> Self {
        Self {
            remitos: api_url(REMITOS_PATH),
            clientes: api_url(CLIENTES_PATH),
            productos: api_url(PRODUCTOS_PATH),
            lista_precios: api_url(LISTA_PRECIOS_PATH),
        }
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::with_base("")
    }
}
