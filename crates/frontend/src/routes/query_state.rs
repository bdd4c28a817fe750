//! URL query state: `remitoVentaId`, `clienteId`, `productoId`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ROUTE_KEYS: [&str; 3] = ["remitoVentaId", "clienteId", "productoId"];

/// Detail route carried in the URL. At most one field is set in practice;
/// none set means "no specific detail".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remito_venta_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producto_id: Option<String>,
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Route {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn remito(remito_venta_id: Option<&str>) -> Self {
        Self {
            remito_venta_id: clean(remito_venta_id),
            ..Self::default()
        }
    }

    pub fn cliente(cliente_id: Option<&str>) -> Self {
        Self {
            cliente_id: clean(cliente_id),
            ..Self::default()
        }
    }

    pub fn producto(producto_id: Option<&str>) -> Self {
        Self {
            producto_id: clean(producto_id),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.remito_venta_id.is_none() && self.cliente_id.is_none() && self.producto_id.is_none()
    }

    fn normalized(self) -> Self {
        Self {
            remito_venta_id: clean(self.remito_venta_id.as_deref()),
            cliente_id: clean(self.cliente_id.as_deref()),
            producto_id: clean(self.producto_id.as_deref()),
        }
    }
}

fn parse_params(search: &str) -> BTreeMap<String, String> {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return BTreeMap::new();
    }
    serde_qs::from_str(query).unwrap_or_else(|e| {
        log::warn!("Unreadable query string {:?}: {}", search, e);
        BTreeMap::new()
    })
}

/// Reads the route from `location.search` (with or without the leading `?`).
/// Blank parameters count as absent.
pub fn read_route(search: &str) -> Route {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return Route::empty();
    }
    match serde_qs::from_str::<Route>(query) {
        Ok(route) => route.normalized(),
        Err(e) => {
            log::warn!("Unreadable route in {:?}: {}", search, e);
            Route::empty()
        }
    }
}

/// Builds the search string for `route`, keeping unrelated parameters
/// (such as `mock`) from `current_search`. Returns `""` when nothing is left.
pub fn write_route(current_search: &str, route: &Route) -> String {
    let mut params = parse_params(current_search);
    for key in ROUTE_KEYS {
        params.remove(key);
    }

    let route = route.clone().normalized();
    let entries = [
        ("remitoVentaId", route.remito_venta_id),
        ("clienteId", route.cliente_id),
        ("productoId", route.producto_id),
    ];
    for (key, value) in entries {
        if let Some(value) = value {
            params.insert(key.to_string(), value);
        }
    }

    if params.is_empty() {
        return String::new();
    }
    match serde_qs::to_string(&params) {
        Ok(query) => format!("?{}", query),
        Err(e) => {
            log::warn!("Could not encode route params {:?}: {}", params, e);
            String::new()
        }
    }
}
