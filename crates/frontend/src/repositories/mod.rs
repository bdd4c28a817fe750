//! Data access behind a uniform contract, so the controller does not know
//! whether records come from the live API or from the built-in sample set.

pub mod http;
pub mod mock;

use crate::shared::config::{ApiEndpoints, DataSourceMode};
use async_trait::async_trait;
use contracts::domain::a001_remito::{normalize_remitos_payload, Remito};
use contracts::domain::a002_cliente::{to_cliente_vm, Cliente};
use contracts::domain::a003_producto::{to_producto_vm, Producto};
use contracts::domain::a004_lista_precio::{normalize_lista_precios_payload, ListaPrecio};
use std::rc::Rc;
use thiserror::Error;

pub use http::{HttpDetailRepository, HttpListRepository};
pub use mock::{MockDetailRepository, MockRemitoRepository, StaticListRepository};

/// Repository failures. "Not found" is not an error: `get_by_id` returns
/// `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Status { status: u16 },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::Status { status: 404 })
    }
}

#[async_trait(?Send)]
pub trait ListRepository<T> {
    async fn list(&self) -> Result<Vec<T>, RepositoryError>;
}

#[async_trait(?Send)]
pub trait DetailRepository<T> {
    async fn get_by_id(&self, id: &str) -> Result<Option<T>, RepositoryError>;
}

/// The four repositories the controller works with.
#[derive(Clone)]
pub struct Repositories {
    pub remito: Rc<dyn ListRepository<Remito>>,
    pub lista_precio: Rc<dyn ListRepository<ListaPrecio>>,
    pub cliente: Rc<dyn DetailRepository<Cliente>>,
    pub producto: Rc<dyn DetailRepository<Producto>>,
}

pub fn create_http_repositories(endpoints: &ApiEndpoints) -> Repositories {
    Repositories {
        remito: Rc::new(HttpListRepository::new(
            endpoints.remitos.clone(),
            normalize_remitos_payload,
        )),
        lista_precio: Rc::new(HttpListRepository::new(
            endpoints.lista_precios.clone(),
            normalize_lista_precios_payload,
        )),
        cliente: Rc::new(HttpDetailRepository::new(
            endpoints.clientes.clone(),
            to_cliente_vm,
        )),
        producto: Rc::new(HttpDetailRepository::new(
            endpoints.productos.clone(),
            to_producto_vm,
        )),
    }
}

pub fn create_mock_repositories() -> Repositories {
    Repositories {
        remito: Rc::new(MockRemitoRepository),
        lista_precio: Rc::new(StaticListRepository::<ListaPrecio>::empty()),
        cliente: Rc::new(MockDetailRepository),
        producto: Rc::new(MockDetailRepository),
    }
}

pub fn create_repositories(mode: DataSourceMode, endpoints: &ApiEndpoints) -> Repositories {
    match mode {
        DataSourceMode::Http => create_http_repositories(endpoints),
        DataSourceMode::Mock => create_mock_repositories(),
    }
}
