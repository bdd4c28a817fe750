pub mod aggregate;

pub use aggregate::{normalize_lista_precios_payload, ListaPrecio};
