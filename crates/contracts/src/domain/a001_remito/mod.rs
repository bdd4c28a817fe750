pub mod aggregate;
pub mod fallback;
pub mod mapper;

pub use aggregate::{Item, ProductoRef, Remito};
pub use fallback::fallback_remitos;
pub use mapper::{normalize_remitos_payload, sort_remitos_by_fecha_desc, to_remito_vm};
