pub mod aggregate;

pub use aggregate::{to_producto_vm, Producto, TasaIva};
