pub mod aggregate;

pub use aggregate::{to_cliente_vm, Cliente};
