pub mod a001_remito;
pub mod a002_cliente;
pub mod a003_producto;
pub mod a004_lista_precio;
pub mod common;
