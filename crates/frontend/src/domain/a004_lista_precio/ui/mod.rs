pub mod list;

pub use list::ListaPrecioTable;
