pub mod details;

pub use details::ProductoMainView;
