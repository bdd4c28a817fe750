pub mod details;

pub use details::{ClienteDetails, ClienteMainView};
