//! Common types shared by all view models

pub mod aggregate_id;
pub mod payload;
pub mod simple_item;

// Re-exports
pub use aggregate_id::BusinessId;
pub use payload::CollectionPayload;
pub use simple_item::{Provincia, SimpleItem};
