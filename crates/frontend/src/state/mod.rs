//! Application state: the single source of truth for the view.
//!
//! - `mode_machine`: main-table modes and their transition table
//! - `detail`: per-entity fetch slots
//! - `request_tracker`: stale-response suppression
//! - `store`: immutable-replace store with subscribers

pub mod detail;
pub mod mode_machine;
pub mod request_tracker;
pub mod store;

pub use detail::{
    CollectionSlot, CollectionStatus, DetailEntity, DetailKind, DetailSlot, DetailStatus,
};
pub use mode_machine::{
    active_module, is_remito_flow, transition, transition_named, ActiveModule, MainTable,
};
pub use request_tracker::{RequestToken, RequestTracker, RequestTrackers};
pub use store::{AppState, AppStore, Banner, BannerVariant, SubscriptionId};
