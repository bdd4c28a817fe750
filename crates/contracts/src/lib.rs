//! Domain view models shared by the remito viewer.
//!
//! Everything here is pure: raw API payloads go in, canonical view models come
//! out. No browser or network dependencies.

pub mod domain;
pub mod shared;
