//! Per-entity request counters.
//!
//! A response may touch state only if the token captured when its request
//! started is still the tracker's live value. The network call itself is
//! never aborted.

use super::detail::DetailKind;
use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    current: Cell<u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request. Call exactly once per fetch.
    pub fn next(&self) -> RequestToken {
        let value = self.current.get() + 1;
        self.current.set(value);
        RequestToken(value)
    }

    /// Supersedes every in-flight request without starting a new one.
    pub fn invalidate(&self) {
        self.current.set(self.current.get() + 1);
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.current.get()
    }
}

/// One independent tracker per detail kind, plus one for the price lists.
#[derive(Debug, Default)]
pub struct RequestTrackers {
    pub cliente: RequestTracker,
    pub producto: RequestTracker,
    pub lista_precios: RequestTracker,
}

impl RequestTrackers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_kind(&self, kind: DetailKind) -> &RequestTracker {
        match kind {
            DetailKind::Cliente => &self.cliente,
            DetailKind::Producto => &self.producto,
        }
    }

    /// Detail trackers only. A price-list response stays useful after the
    /// user navigates away, since the list is cached.
    pub fn invalidate_all(&self) {
        self.cliente.invalidate();
        self.producto.invalidate();
    }
}
