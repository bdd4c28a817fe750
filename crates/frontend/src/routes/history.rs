//! Access to the browser history behind a trait, so navigation logic can run
//! without a window.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

pub trait HistoryPort {
    /// Current `location.search`, including the leading `?` when present.
    fn search(&self) -> String;

    fn pathname(&self) -> String;

    fn push(&self, url: &str);

    fn replace(&self, url: &str);

    fn length(&self) -> u32;

    fn back(&self);
}

/// `window.history` / `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl HistoryPort for BrowserHistory {
    fn search(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&self, url: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
                log::warn!("pushState failed: {:?}", e);
            }
        }
    }

    fn replace(&self, url: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(url)) {
                log::warn!("replaceState failed: {:?}", e);
            }
        }
    }

    fn length(&self) -> u32 {
        web_sys::window()
            .and_then(|w| w.history().ok())
            .and_then(|h| h.length().ok())
            .unwrap_or(0)
    }

    fn back(&self) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.back() {
                log::warn!("history.back failed: {:?}", e);
            }
        }
    }
}

/// In-memory history used by tests. `back` only moves the cursor; the test
/// dispatches the popstate itself.
#[cfg(test)]
#[derive(Debug)]
pub struct MemoryHistory {
    entries: std::cell::RefCell<Vec<String>>,
    cursor: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemoryHistory {
    pub fn new(initial_url: &str) -> Self {
        Self {
            entries: std::cell::RefCell::new(vec![initial_url.to_string()]),
            cursor: std::cell::Cell::new(0),
        }
    }

    pub fn current(&self) -> String {
        self.entries.borrow()[self.cursor.get()].clone()
    }
}

#[cfg(test)]
impl HistoryPort for MemoryHistory {
    fn search(&self) -> String {
        let url = self.current();
        url.find('?').map(|i| url[i..].to_string()).unwrap_or_default()
    }

    fn pathname(&self) -> String {
        let url = self.current();
        url.split('?').next().unwrap_or("/").to_string()
    }

    fn push(&self, url: &str) {
        let mut entries = self.entries.borrow_mut();
        entries.truncate(self.cursor.get() + 1);
        entries.push(url.to_string());
        self.cursor.set(entries.len() - 1);
    }

    fn replace(&self, url: &str) {
        self.entries.borrow_mut()[self.cursor.get()] = url.to_string();
    }

    fn length(&self) -> u32 {
        self.entries.borrow().len() as u32
    }

    fn back(&self) {
        let cursor = self.cursor.get();
        if cursor > 0 {
            self.cursor.set(cursor - 1);
        }
    }
}
