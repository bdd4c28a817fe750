use super::history::{HistoryMode, HistoryPort};
use super::query_state::{read_route, write_route, Route};
use std::rc::Rc;

/// Two-way binding between the detail route and the URL.
#[derive(Clone)]
pub struct RouteSync {
    history: Rc<dyn HistoryPort>,
}

impl RouteSync {
    pub fn new(history: Rc<dyn HistoryPort>) -> Self {
        Self { history }
    }

    pub fn read(&self) -> Route {
        read_route(&self.history.search())
    }

    /// Writes `route`, clearing the other route parameters. Skipped when the
    /// URL already holds the same parameters, in any order.
    pub fn write(&self, route: &Route, mode: HistoryMode) {
        let current_search = self.history.search();
        let next_search = write_route(&current_search, route);
        let current_normalized = write_route(&current_search, &read_route(&current_search));
        if next_search == current_normalized {
            return;
        }

        let url = format!("{}{}", self.history.pathname(), next_search);
        log::debug!("route -> {} ({:?})", url, mode);
        match mode {
            HistoryMode::Push => self.history.push(&url),
            HistoryMode::Replace => self.history.replace(&url),
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.history.length() > 1
    }

    pub fn back(&self) {
        self.history.back();
    }
}
