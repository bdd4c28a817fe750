pub mod history;
pub mod query_state;
pub mod route_sync;
pub mod routes;

pub use history::{BrowserHistory, HistoryMode, HistoryPort};
pub use query_state::{read_route, write_route, Route};
pub use route_sync::RouteSync;
