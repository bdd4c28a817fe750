pub mod items;
pub mod list;

pub use items::ItemTable;
pub use list::RemitoMainView;
