pub mod api_utils;
pub mod config;
pub mod messages;
pub mod page_frame;
pub mod page_standard;
pub mod table;
