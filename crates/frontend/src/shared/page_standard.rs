//! Section category constants for the main view surface.
//!
//! Every section rendered by the app declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_remito--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a001_remito/` directory.

/// Table of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record shown as a key/value table.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Nested record of a detail (tax rate, fiscal category, ...).
pub const PAGE_CAT_NESTED: &str = "nested";

/// Placeholder shown when no module is selected.
pub const PAGE_CAT_EMPTY: &str = "empty";
