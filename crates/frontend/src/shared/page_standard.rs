//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"data_sources--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table or card grid.
pub const PAGE_CAT_LIST: &str = "list";

/// Embedded external resource opened from a card.
pub const PAGE_CAT_VIEWER: &str = "viewer";

/// Developer-only component previews.
pub const PAGE_CAT_DEV: &str = "dev";
