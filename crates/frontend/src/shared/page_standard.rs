//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_subscriber--list"`) and `data-page-category` with one of the
//! constants below, so a DOM id copied from the inspector leads straight to
//! the `domain/a001_subscriber/` directory.

/// List of records with row actions and modals.
pub const PAGE_CAT_LIST: &str = "list";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";
