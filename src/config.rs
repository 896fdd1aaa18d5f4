//! Application Constants
//!
//! Fixed values shared by the views and the API client.

/// Where the browser goes when the session is gone or the password changed
pub const LOGIN_PATH: &str = "/";

/// Suffix for every document title
pub const TITLE_SUFFIX: &str = "My Bookmarks";

/// Bookmarks per `/bookmark/get` page
pub const PAGE_SIZE: usize = 30;

/// Synthetic category listing every bookmark
pub const ALL_BOOKMARKS_ID: i64 = -1;
pub const ALL_BOOKMARKS_NAME: &str = "All Bookmarks";

/// Synthetic category the server reports for bookmarks without one
pub const UNCATEGORIZED_ID: i64 = 0;

// Length limits; see `validate::LenUnit` for how each field counts
pub const CATEGORY_MAX_LEN: usize = 15;
pub const BOOKMARK_MAX_LEN: usize = 40;
pub const PASSWORD_MAX_LEN: usize = 20;

/// Most verbose level written to the browser console
pub const LOG_LEVEL: log::Level = log::Level::Info;
