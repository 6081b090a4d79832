//! Application-wide constants for EventCatalog.
//!
//! Centralising magic numbers and configuration defaults here keeps the rest
//! of the codebase clean and makes tuning straightforward.

/// Page size used when a table view is first created.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Page sizes offered in the pager's size selector. The "All" entry is
/// added separately by the UI.
pub const PAGE_SIZE_OPTIONS: &[usize] = &[10, 20, 50, 100];

/// Sort priority of media kinds in the Type column. Kinds not listed here
/// rank at `TYPE_PRIORITY.len() + 1`.
pub const TYPE_PRIORITY: &[&str] = &["pdf", "epub", "excel", "text", "photo", "video"];

/// Display order of attachment kinds in the detail pane. Anything not
/// listed is shown after these.
pub const MEDIA_DISPLAY_ORDER: &[&str] = &["photo", "video", "audio", "pdf", "excel", "word"];

/// Number of attachments shown per media group before "Load more".
pub const MEDIA_GROUP_PREVIEW: usize = 5;

/// Row height in the event table (in logical pixels).
pub const TABLE_ROW_HEIGHT: f32 = 26.0;

/// Size of the channel used to send loader messages to the UI.
pub const CHANNEL_BOUND: usize = 16;

/// Debounce delay for the filter text box (milliseconds).
/// Prevents re-filtering on every keystroke while the user is still typing.
pub const FILTER_DEBOUNCE_MS: u64 = 150;

/// How long an export result message stays in the status bar (seconds).
pub const EXPORT_MESSAGE_SECS: u64 = 4;

/// Maximum number of errors to retain in the error list.
pub const MAX_ERRORS: usize = 200;

/// Maximum characters of a description shown in a table cell.
pub const TABLE_TEXT_MAX_CHARS: usize = 160;

/// Application display name used in titles, dialogs, etc.
pub const APP_NAME: &str = "EventCatalog";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Catalog file used when none is given on the command line.
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";

/// Environment variable holding the editor role (`admin`, `art`, `viewer`).
pub const ENV_ROLE: &str = "EVENTCATALOG_ROLE";

/// Environment variable holding the session token.
pub const ENV_TOKEN: &str = "EVENTCATALOG_TOKEN";

/// Application data subdirectory name for logs.
pub const APP_DATA_DIR: &str = "EventCatalog";

/// Log subdirectory name under the app data directory.
pub const LOG_DIR: &str = "logs";

/// Log file name for persistent error/debug logging.
pub const LOG_FILE_NAME: &str = "eventcatalog.log";

/// Maximum log file size in bytes before rotation (5 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 5 * 1024 * 1024;
