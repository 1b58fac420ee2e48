//! Shared constants for quotebook.

/// Storage key holding the JSON-serialized quote sequence.
pub const QUOTES_KEY: &str = "quotes";

/// Storage key holding the last selected category filter.
pub const LAST_SELECTED_CATEGORY_KEY: &str = "lastSelectedCategory";

/// Selection value meaning "no filter applied".
pub const ALL_CATEGORIES: &str = "all";

/// File name offered for exported quotes.
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// Default interval between remote reconciliation passes.
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 60;

/// Default cap on records taken from a single remote fetch.
pub const DEFAULT_REMOTE_LIMIT: usize = 10;

/// Category assigned to remote records that carry no author id.
pub const SERVER_CATEGORY: &str = "Server";

/// Built-in quotes used when nothing is persisted yet, as `(text, category)`.
pub const SEED_QUOTES: [(&str, &str); 3] = [
    ("The only way to do great work is to love what you do.", "Motivation"),
    ("Life is what happens when you're busy making other plans.", "Life"),
    ("Get busy living or get busy dying.", "Inspiration"),
];
