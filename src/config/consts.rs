// src/config/consts.rs

// Net config
pub const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
pub const PEP_URL: &str = "https://peps.python.org/";
pub const WHATS_NEW_PATH: &str = "whatsnew/";
pub const DOWNLOADS_PATH: &str = "download.html";
pub const USER_AGENT: &str = concat!("pydocs_scrape/", env!("CARGO_PKG_VERSION"));

// Local cache
pub const STORE_DIR: &str = ".store";
pub const HTTP_CACHE_SUBDIR: &str = "http_cache";

// Output
pub const DOWNLOADS_DIR: &str = "downloads";
pub const RESULTS_DIR: &str = "results";
pub const RESULTS_DT_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

// Logging
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "parser.log";
pub const LOG_MAX_BYTES: u64 = 1_000_000;
pub const LOG_BACKUPS: usize = 5;
pub const LOG_DT_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

// PEP index abbreviation code -> statuses a detail page may legitimately show.
// The empty code is what a one-letter abbreviation (type only, no status) maps to.
pub const EXPECTED_STATUS: &[(&str, &[&str])] = &[
    ("A", &["Active", "Accepted"]),
    ("D", &["Deferred"]),
    ("F", &["Final"]),
    ("P", &["Provisional"]),
    ("R", &["Rejected"]),
    ("S", &["Superseded"]),
    ("W", &["Withdrawn"]),
    ("", &["Draft", "Active"]),
];
