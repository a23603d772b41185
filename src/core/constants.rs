/// Application-wide constants to avoid magic values throughout the codebase.
/// Output format constants
pub mod output_formats {
    /// Plain text report grouped by status line
    pub const TEXT: &str = "text";
    /// JSON report for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// URL scheme prefixes used when expanding input lines
pub mod schemes {
    pub const HTTP: &str = "http://";
    pub const HTTPS: &str = "https://";
}

/// Timeout constants
pub mod timeouts {
    /// Default per-probe timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Largest timeout accepted from a config file (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
    /// Timeouts above this trigger a CLI warning
    pub const WARN_TIMEOUT_SECONDS: u64 = 3600;
}

/// Concurrency limits for bounded dispatch
pub mod concurrency {
    /// Largest accepted value for `--concurrency`
    pub const MAX_CONCURRENCY: usize = 10_000;
}

/// Report layout constants
pub mod report {
    /// Prefix of every status header line in the text report
    pub const STATUS_HEADER_PREFIX: &str = "Status Code: ";
}

/// Configuration file discovery
pub mod config_files {
    /// File name searched for in the working directory and its parents
    pub const FILE_NAME: &str = ".statuscheck.toml";
    /// How many parent directories to search
    pub const PARENT_SEARCH_DEPTH: usize = 3;
}
