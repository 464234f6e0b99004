//! Configuration handling for sheetpair

use std::path::PathBuf;

/// Default collector endpoint for reports
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/challenge";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a run
#[derive(Debug, Clone)]
pub struct Config {
    /// First source document (left operand of every paired operation)
    pub first_file: PathBuf,
    /// Second source document (right operand)
    pub second_file: PathBuf,
    /// URL the report is POSTed to
    pub endpoint: String,
    /// Identifier sent as `id` in the report
    pub id: String,
    /// For Excel files: which sheet to read
    pub sheet_name: Option<String>,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Print the payload instead of posting it
    pub dry_run: bool,
    /// Pretty-print the payload in dry-run mode
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_file: PathBuf::new(),
            second_file: PathBuf::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            id: String::new(),
            sheet_name: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            dry_run: false,
            pretty: false,
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(first_file: PathBuf, second_file: PathBuf) -> Self {
        Self {
            first_file,
            second_file,
            ..Default::default()
        }
    }

    /// Set the collector endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the report identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set Excel sheet name
    pub fn with_sheet_name(mut self, name: String) -> Self {
        self.sheet_name = Some(name);
        self
    }

    /// Set HTTP timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Enable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enable pretty JSON output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
