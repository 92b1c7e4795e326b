//! Endpoint configuration for the spreadsheet client.

pub const DEFAULT_SHEETS_URL: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_DRIVE_URL: &str = "https://www.googleapis.com/drive/v3";

pub const SCOPE_SPREADSHEETS: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const SCOPE_DRIVE: &str = "https://www.googleapis.com/auth/drive";

fn default_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetsConfig {
    /// Sheets API base URL.
    pub sheets_url: String,

    /// Drive API base URL, used to find a spreadsheet by name.
    pub drive_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            sheets_url: DEFAULT_SHEETS_URL.to_string(),
            drive_url: DEFAULT_DRIVE_URL.to_string(),
            timeout_secs: default_timeout(),
        }
    }
}

impl SheetsConfig {
    /// Set the Sheets API base URL.
    pub fn with_sheets_url(mut self, url: impl Into<String>) -> Self {
        self.sheets_url = url.into();
        self
    }

    /// Set the Drive API base URL.
    pub fn with_drive_url(mut self, url: impl Into<String>) -> Self {
        self.drive_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Which spreadsheet to write into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpreadsheetTarget {
    Id(String),
    /// Exact name, resolved through a Drive search.
    Name(String),
}
