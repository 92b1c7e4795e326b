//! External collaborators of the wfstats report.
//!
//! - [`CatalogClient`]: fetches character records from the catalog API
//! - [`TokenProvider`]: static token or service-account key authentication
//! - [`SheetsClient`]: applies a [`wfstats_core::SheetLayout`] to a Google
//!   spreadsheet through the Sheets v4 and Drive v3 REST APIs
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use wfstats_client::{CatalogClient, SheetsClient, SheetsConfig, SpreadsheetTarget, TokenProvider};
//!
//! # async fn example() -> Result<(), wfstats_client::ClientError> {
//! let records = CatalogClient::new("https://api.warframestat.us/warframes", 30)?
//!     .fetch()
//!     .await?;
//!
//! let auth = TokenProvider::service_account(
//!     Path::new("credentials.json"),
//!     vec![wfstats_client::SCOPE_SPREADSHEETS.to_string()],
//! )?;
//! let sheets = SheetsClient::new(SheetsConfig::default(), auth)?;
//! let id = sheets
//!     .resolve(&SpreadsheetTarget::Name("Warframe Stats".into()))
//!     .await?;
//! println!("{} records, spreadsheet {}", records.len(), id);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
mod http;
pub mod sheets;

pub use auth::{ServiceAccount, ServiceAccountKey, TokenProvider};
pub use catalog::CatalogClient;
pub use config::{
    SheetsConfig, SpreadsheetTarget, DEFAULT_DRIVE_URL, DEFAULT_SHEETS_URL, SCOPE_DRIVE,
    SCOPE_SPREADSHEETS,
};
pub use error::{ClientError, ClientResult};
pub use http::USER_AGENT_VALUE;
pub use sheets::{SheetsClient, Worksheet, WriteSummary};
