use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use wfstats_client::{DEFAULT_DRIVE_URL, DEFAULT_SHEETS_URL, SCOPE_DRIVE, SCOPE_SPREADSHEETS};

#[derive(Parser, Debug)]
#[command(
    name = "wfstats",
    version,
    about = "Rank-30 Warframe stat report, written to a Google spreadsheet"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the catalog, compute the report and write it
    Run(RunArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Catalog endpoint returning a JSON array of character records
    #[arg(long, env = "API_URL")]
    pub api_url: String,

    /// Service-account key file
    #[arg(long, env = "CRED_FILE", required_unless_present = "dry_run")]
    pub credentials: Option<PathBuf>,

    #[arg(long, env = "SCOPE_SHEET_URL", default_value = SCOPE_SPREADSHEETS)]
    pub sheets_scope: String,

    #[arg(long, env = "SCOPE_DRIVE_URL", default_value = SCOPE_DRIVE)]
    pub drive_scope: String,

    /// Spreadsheet looked up by exact name when no id is given
    #[arg(long, env = "SHEET_NAME", default_value = "Warframe Stats")]
    pub sheet_name: String,

    #[arg(long, env = "SPREADSHEET_ID")]
    pub spreadsheet_id: Option<String>,

    /// Per-request timeout
    #[arg(long, env = "WFSTATS_TIMEOUT", default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long, env = "WFSTATS_SHEETS_URL", default_value = DEFAULT_SHEETS_URL, hide = true)]
    pub sheets_url: String,

    #[arg(long, env = "WFSTATS_DRIVE_URL", default_value = DEFAULT_DRIVE_URL, hide = true)]
    pub drive_url: String,

    /// Print the table instead of writing the spreadsheet
    #[arg(long)]
    pub dry_run: bool,

    /// Dry-run output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
