use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use tracing::info;

use wfstats_client::{
    CatalogClient, ClientError, SheetsClient, SheetsConfig, SpreadsheetTarget, TokenProvider,
};
use wfstats_core::{build_table, SheetLayout, CUSTOM_ENTRIES, EXCLUDED_NAMES};

use super::console;
use crate::cli::args::{OutputFormat, RunArgs};
use crate::exit_codes::EXIT_SUCCESS;

/// Everything one run needs, resolved from flags and environment.
#[derive(Debug, Clone)]
pub(crate) struct RunConfig {
    pub api_url: String,
    pub timeout_secs: u64,
    pub credentials: Option<PathBuf>,
    pub scopes: Vec<String>,
    pub target: SpreadsheetTarget,
    pub sheets: SheetsConfig,
    pub dry_run: bool,
    pub format: OutputFormat,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        let target = match args.spreadsheet_id {
            Some(id) => SpreadsheetTarget::Id(id),
            None => SpreadsheetTarget::Name(args.sheet_name),
        };
        Self {
            api_url: args.api_url,
            timeout_secs: args.timeout_secs,
            credentials: args.credentials,
            scopes: vec![args.sheets_scope, args.drive_scope],
            target,
            sheets: SheetsConfig::default()
                .with_sheets_url(args.sheets_url)
                .with_drive_url(args.drive_url)
                .with_timeout_secs(args.timeout_secs),
            dry_run: args.dry_run,
            format: args.format,
        }
    }
}

pub async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let config = RunConfig::from(args);
    let mut stdout = std::io::stdout().lock();
    execute(&config, Local::now().naive_local(), &mut stdout).await
}

/// Fetch, compute, then either print or write. Nothing is written to the
/// spreadsheet unless the whole table was computed.
pub(crate) async fn execute<W: Write>(
    config: &RunConfig,
    updated_at: NaiveDateTime,
    out: &mut W,
) -> anyhow::Result<i32> {
    // Credentials are checked before any network traffic.
    let auth = if config.dry_run {
        None
    } else {
        let path = config.credentials.as_deref().ok_or_else(|| ClientError::Config {
            message: "--credentials (CRED_FILE) is required unless --dry-run".to_string(),
        })?;
        Some(TokenProvider::service_account(path, config.scopes.clone())?)
    };

    let catalog = CatalogClient::new(&config.api_url, config.timeout_secs)?;
    let records = catalog.fetch().await.context("failed to fetch catalog")?;
    let table = build_table(&records, CUSTOM_ENTRIES, EXCLUDED_NAMES);
    info!(fetched = records.len(), rows = table.len(), "report table built");

    let Some(auth) = auth else {
        match config.format {
            OutputFormat::Text => console::write_text(out, &table)?,
            OutputFormat::Json => console::write_json(out, &table)?,
        }
        return Ok(EXIT_SUCCESS);
    };

    let sheets = SheetsClient::new(config.sheets.clone(), auth)?;
    let layout = SheetLayout::build(&table, updated_at);
    let summary = sheets
        .write_layout(&config.target, &layout)
        .await
        .context("failed to write spreadsheet")?;

    info!(
        spreadsheet = %summary.spreadsheet_id,
        rows = summary.rows_written,
        batches = summary.format_batches,
        "report written"
    );
    writeln!(
        out,
        "wrote {} frames to spreadsheet {}",
        table.len(),
        summary.spreadsheet_id
    )?;
    Ok(EXIT_SUCCESS)
}
