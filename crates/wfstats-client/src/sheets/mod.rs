//! Google Sheets writer.
//!
//! Applies a [`SheetLayout`] to the first worksheet of a spreadsheet:
//! clear, write values, write the info block, format cells in batches,
//! then freeze, filter and rename.

use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use wfstats_core::{CellValue, SheetLayout};

use crate::auth::TokenProvider;
use crate::config::{SheetsConfig, SpreadsheetTarget};
use crate::error::{ClientError, ClientResult};
use crate::http::{endpoint, HttpBackend};

mod requests;

use requests::{
    freeze_rows, name_query, quote_title, rename_sheet, repeat_cell, set_basic_filter, sheet_range,
};

/// First worksheet of a spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    pub spreadsheet_id: String,
    pub sheet_id: i64,
    pub title: String,
}

/// What a layout write touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub spreadsheet_id: String,
    pub sheet_id: i64,
    pub rows_written: usize,
    pub format_batches: usize,
}

#[derive(Debug, Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    sheet_id: i64,
    title: String,
    #[serde(default)]
    index: i64,
}

#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: HttpBackend,
    config: SheetsConfig,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig, token_provider: TokenProvider) -> ClientResult<Self> {
        if !token_provider.is_authenticated() {
            return Err(ClientError::Config {
                message: "spreadsheet access requires credentials".to_string(),
            });
        }
        Ok(Self {
            http: HttpBackend::new(config.timeout_secs, token_provider)?,
            config,
        })
    }

    pub fn config(&self) -> &SheetsConfig {
        &self.config
    }

    /// Spreadsheet id for a target; names resolve to the first Drive match.
    pub async fn resolve(&self, target: &SpreadsheetTarget) -> ClientResult<String> {
        match target {
            SpreadsheetTarget::Id(id) => Ok(id.clone()),
            SpreadsheetTarget::Name(name) => self.find_by_name(name).await,
        }
    }

    pub async fn find_by_name(&self, name: &str) -> ClientResult<String> {
        let mut url = endpoint(&self.config.drive_url, &["files"])?;
        url.query_pairs_mut()
            .append_pair("q", &name_query(name))
            .append_pair("fields", "files(id,name)")
            .append_pair("pageSize", "10");
        debug!(name = %name, "searching spreadsheet by name");

        let list: DriveFileList = self.http.request_json(Method::GET, &url, None).await?;
        list.files
            .into_iter()
            .next()
            .map(|f| f.id)
            .ok_or_else(|| ClientError::NotFound {
                what: format!("spreadsheet named '{}'", name),
            })
    }

    pub async fn first_worksheet(&self, spreadsheet_id: &str) -> ClientResult<Worksheet> {
        let mut url = endpoint(&self.config.sheets_url, &["spreadsheets", spreadsheet_id])?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties(sheetId,title,index)");

        let meta: SpreadsheetMeta = self.http.request_json(Method::GET, &url, None).await?;
        let first = meta
            .sheets
            .into_iter()
            .map(|s| s.properties)
            .min_by_key(|p| p.index)
            .ok_or_else(|| ClientError::NotFound {
                what: format!("worksheet in spreadsheet {}", spreadsheet_id),
            })?;

        Ok(Worksheet {
            spreadsheet_id: spreadsheet_id.to_string(),
            sheet_id: first.sheet_id,
            title: first.title,
        })
    }

    /// Clear every value on the worksheet.
    pub async fn clear(&self, sheet: &Worksheet) -> ClientResult<()> {
        let range = format!("{}:clear", quote_title(&sheet.title));
        let url = endpoint(
            &self.config.sheets_url,
            &["spreadsheets", sheet.spreadsheet_id.as_str(), "values", range.as_str()],
        )?;
        self.http.request(Method::POST, &url, Some(&json!({}))).await?;
        Ok(())
    }

    /// Write `values` with their top-left cell at `anchor` (A1 notation).
    pub async fn update_values(
        &self,
        sheet: &Worksheet,
        anchor: &str,
        values: &[Vec<CellValue>],
    ) -> ClientResult<()> {
        let range = sheet_range(&sheet.title, anchor);
        let mut url = endpoint(
            &self.config.sheets_url,
            &["spreadsheets", sheet.spreadsheet_id.as_str(), "values", range.as_str()],
        )?;
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");

        let body = json!({ "majorDimension": "ROWS", "values": values });
        self.http.request(Method::PUT, &url, Some(&body)).await?;
        Ok(())
    }

    pub async fn batch_update(&self, spreadsheet_id: &str, requests: Vec<Value>) -> ClientResult<()> {
        let target = format!("{}:batchUpdate", spreadsheet_id);
        let url = endpoint(&self.config.sheets_url, &["spreadsheets", target.as_str()])?;
        debug!(requests = requests.len(), "batch update");
        self.http
            .request(Method::POST, &url, Some(&json!({ "requests": requests })))
            .await?;
        Ok(())
    }

    /// Replace the first worksheet's content with `layout`.
    pub async fn write_layout(
        &self,
        target: &SpreadsheetTarget,
        layout: &SheetLayout,
    ) -> ClientResult<WriteSummary> {
        let spreadsheet_id = self.resolve(target).await?;
        let sheet = self.first_worksheet(&spreadsheet_id).await?;
        info!(spreadsheet = %spreadsheet_id, worksheet = %sheet.title, "writing report");

        self.clear(&sheet).await?;
        self.update_values(&sheet, "A1", &layout.values).await?;
        self.update_values(&sheet, &layout.info_anchor.a1(), &layout.info)
            .await?;

        let mut format_batches = 0;
        for batch in layout.format_batches() {
            let requests = batch.iter().map(|f| repeat_cell(sheet.sheet_id, f)).collect();
            self.batch_update(&spreadsheet_id, requests).await?;
            format_batches += 1;
        }
        info!(batches = format_batches, cells = layout.formats.len(), "formatting applied");

        self.batch_update(
            &spreadsheet_id,
            vec![
                freeze_rows(sheet.sheet_id, layout.frozen_rows),
                set_basic_filter(sheet.sheet_id, &layout.filter),
                rename_sheet(sheet.sheet_id, &layout.title),
            ],
        )
        .await?;

        Ok(WriteSummary {
            spreadsheet_id,
            sheet_id: sheet.sheet_id,
            rows_written: layout.values.len(),
            format_batches,
        })
    }
}
