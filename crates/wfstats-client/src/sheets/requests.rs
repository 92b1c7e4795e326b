//! `spreadsheets.batchUpdate` request bodies built from a layout.
//!
//! Pure helpers: no HTTP.

use serde_json::{json, Value};

use wfstats_core::{CellRange, FormattedCell};

pub(crate) fn grid_range(sheet_id: i64, range: &CellRange) -> Value {
    json!({
        "sheetId": sheet_id,
        "startRowIndex": range.start_row,
        "endRowIndex": range.end_row,
        "startColumnIndex": range.start_col,
        "endColumnIndex": range.end_col,
    })
}

pub(crate) fn repeat_cell(sheet_id: i64, formatted: &FormattedCell) -> Value {
    let range = CellRange {
        start_row: formatted.cell.row,
        end_row: formatted.cell.row + 1,
        start_col: formatted.cell.col,
        end_col: formatted.cell.col + 1,
    };
    json!({
        "repeatCell": {
            "range": grid_range(sheet_id, &range),
            "cell": { "userEnteredFormat": formatted.format },
            "fields": formatted.format.field_mask(),
        }
    })
}

pub(crate) fn freeze_rows(sheet_id: i64, rows: usize) -> Value {
    json!({
        "updateSheetProperties": {
            "properties": {
                "sheetId": sheet_id,
                "gridProperties": { "frozenRowCount": rows },
            },
            "fields": "gridProperties.frozenRowCount",
        }
    })
}

pub(crate) fn set_basic_filter(sheet_id: i64, range: &CellRange) -> Value {
    json!({
        "setBasicFilter": {
            "filter": { "range": grid_range(sheet_id, range) }
        }
    })
}

pub(crate) fn rename_sheet(sheet_id: i64, title: &str) -> Value {
    json!({
        "updateSheetProperties": {
            "properties": { "sheetId": sheet_id, "title": title },
            "fields": "title",
        }
    })
}

/// Worksheet title as an A1 range covering the whole sheet.
pub(crate) fn quote_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// A1 range on a named worksheet, e.g. `'Sheet1'!A1`.
pub(crate) fn sheet_range(title: &str, a1: &str) -> String {
    format!("{}!{}", quote_title(title), a1)
}

/// Drive query matching a spreadsheet by exact name.
pub(crate) fn name_query(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!(
        "name = '{}' and mimeType = 'application/vnd.google-apps.spreadsheet' and trashed = false",
        escaped
    )
}
