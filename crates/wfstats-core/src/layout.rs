//! Sheet layout: the exact cells, styles and sheet properties of a report.
//!
//! The layout is a plain value. Writers translate it into whatever their
//! backend needs; nothing here touches the network.
//!
//! Grid shape:
//!
//! | Row | Content |
//! |-----|---------|
//! | 1 | Median row |
//! | 2 | Header row (frozen, filter header) |
//! | 3.. | Data rows sorted by name |
//!
//! An info block sits in column `M` starting at row 4.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::report::{ReportRow, ReportTable, HEADERS};

/// Maximum number of cell formats per write request.
pub const FORMAT_BATCH_SIZE: usize = 50;

pub const SHEET_TITLE: &str = "Warframe Overview";

/// Rows frozen at the top: median + header.
pub const FROZEN_ROWS: usize = 2;

/// Deviation from the column median that earns a colour.
pub const TREND_TOLERANCE: f64 = 0.10;

pub const FONT_SIZE: u32 = 16;

pub const INFO_ANCHOR: CellRef = CellRef { row: 3, col: 12 };

/// Rows styled in the info column, one more than the text occupies.
pub const INFO_FORMAT_ROWS: usize = 18;

const INFO_LINES: [&str; 16] = [
    "Last Updated At:",
    "",
    "Effective Health (EHP) Formula:",
    "Health x (1 + Armor ÷ 300)",
    "Shields and Overshields not included",
    "",
    "Additional Info:",
    "We use the Median instead of the",
    "Average because extreme values",
    "(like Inaros with huge Health or",
    "Hildryn with massive Shields)",
    "distort the results. The Median",
    "represents the 'average Warframe'",
    "better.",
    "",
    "Copyright © TheNerdwork",
];

/// Offsets (from [`INFO_ANCHOR`]) of the bold title lines.
const INFO_TITLE_OFFSETS: [usize; 3] = [0, 3, 7];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

pub const BASE_BACKGROUND: Color = Color::rgb(6.0 / 255.0, 15.0 / 255.0, 20.0 / 255.0);
pub const BASE_TEXT: Color = Color::rgb(244.0 / 255.0, 241.0 / 255.0, 208.0 / 255.0);
pub const ABOVE_TEXT: Color = Color::rgb(0.6, 0.9, 0.6);
pub const BELOW_TEXT: Color = Color::rgb(0.95, 0.6, 0.6);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFormat {
    pub foreground_color: Color,
    pub font_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WrapStrategy {
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellFormat {
    pub background_color: Color,
    pub text_format: TextFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_strategy: Option<WrapStrategy>,
}

impl CellFormat {
    pub fn base() -> Self {
        Self {
            background_color: BASE_BACKGROUND,
            text_format: TextFormat {
                foreground_color: BASE_TEXT,
                font_size: FONT_SIZE,
                bold: None,
            },
            wrap_strategy: None,
        }
    }

    pub fn trend(trend: Trend) -> Self {
        let mut format = Self::base();
        format.text_format.foreground_color = match trend {
            Trend::Above => ABOVE_TEXT,
            Trend::Below => BELOW_TEXT,
            Trend::Within => BASE_TEXT,
        };
        format
    }

    pub fn info(bold: bool) -> Self {
        let mut format = Self::base();
        format.text_format.bold = Some(bold);
        format.wrap_strategy = Some(WrapStrategy::Wrap);
        format
    }

    /// Field mask naming exactly the properties this format sets.
    pub fn field_mask(&self) -> String {
        let mut fields = vec!["backgroundColor", "textFormat"];
        if self.wrap_strategy.is_some() {
            fields.push("wrapStrategy");
        }
        format!("userEnteredFormat({})", fields.join(","))
    }
}

/// How a value compares to its column median.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Above,
    Below,
    Within,
}

impl Trend {
    /// Strictly more than 10% above (below) the median is Above (Below).
    pub fn classify(value: f64, median: f64) -> Self {
        let tolerance = median * TREND_TOLERANCE;
        if value > median + tolerance {
            Self::Above
        } else if value < median - tolerance {
            Self::Below
        } else {
            Self::Within
        }
    }
}

/// A cell value as written to the sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Zero-based cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// A1 notation, e.g. `(0, 0)` → `A1`, `(3, 12)` → `M4`.
    pub fn a1(&self) -> String {
        format!("{}{}", col_to_letter(self.col), self.row + 1)
    }
}

/// Zero-based rectangle, end-exclusive on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl CellRange {
    pub fn a1(&self) -> String {
        format!(
            "{}:{}",
            CellRef::new(self.start_row, self.start_col).a1(),
            CellRef::new(self.end_row - 1, self.end_col - 1).a1()
        )
    }
}

/// 0-based column index → `A`, `B`, ..., `Z`, `AA`, `AB`, ...
pub fn col_to_letter(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormattedCell {
    pub cell: CellRef,
    pub format: CellFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Median, header and data rows, starting at `A1`.
    pub values: Vec<Vec<CellValue>>,
    /// Single-column info block starting at [`INFO_ANCHOR`].
    pub info: Vec<Vec<CellValue>>,
    pub info_anchor: CellRef,
    /// Per-cell formats: grid first, then the info column.
    pub formats: Vec<FormattedCell>,
    pub frozen_rows: usize,
    pub filter: CellRange,
    pub title: String,
}

impl SheetLayout {
    pub fn build(table: &ReportTable, updated_at: NaiveDateTime) -> Self {
        let mut values = Vec::with_capacity(table.len() + 2);
        values.push(row_values(&table.median));
        values.push(HEADERS.iter().map(|h| CellValue::from(*h)).collect());
        values.extend(table.rows.iter().map(row_values));

        let medians = table.median.numbers();
        let mut formats = Vec::new();
        for (row_idx, row) in values.iter().enumerate() {
            for (col_idx, value) in row.iter().enumerate() {
                let format = match value.as_number() {
                    Some(v) if row_idx >= FROZEN_ROWS && col_idx > 0 => {
                        CellFormat::trend(Trend::classify(v, medians[col_idx - 1]))
                    }
                    _ => CellFormat::base(),
                };
                formats.push(FormattedCell {
                    cell: CellRef::new(row_idx, col_idx),
                    format,
                });
            }
        }

        for offset in 0..INFO_FORMAT_ROWS {
            formats.push(FormattedCell {
                cell: CellRef::new(INFO_ANCHOR.row + offset, INFO_ANCHOR.col),
                format: CellFormat::info(INFO_TITLE_OFFSETS.contains(&offset)),
            });
        }

        let filter = CellRange {
            start_row: 1,
            end_row: values.len(),
            start_col: 0,
            end_col: HEADERS.len(),
        };

        Self {
            values,
            info: info_block(updated_at),
            info_anchor: INFO_ANCHOR,
            formats,
            frozen_rows: FROZEN_ROWS,
            filter,
            title: SHEET_TITLE.to_string(),
        }
    }

    pub fn format_batches(&self) -> std::slice::Chunks<'_, FormattedCell> {
        self.formats.chunks(FORMAT_BATCH_SIZE)
    }
}

fn row_values(row: &ReportRow) -> Vec<CellValue> {
    std::iter::once(CellValue::Text(row.name.clone()))
        .chain(row.numbers().into_iter().map(CellValue::Number))
        .collect()
}

/// Info column text; the second line is the update timestamp.
pub fn info_block(updated_at: NaiveDateTime) -> Vec<Vec<CellValue>> {
    let stamp = updated_at.format("%Y-%m-%d %H:%M:%S").to_string();
    let mut lines: Vec<Vec<CellValue>> = INFO_LINES.iter().map(|l| vec![CellValue::from(*l)]).collect();
    lines.insert(1, vec![CellValue::Text(stamp)]);
    lines
}
