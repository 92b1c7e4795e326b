//! Dry-run rendering of the report table.

use std::io::Write;

use wfstats_core::{ReportRow, ReportTable, HEADERS};

fn cells(row: &ReportRow) -> Vec<String> {
    std::iter::once(row.name.clone())
        .chain(row.numbers().iter().map(|v| format!("{:.2}", v)))
        .collect()
}

/// Aligned table: header, median, then the data rows.
pub fn format_table(table: &ReportTable) -> String {
    let mut grid: Vec<Vec<String>> = vec![HEADERS.iter().map(|h| h.to_string()).collect()];
    grid.push(cells(&table.median));
    grid.extend(table.rows.iter().map(cells));

    let mut widths = vec![0; HEADERS.len()];
    for line in &grid {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in &grid {
        let rendered: Vec<String> = line
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (cell, width))| {
                if col == 0 {
                    format!("{:<width$}", cell, width = width)
                } else {
                    format!("{:>width$}", cell, width = width)
                }
            })
            .collect();
        out.push_str(rendered.join("  ").trim_end());
        out.push('\n');
    }
    out
}

pub fn write_text<W: Write>(out: &mut W, table: &ReportTable) -> std::io::Result<()> {
    out.write_all(format_table(table).as_bytes())?;
    writeln!(out, "{} frames", table.len())
}

pub fn write_json<W: Write>(out: &mut W, table: &ReportTable) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, table)?;
    writeln!(out)?;
    Ok(())
}
