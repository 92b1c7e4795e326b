//! Builds the report table from catalog records and custom entries.

use std::collections::HashSet;

use crate::growth::{scale_stats, REPORT_RANK};
use crate::metrics::{derive_metrics, max_overshields};
use crate::model::{CharacterRecord, CustomEntry};
use crate::report::{ReportRow, ReportTable};

pub fn build_row(record: &CharacterRecord) -> ReportRow {
    let stats = scale_stats(record, REPORT_RANK);
    let metrics = derive_metrics(&stats, &record.name);
    ReportRow::new(
        record.name.as_str(),
        &stats,
        &metrics,
        metrics.energy_at_spawn,
        record.sprint_speed,
    )
}

/// Custom entries keep their own energy at spawn and sprint. The overshield
/// cap follows the listed shield, not the scaled one.
pub fn build_custom_row(entry: &CustomEntry) -> ReportRow {
    let record = entry.as_record();
    let stats = scale_stats(&record, REPORT_RANK);
    let mut metrics = derive_metrics(&stats, entry.name);
    metrics.max_overshields = max_overshields(entry.listed_shield, entry.name);
    metrics.ehp_with_overshields = metrics.ehp_with_shields + metrics.max_overshields;
    ReportRow::new(entry.name, &stats, &metrics, entry.energy_at_spawn, entry.sprint)
}

/// Filter, deduplicate and compute every row, then summarise.
///
/// Only [`crate::model::WARFRAME_TYPE`] records are considered. The first
/// occurrence of a name wins; excluded names are dropped from both sources.
pub fn build_table(
    fetched: &[CharacterRecord],
    custom: &[CustomEntry],
    excluded: &[&str],
) -> ReportTable {
    let mut seen: HashSet<&str> = excluded.iter().copied().collect();
    let mut rows = Vec::new();

    for record in fetched.iter().filter(|r| r.is_warframe()) {
        if !seen.insert(record.name.as_str()) {
            continue;
        }
        rows.push(build_row(record));
    }

    for entry in custom {
        if !seen.insert(entry.name) {
            continue;
        }
        rows.push(build_custom_row(entry));
    }

    ReportTable::new(rows)
}
