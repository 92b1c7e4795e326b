//! Report rows, the report table and the median summary row.

use serde::Serialize;

use crate::model::{DerivedMetrics, ScaledStats};

/// Column headers, in row order.
pub const HEADERS: [&str; 11] = [
    "Name",
    "Health",
    "Armor",
    "Effective Health",
    "Shields",
    "Energy Cap",
    "Energy At Spawn",
    "Sprint",
    "Max Overshields",
    "EHP w/ Shields",
    "EHP w/ Shields & Overshields",
];

/// Number of numeric columns (every column but `Name`).
pub const NUMERIC_COLUMNS: usize = HEADERS.len() - 1;

pub const MEDIAN_ROW_NAME: &str = "Median";

/// Round to 2 decimal places, ties to even (`1.125` → `1.12`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub health: f64,
    pub armor: f64,
    pub effective_health: f64,
    pub shields: f64,
    pub energy_cap: f64,
    pub energy_at_spawn: f64,
    pub sprint: f64,
    pub max_overshields: f64,
    pub ehp_with_shields: f64,
    pub ehp_with_overshields_and_shields: f64,
}

impl ReportRow {
    /// Build a row; every numeric value is rounded here and only here.
    pub fn new(
        name: impl Into<String>,
        stats: &ScaledStats,
        metrics: &DerivedMetrics,
        energy_at_spawn: f64,
        sprint: f64,
    ) -> Self {
        Self::from_numbers(
            name,
            [
                stats.health,
                stats.armor,
                metrics.effective_health,
                stats.shield,
                stats.power,
                energy_at_spawn,
                sprint,
                metrics.max_overshields,
                metrics.ehp_with_shields,
                metrics.ehp_with_overshields,
            ],
        )
    }

    /// Numeric columns in header order.
    pub fn numbers(&self) -> [f64; NUMERIC_COLUMNS] {
        [
            self.health,
            self.armor,
            self.effective_health,
            self.shields,
            self.energy_cap,
            self.energy_at_spawn,
            self.sprint,
            self.max_overshields,
            self.ehp_with_shields,
            self.ehp_with_overshields_and_shields,
        ]
    }

    pub fn from_numbers(name: impl Into<String>, values: [f64; NUMERIC_COLUMNS]) -> Self {
        let [
            health,
            armor,
            effective_health,
            shields,
            energy_cap,
            energy_at_spawn,
            sprint,
            max_overshields,
            ehp_with_shields,
            ehp_with_overshields_and_shields,
        ] = values.map(round2);
        Self {
            name: name.into(),
            health,
            armor,
            effective_health,
            shields,
            energy_cap,
            energy_at_spawn,
            sprint,
            max_overshields,
            ehp_with_shields,
            ehp_with_overshields_and_shields,
        }
    }
}

/// The finished report: summary row plus data rows sorted by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub median: ReportRow,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    /// Compute the median row, then sort. The median does not depend on order.
    pub fn new(mut rows: Vec<ReportRow>) -> Self {
        let median = median_row(&rows);
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Self { median, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.name.as_str())
    }
}

/// Median of a column. Even counts average the two middle values; empty is 0.
pub fn median(values: &[f64]) -> f64 {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let value = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    round2(value)
}

pub fn median_row(rows: &[ReportRow]) -> ReportRow {
    let columns: Vec<[f64; NUMERIC_COLUMNS]> = rows.iter().map(ReportRow::numbers).collect();
    let mut values = [0.0; NUMERIC_COLUMNS];
    for (idx, slot) in values.iter_mut().enumerate() {
        let column: Vec<f64> = columns.iter().map(|c| c[idx]).collect();
        *slot = median(&column);
    }
    ReportRow::from_numbers(MEDIAN_ROW_NAME, values)
}
