//! Rank-30 Warframe stat report.
//!
//! This crate holds the pure part of the pipeline:
//!
//! - [`growth`]: per-archetype growth profiles and the stat scaler
//! - [`metrics`]: effective health, overshields, energy at spawn
//! - [`aggregate`]: filtering, deduplication, custom entries, the report table
//! - [`report`]: report rows, rounding and the median row
//! - [`layout`]: cell grid, colouring and sheet properties for a writer
//!
//! Nothing here performs I/O or returns errors.
//!
//! ```
//! use wfstats_core::{build_table, CharacterRecord, CUSTOM_ENTRIES, EXCLUDED_NAMES};
//!
//! let hildryn = CharacterRecord {
//!     unique_name: "/Lotus/Powersuits/IronFrame/IronFrameBaseSuit".into(),
//!     name: "Hildryn".into(),
//!     health: 75.0,
//!     shield: 600.0,
//!     armor: 175.0,
//!     type_tag: "Warframe".into(),
//!     ..Default::default()
//! };
//! let table = build_table(&[hildryn], CUSTOM_ENTRIES, EXCLUDED_NAMES);
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.rows[1].shields, 1100.0);
//! ```

pub mod aggregate;
pub mod growth;
pub mod layout;
pub mod metrics;
pub mod model;
pub mod report;
pub mod roster;

pub use aggregate::{build_custom_row, build_row, build_table};
pub use growth::{profile_for, scale_stats, GrowthProfile, Stat, Step, REPORT_RANK};
pub use layout::{CellFormat, CellRange, CellRef, CellValue, FormattedCell, SheetLayout, Trend};
pub use metrics::{derive_metrics, effective_health, max_overshields};
pub use model::{CharacterRecord, CustomEntry, DerivedMetrics, ScaledStats, WARFRAME_TYPE};
pub use report::{median, round2, ReportRow, ReportTable, HEADERS, MEDIAN_ROW_NAME};
pub use roster::{CUSTOM_ENTRIES, EXCLUDED_NAMES};
