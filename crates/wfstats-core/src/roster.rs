//! Hand-maintained roster adjustments applied on top of the catalog.

use crate::model::CustomEntry;

/// Names dropped from the report entirely.
pub const EXCLUDED_NAMES: &[&str] = &["Voidrig", "Bonewidow", "Helminth"];

/// Frames added when the catalog does not list them.
pub const CUSTOM_ENTRIES: &[CustomEntry] = &[CustomEntry {
    name: "Caliban Prime",
    health: 370.0,
    armor: 290.0,
    listed_shield: 740.0,
    listed_energy: 225.0,
    energy_at_spawn: 100.0,
    sprint: 1.1,
}];
