//! Input records and intermediate stat types.

use serde::{Deserialize, Deserializer, Serialize};

/// Type tag carried by playable frames in the catalog.
pub const WARFRAME_TYPE: &str = "Warframe";

/// A character record as returned by the catalog API.
///
/// Absent or `null` fields read as zero / empty, so a sparse record still
/// scales through the default growth profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    /// Internal identifier (e.g. `/Lotus/Powersuits/IronFrame/IronFrameBaseSuit`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub unique_name: String,

    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub health: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub shield: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub armor: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub power: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub sprint_speed: f64,

    /// Category tag; only [`WARFRAME_TYPE`] records are reported.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub type_tag: String,
}

impl CharacterRecord {
    pub fn is_warframe(&self) -> bool {
        self.type_tag == WARFRAME_TYPE
    }
}

/// A manually maintained entry that the catalog does not (yet) carry.
///
/// Custom entries have no identifier and always scale with the default
/// profile. The scaler starts them from zero shield and zero power: the
/// listed shield only decides whether the frame can hold overshields, and
/// the listed energy is shown nowhere. Energy at spawn and sprint are
/// taken as given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomEntry {
    pub name: &'static str,
    pub health: f64,
    pub armor: f64,
    pub listed_shield: f64,
    pub listed_energy: f64,
    pub energy_at_spawn: f64,
    pub sprint: f64,
}

impl CustomEntry {
    /// Scaler input: no identifier, no base shield, no base power.
    pub fn as_record(&self) -> CharacterRecord {
        CharacterRecord {
            unique_name: String::new(),
            name: self.name.to_string(),
            health: self.health,
            shield: 0.0,
            armor: self.armor,
            power: 0.0,
            sprint_speed: self.sprint,
            type_tag: WARFRAME_TYPE.to_string(),
        }
    }
}

/// Stats after applying a growth profile at a given rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScaledStats {
    pub health: f64,
    pub shield: f64,
    pub armor: f64,
    pub power: f64,
}

/// Combat metrics derived from [`ScaledStats`]. Unrounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub effective_health: f64,
    pub ehp_with_shields: f64,
    pub ehp_with_overshields: f64,
    pub max_overshields: f64,
    pub energy_at_spawn: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
