//! Effective health and overshield metrics.

use crate::model::{DerivedMetrics, ScaledStats};

/// Names whose overshield cap is doubled.
pub const DOUBLE_OVERSHIELD_NAMES: &[&str] = &["Harrow", "Harrow Prime"];

pub const OVERSHIELD_CAP: f64 = 1200.0;
pub const DOUBLE_OVERSHIELD_CAP: f64 = 2400.0;

/// Armor value that halves incoming damage.
pub const ARMOR_CONSTANT: f64 = 300.0;

/// Overshield cap for a frame. Frames without shields cannot hold overshields.
pub fn max_overshields(shield: f64, name: &str) -> f64 {
    if shield == 0.0 {
        0.0
    } else if DOUBLE_OVERSHIELD_NAMES.contains(&name) {
        DOUBLE_OVERSHIELD_CAP
    } else {
        OVERSHIELD_CAP
    }
}

pub fn effective_health(health: f64, armor: f64) -> f64 {
    health * (1.0 + armor / ARMOR_CONSTANT)
}

pub fn derive_metrics(stats: &ScaledStats, name: &str) -> DerivedMetrics {
    let max_overshields = max_overshields(stats.shield, name);
    let effective_health = effective_health(stats.health, stats.armor);
    let ehp_with_shields = effective_health + stats.shield;
    DerivedMetrics {
        effective_health,
        ehp_with_shields,
        ehp_with_overshields: ehp_with_shields + max_overshields,
        max_overshields,
        energy_at_spawn: stats.power * 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::round2;

    fn stats(health: f64, shield: f64, armor: f64, power: f64) -> ScaledStats {
        ScaledStats {
            health,
            shield,
            armor,
            power,
        }
    }

    #[test]
    fn test_effective_health_reference_value() {
        assert_eq!(round2(effective_health(370.0, 290.0)), 727.67);
    }

    #[test]
    fn test_no_shield_means_no_overshield() {
        assert_eq!(max_overshields(0.0, "Harrow"), 0.0);
        assert_eq!(max_overshields(0.0, "Inaros"), 0.0);
    }

    #[test]
    fn test_harrow_variants_get_double_cap() {
        assert_eq!(max_overshields(100.0, "Harrow"), 2400.0);
        assert_eq!(max_overshields(100.0, "Harrow Prime"), 2400.0);
        assert_eq!(max_overshields(100.0, "harrow"), 1200.0);
        assert_eq!(max_overshields(100.0, "Excalibur"), 1200.0);
    }

    #[test]
    fn test_derive_metrics_chain() {
        let m = derive_metrics(&stats(300.0, 300.0, 300.0, 150.0), "Rhino");
        assert_eq!(m.effective_health, 600.0);
        assert_eq!(m.ehp_with_shields, 900.0);
        assert_eq!(m.max_overshields, 1200.0);
        assert_eq!(m.ehp_with_overshields, 2100.0);
        assert_eq!(m.energy_at_spawn, 75.0);
    }

    #[test]
    fn test_derive_metrics_shieldless() {
        let m = derive_metrics(&stats(1000.0, 0.0, 0.0, 100.0), "Inaros");
        assert_eq!(m.max_overshields, 0.0);
        assert_eq!(m.ehp_with_overshields, m.ehp_with_shields);
        assert_eq!(m.ehp_with_shields, 1000.0);
    }
}
