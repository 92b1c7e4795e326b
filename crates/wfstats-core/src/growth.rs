//! Growth profiles: how base stats scale with rank.
//!
//! Every frame gains stats in integer steps as it levels. The step for one
//! stat is `floor((rank + offset) / divisor) * multiplier`; a profile is the
//! list of steps for one archetype. Most frames share the default profile,
//! a handful of identifiers have their own.

use crate::model::{CharacterRecord, ScaledStats};

/// Rank the report is computed for.
pub const REPORT_RANK: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Health,
    Shield,
    Armor,
    Power,
}

/// One integer step function applied to a single stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub stat: Stat,
    pub offset: u32,
    pub divisor: u32,
    pub multiplier: u32,
}

impl Step {
    const fn new(stat: Stat, offset: u32, divisor: u32, multiplier: u32) -> Self {
        Self {
            stat,
            offset,
            divisor,
            multiplier,
        }
    }

    /// Amount this step adds at `rank`.
    pub fn gain(&self, rank: u32) -> u32 {
        (rank + self.offset) / self.divisor * self.multiplier
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthProfile {
    pub name: &'static str,
    pub steps: &'static [Step],
}

impl GrowthProfile {
    pub fn apply(&self, record: &CharacterRecord, rank: u32) -> ScaledStats {
        let mut stats = ScaledStats {
            health: record.health,
            shield: record.shield,
            armor: record.armor,
            power: record.power,
        };
        for step in self.steps {
            let gain = f64::from(step.gain(rank));
            match step.stat {
                Stat::Health => stats.health += gain,
                Stat::Shield => stats.shield += gain,
                Stat::Armor => stats.armor += gain,
                Stat::Power => stats.power += gain,
            }
        }
        stats
    }
}

use Stat::{Armor, Health, Power, Shield};

pub const DEFAULT_PROFILE: GrowthProfile = GrowthProfile {
    name: "default",
    steps: &[
        Step::new(Health, 2, 3, 10),
        Step::new(Shield, 1, 3, 10),
        Step::new(Power, 0, 3, 5),
    ],
};

const INAROS_GRENDEL: GrowthProfile = GrowthProfile {
    name: "inaros-grendel",
    steps: &[
        Step::new(Health, 2, 3, 10),
        Step::new(Health, 1, 3, 10),
        Step::new(Power, 0, 3, 5),
    ],
};

const NIDUS: GrowthProfile = GrowthProfile {
    name: "nidus",
    steps: &[
        Step::new(Health, 2, 3, 10),
        Step::new(Armor, 4, 6, 20),
        Step::new(Power, 0, 6, 10),
    ],
};

const KULLERVO: GrowthProfile = GrowthProfile {
    name: "kullervo",
    steps: &[
        Step::new(Health, 2, 3, 20),
        Step::new(Armor, 1, 3, 10),
        Step::new(Power, 0, 3, 5),
    ],
};

const HILDRYN: GrowthProfile = GrowthProfile {
    name: "hildryn",
    steps: &[
        Step::new(Health, 2, 3, 10),
        Step::new(Shield, 1, 3, 25),
        Step::new(Shield, 0, 3, 25),
    ],
};

const XAKU: GrowthProfile = GrowthProfile {
    name: "xaku",
    steps: &[
        Step::new(Health, 2, 3, 9),
        Step::new(Shield, 1, 3, 9),
        Step::new(Power, 0, 3, 7),
    ],
};

const LAVOS: GrowthProfile = GrowthProfile {
    name: "lavos",
    steps: &[
        Step::new(Health, 2, 3, 20),
        Step::new(Shield, 1, 3, 10),
        Step::new(Armor, 0, 3, 10),
    ],
};

const VALKYR: GrowthProfile = GrowthProfile {
    name: "valkyr",
    steps: &[
        Step::new(Health, 2, 3, 10),
        Step::new(Shield, 1, 3, 5),
        Step::new(Power, 0, 3, 5),
    ],
};

const HIGH_ENERGY: GrowthProfile = GrowthProfile {
    name: "high-energy",
    steps: &[
        Step::new(Health, 2, 3, 10),
        Step::new(Shield, 1, 3, 10),
        Step::new(Power, 0, 3, 10),
    ],
};

/// Identifier → profile. Identifiers appear at most once.
pub const PROFILE_TABLE: &[(&str, &GrowthProfile)] = &[
    ("/Lotus/Powersuits/Sandman/SandmanBaseSuit", &INAROS_GRENDEL),
    ("/Lotus/Powersuits/Devourer/DevourerBaseSuit", &INAROS_GRENDEL),
    ("/Lotus/Powersuits/Infestation/InfestationBaseSuit", &NIDUS),
    ("/Lotus/Powersuits/PaxDuviricus/PaxDuviricusBaseSuit", &KULLERVO),
    ("/Lotus/Powersuits/IronFrame/IronFrameBaseSuit", &HILDRYN),
    ("/Lotus/Powersuits/BrokenFrame/BrokenFrameBaseSuit", &XAKU),
    ("/Lotus/Powersuits/Alchemist/AlchemistBaseSuit", &LAVOS),
    ("/Lotus/Powersuits/Berserker/BerserkerBaseSuit", &VALKYR),
    ("/Lotus/Powersuits/Pacifist/PacifistBaseSuit", &HIGH_ENERGY),
    ("/Lotus/Powersuits/Garuda/GarudaBaseSuit", &HIGH_ENERGY),
    ("/Lotus/Powersuits/Wisp/WispBaseSuit", &HIGH_ENERGY),
    ("/Lotus/Powersuits/Yareli/YareliBaseSuit", &HIGH_ENERGY),
];

/// Profile for an identifier; exact match, default otherwise.
pub fn profile_for(unique_name: &str) -> &'static GrowthProfile {
    PROFILE_TABLE
        .iter()
        .find(|(id, _)| *id == unique_name)
        .map(|(_, profile)| *profile)
        .unwrap_or(&DEFAULT_PROFILE)
}

pub fn scale_stats(record: &CharacterRecord, rank: u32) -> ScaledStats {
    profile_for(&record.unique_name).apply(record, rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record(unique_name: &str) -> CharacterRecord {
        CharacterRecord {
            unique_name: unique_name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_profile_at_rank_30() {
        let stats = scale_stats(&record("/Lotus/Powersuits/Excalibur/Excalibur"), REPORT_RANK);
        assert_eq!(
            stats,
            ScaledStats {
                health: 100.0,
                shield: 100.0,
                armor: 0.0,
                power: 50.0,
            }
        );
    }

    #[test]
    fn test_empty_identifier_gets_default_profile() {
        assert_eq!(profile_for("").name, "default");
    }

    #[test]
    fn test_hildryn_shield_growth() {
        let stats = scale_stats(
            &record("/Lotus/Powersuits/IronFrame/IronFrameBaseSuit"),
            REPORT_RANK,
        );
        assert_eq!(stats.health, 100.0);
        assert_eq!(stats.shield, 500.0);
        assert_eq!(stats.power, 0.0);
    }

    #[test]
    fn test_inaros_and_grendel_double_health_step() {
        for id in [
            "/Lotus/Powersuits/Sandman/SandmanBaseSuit",
            "/Lotus/Powersuits/Devourer/DevourerBaseSuit",
        ] {
            let stats = scale_stats(&record(id), REPORT_RANK);
            assert_eq!(stats.health, 200.0, "{id}");
            assert_eq!(stats.shield, 0.0, "{id}");
            assert_eq!(stats.power, 50.0, "{id}");
        }
    }

    #[test]
    fn test_nidus_armor_and_power() {
        let mut nidus = record("/Lotus/Powersuits/Infestation/InfestationBaseSuit");
        nidus.armor = 300.0;
        let stats = scale_stats(&nidus, REPORT_RANK);
        // (34 / 6) * 20 = 100, (30 / 6) * 10 = 50
        assert_eq!(stats.armor, 400.0);
        assert_eq!(stats.power, 50.0);
        assert_eq!(stats.health, 100.0);
        assert_eq!(stats.shield, 0.0);
    }

    #[test]
    fn test_kullervo_lavos_xaku_valkyr() {
        let kullervo = scale_stats(
            &record("/Lotus/Powersuits/PaxDuviricus/PaxDuviricusBaseSuit"),
            REPORT_RANK,
        );
        assert_eq!((kullervo.health, kullervo.armor, kullervo.power), (200.0, 100.0, 50.0));

        let lavos = scale_stats(
            &record("/Lotus/Powersuits/Alchemist/AlchemistBaseSuit"),
            REPORT_RANK,
        );
        assert_eq!((lavos.health, lavos.shield, lavos.armor), (200.0, 100.0, 100.0));

        let xaku = scale_stats(
            &record("/Lotus/Powersuits/BrokenFrame/BrokenFrameBaseSuit"),
            REPORT_RANK,
        );
        assert_eq!((xaku.health, xaku.shield, xaku.power), (90.0, 90.0, 70.0));

        let valkyr = scale_stats(
            &record("/Lotus/Powersuits/Berserker/BerserkerBaseSuit"),
            REPORT_RANK,
        );
        assert_eq!((valkyr.health, valkyr.shield, valkyr.power), (100.0, 50.0, 50.0));
    }

    #[test]
    fn test_high_energy_profile_members() {
        for id in [
            "/Lotus/Powersuits/Pacifist/PacifistBaseSuit",
            "/Lotus/Powersuits/Garuda/GarudaBaseSuit",
            "/Lotus/Powersuits/Wisp/WispBaseSuit",
            "/Lotus/Powersuits/Yareli/YareliBaseSuit",
        ] {
            assert_eq!(profile_for(id).name, "high-energy");
            assert_eq!(scale_stats(&record(id), REPORT_RANK).power, 100.0);
        }
    }

    #[test]
    fn test_match_is_exact() {
        assert_eq!(
            profile_for("/Lotus/Powersuits/IronFrame/IronFrameBaseSuitPrime").name,
            "default"
        );
        assert_eq!(
            profile_for("/lotus/powersuits/ironframe/ironframebasesuit").name,
            "default"
        );
    }

    #[test]
    fn test_base_stats_are_kept() {
        let mut rec = record("");
        rec.health = 370.0;
        rec.shield = 740.0;
        rec.armor = 290.0;
        rec.power = 225.0;
        let stats = scale_stats(&rec, REPORT_RANK);
        assert_eq!(stats.health, 470.0);
        assert_eq!(stats.shield, 840.0);
        assert_eq!(stats.armor, 290.0);
        assert_eq!(stats.power, 275.0);
    }

    #[test]
    fn test_rank_zero_gains_floor_steps_only() {
        // (0 + 2) / 3 == 0 etc.: nothing is gained at rank 0.
        let stats = scale_stats(&record(""), 0);
        assert_eq!(stats, ScaledStats::default());
    }

    #[test]
    fn test_profile_table_identifiers_unique() {
        let ids: HashSet<&str> = PROFILE_TABLE.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), PROFILE_TABLE.len());
    }
}
