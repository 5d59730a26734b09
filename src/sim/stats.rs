//! Bounded stat arithmetic
//!
//! Every stat lives in `[0, max]`; all mutation goes through `clamp_stat`.

use serde::{Deserialize, Serialize};

use super::state::Pet;

/// The pet's three care stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PetStats {
    pub happiness: u8,
    pub affection: u8,
    pub hunger: u8,
}

/// Optional stat deltas (missing = no change)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatEffect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub happiness: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affection: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hunger: Option<i32>,
}

impl StatEffect {
    pub fn happiness(delta: i32) -> Self {
        Self {
            happiness: Some(delta),
            ..Default::default()
        }
    }

    pub fn affection(delta: i32) -> Self {
        Self {
            affection: Some(delta),
            ..Default::default()
        }
    }

    pub fn hunger(delta: i32) -> Self {
        Self {
            hunger: Some(delta),
            ..Default::default()
        }
    }
}

/// Clamp a raw stat value into `[0, max]`, rounding half up
#[inline]
pub fn clamp_stat(value: f64, max: u8) -> u8 {
    if value.is_nan() {
        return 0;
    }
    // Non-negative after the clamp, so `round` is half-up here
    value.clamp(0.0, f64::from(max)).round() as u8
}

#[inline]
fn shift(current: u8, delta: Option<i32>, max: u8) -> u8 {
    clamp_stat(f64::from(current) + f64::from(delta.unwrap_or(0)), max)
}

/// Apply an effect to a set of stats, saturating at the bounds
pub fn apply_effect(stats: PetStats, effect: &StatEffect, max: u8) -> PetStats {
    PetStats {
        happiness: shift(stats.happiness, effect.happiness, max),
        affection: shift(stats.affection, effect.affection, max),
        hunger: shift(stats.hunger, effect.hunger, max),
    }
}

impl PetStats {
    pub fn apply(&self, effect: &StatEffect, max: u8) -> Self {
        apply_effect(*self, effect, max)
    }

    /// Mean of the three stats
    pub fn average(&self) -> f64 {
        (f64::from(self.happiness) + f64::from(self.affection) + f64::from(self.hunger)) / 3.0
    }

    /// True when every stat sits at `max`
    pub fn all_at(&self, max: u8) -> bool {
        self.happiness == max && self.affection == max && self.hunger == max
    }

    /// True when every stat is within `[0, max]`
    pub fn within(&self, max: u8) -> bool {
        self.happiness <= max && self.affection <= max && self.hunger <= max
    }
}

/// Stats after time-based decay since the last actions.
///
/// Decay is not implemented: this returns the pet's current stats unchanged.
pub fn calculate_stat_decay(pet: &Pet, _now: u64) -> PetStats {
    pet.stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MAX: u8 = 100;

    #[test]
    fn test_clamp_rounds_half_up() {
        assert_eq!(clamp_stat(42.5, MAX), 43);
        assert_eq!(clamp_stat(42.49, MAX), 42);
        assert_eq!(clamp_stat(-0.4, MAX), 0);
        assert_eq!(clamp_stat(99.5, MAX), 100);
        assert_eq!(clamp_stat(f64::NAN, MAX), 0);
    }

    #[test]
    fn test_feed_saturates() {
        let stats = PetStats {
            hunger: 90,
            ..Default::default()
        };
        let fed = stats.apply(&StatEffect::hunger(20), MAX);
        assert_eq!(fed.hunger, 100);
        assert_eq!(fed.happiness, 0);
        assert_eq!(fed.affection, 0);
    }

    #[test]
    fn test_zero_effect_is_identity() {
        let stats = PetStats {
            happiness: 12,
            affection: 57,
            hunger: 100,
        };
        assert_eq!(stats.apply(&StatEffect::default(), MAX), stats);
        assert_eq!(
            stats.apply(&StatEffect::default(), MAX).apply(&StatEffect::default(), MAX),
            stats
        );
    }

    #[test]
    fn test_all_at() {
        let mut stats = PetStats {
            happiness: 100,
            affection: 100,
            hunger: 100,
        };
        assert!(stats.all_at(MAX));
        stats.affection = 99;
        assert!(!stats.all_at(MAX));
    }

    #[test]
    fn test_effect_json_omits_missing_deltas() {
        let json = serde_json::to_string(&StatEffect::affection(15)).unwrap();
        assert_eq!(json, r#"{"affection":15}"#);
        let parsed: StatEffect = serde_json::from_str(r#"{"hunger":-5}"#).unwrap();
        assert_eq!(parsed, StatEffect::hunger(-5));
    }

    fn any_stats() -> impl Strategy<Value = PetStats> {
        (0..=MAX, 0..=MAX, 0..=MAX).prop_map(|(happiness, affection, hunger)| PetStats {
            happiness,
            affection,
            hunger,
        })
    }

    fn any_effect() -> impl Strategy<Value = StatEffect> {
        (
            proptest::option::of(any::<i32>()),
            proptest::option::of(any::<i32>()),
            proptest::option::of(any::<i32>()),
        )
            .prop_map(|(happiness, affection, hunger)| StatEffect {
                happiness,
                affection,
                hunger,
            })
    }

    proptest! {
        #[test]
        fn prop_apply_stays_in_bounds(stats in any_stats(), effect in any_effect()) {
            let out = stats.apply(&effect, MAX);
            prop_assert!(out.within(MAX));
        }

        #[test]
        fn prop_positive_delta_never_lowers(stats in any_stats(), delta in 0..1000i32) {
            let out = stats.apply(&StatEffect::hunger(delta), MAX);
            prop_assert_eq!(
                i32::from(out.hunger),
                (i32::from(stats.hunger) + delta).min(i32::from(MAX))
            );
        }
    }
}
