// Humanization: bounded random jitter on timing and velocity.
//
// Every note gets an onset offset drawn uniformly from
// [-timing_amount, timing_amount] beats and a velocity offset drawn
// uniformly from [-velocity_amount, velocity_amount], with the result
// clamped to [1, 127]. Pitch, duration, length and order of the sequence
// are untouched.
//
// A non-positive amount disables that axis, as does a non-finite timing
// amount. The onset offset is drawn as a unit sample scaled by the amount, so
// any finite amount works; velocity sums saturate before clamping. The onset
// is not clamped, so a note on beat 0 may move slightly negative.

use crate::note::{Note, clamp_velocity};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Jitter amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanizeConfig {
    /// When false, notes pass through unchanged.
    pub enabled: bool,
    /// Maximum onset shift in beats.
    pub timing_amount: f64,
    /// Maximum velocity change.
    pub velocity_amount: i32,
}

impl Default for HumanizeConfig {
    fn default() -> Self {
        HumanizeConfig {
            enabled: true,
            timing_amount: 0.02,
            velocity_amount: 8,
        }
    }
}

/// Apply timing and velocity jitter to a finished note sequence.
pub fn humanize(notes: &[Note], config: &HumanizeConfig, rng: &mut impl Rng) -> Vec<Note> {
    if !config.enabled {
        return notes.to_vec();
    }

    let timing = config.timing_amount;
    let timing_on = timing.is_finite() && timing > 0.0;
    let vel = config.velocity_amount;

    notes
        .iter()
        .map(|note| {
            let start = if timing_on {
                note.start + rng.random_range(-1.0..=1.0) * timing
            } else {
                note.start
            };
            let velocity = if vel > 0 {
                (note.velocity as i32).saturating_add(rng.random_range(-vel..=vel))
            } else {
                note.velocity as i32
            };
            Note {
                start,
                velocity: clamp_velocity(velocity),
                ..*note
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_notes() -> Vec<Note> {
        (0..64)
            .map(|i| Note::new(36 + (i % 24) as u8, i as f64 * 0.25, 0.1 + i as f64, 1 + i * 2))
            .collect()
    }

    #[test]
    fn preserves_length_pitch_and_duration() {
        let input = sample_notes();
        let out = humanize(&input, &HumanizeConfig::default(), &mut StdRng::seed_from_u64(1));
        assert_eq!(out.len(), input.len());
        for (a, b) in input.iter().zip(&out) {
            assert_eq!(a.pitch, b.pitch);
            assert_eq!(a.duration, b.duration);
        }
    }

    #[test]
    fn jitter_is_bounded() {
        let input = sample_notes();
        for seed in 0..20 {
            let config = HumanizeConfig::default();
            let out = humanize(&input, &config, &mut StdRng::seed_from_u64(seed));
            for (a, b) in input.iter().zip(&out) {
                assert!((b.start - a.start).abs() <= config.timing_amount + 1e-12);
                let dv = (b.velocity as i32 - a.velocity as i32).abs();
                assert!(dv <= config.velocity_amount);
                assert!((1..=127).contains(&b.velocity));
            }
        }
    }

    #[test]
    fn velocity_clamps_at_the_extremes() {
        let input = vec![Note::new(60, 0.0, 1.0, 1), Note::new(62, 1.0, 1.0, 127)];
        let config = HumanizeConfig {
            velocity_amount: 50,
            ..Default::default()
        };
        for seed in 0..50 {
            let out = humanize(&input, &config, &mut StdRng::seed_from_u64(seed));
            assert!(out.iter().all(|n| (1..=127).contains(&n.velocity)));
        }
    }

    #[test]
    fn zero_amounts_and_disabled_are_identity() {
        let input = sample_notes();
        let zero = HumanizeConfig {
            timing_amount: 0.0,
            velocity_amount: 0,
            ..Default::default()
        };
        assert_eq!(humanize(&input, &zero, &mut StdRng::seed_from_u64(5)), input);

        let off = HumanizeConfig {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(humanize(&input, &off, &mut StdRng::seed_from_u64(5)), input);
    }

    #[test]
    fn extreme_amounts_stay_in_range() {
        let input = sample_notes();
        let huge = HumanizeConfig {
            timing_amount: 1e308,
            velocity_amount: i32::MAX,
            ..Default::default()
        };
        for seed in 0..20 {
            let out = humanize(&input, &huge, &mut StdRng::seed_from_u64(seed));
            for (a, b) in input.iter().zip(&out) {
                assert!(b.start.is_finite());
                assert!((b.start - a.start).abs() <= 1e308);
                assert!((1..=127).contains(&b.velocity));
            }
        }
    }

    #[test]
    fn non_finite_timing_is_ignored() {
        let input = sample_notes();
        for timing_amount in [f64::INFINITY, f64::NAN, f64::NEG_INFINITY] {
            let config = HumanizeConfig {
                timing_amount,
                velocity_amount: 0,
                ..Default::default()
            };
            assert_eq!(humanize(&input, &config, &mut StdRng::seed_from_u64(3)), input);
        }
    }

    #[test]
    fn jitter_actually_moves_notes() {
        let input = sample_notes();
        let out = humanize(&input, &HumanizeConfig::default(), &mut StdRng::seed_from_u64(9));
        assert!(input.iter().zip(&out).any(|(a, b)| a.start != b.start));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: HumanizeConfig = serde_json::from_str(r#"{"timing_amount": 0.05}"#).unwrap();
        assert_eq!(config.timing_amount, 0.05);
        assert_eq!(config.velocity_amount, 8);
        assert!(config.enabled);
    }
}
