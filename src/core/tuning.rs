//! Simulation tuning with documented constants
//!
//! All probabilities, weights, and thresholds used by the session
//! simulator and the match scorer are collected here. Defaults reproduce
//! the reference behavior; the batch runner can override them from a
//! TOML file.

use serde::{Deserialize, Serialize};

use crate::core::error::{HiveError, Result};

/// Tuning knobs for session simulation and match scoring
///
/// The five factor weights must describe a convex combination (they sum
/// to 1.0 by default). Changing them shifts which cells the recommender
/// favors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === MATCH SCORE WEIGHTS ===
    /// Weight of difficulty fit in the composite score
    pub weight_difficulty: f32,

    /// Weight of unit-kind fit in the composite score
    pub weight_kind: f32,

    /// Weight of media fit in the composite score
    pub weight_media: f32,

    /// Weight of prerequisite fit in the composite score
    pub weight_prereq: f32,

    /// Weight of disposition fit in the composite score
    pub weight_disposition: f32,

    /// Baseline difficulty the recommender steers toward before
    /// per-learner adjustments (scale 1..=12)
    pub ideal_difficulty: i32,

    /// Fit lost per point of distance from the ideal difficulty
    ///
    /// At 0.12, a unit 8+ levels away from the ideal scores zero.
    pub difficulty_falloff: f32,

    // === SESSION OUTCOMES ===
    /// Chance that a learner over their failure threshold abandons the
    /// session
    pub dropout_chance: f32,

    /// Extra abandon chance for concept/support units whose dwell time
    /// exceeds the learner's boredom threshold
    pub boredom_dropout_chance: f32,

    /// Half-width of the uniform jitter added to dwell time (seconds)
    pub dwell_jitter_secs: f32,

    /// Dwell-time floor (seconds); a session never ends faster than this
    pub min_dwell_secs: u32,

    /// Failure-count cap per session
    pub max_failures: u32,

    /// Half-width of the uniform jitter applied to per-media reaction
    /// scores
    pub media_reaction_jitter: f32,

    /// Reaction bonus when a unit is presented in its recommended media
    pub media_match_bonus: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            weight_difficulty: 0.25,
            weight_kind: 0.20,
            weight_media: 0.15,
            weight_prereq: 0.25,
            weight_disposition: 0.15,
            ideal_difficulty: 6,
            difficulty_falloff: 0.12,
            dropout_chance: 0.6,
            boredom_dropout_chance: 0.25,
            dwell_jitter_secs: 25.0,
            min_dwell_secs: 20,
            max_failures: 10,
            media_reaction_jitter: 0.15,
            media_match_bonus: 0.2,
        }
    }
}

impl Tuning {
    /// Load overrides from a TOML file; fields absent from the file keep
    /// their defaults
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| HiveError::Config(e.to_string()))
    }

    /// Sum of the five factor weights
    pub fn weight_total(&self) -> f32 {
        self.weight_difficulty
            + self.weight_kind
            + self.weight_media
            + self.weight_prereq
            + self.weight_disposition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let tuning = Tuning::default();
        assert!((tuning.weight_total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let tuning: Tuning = toml::from_str("dropout_chance = 0.9").unwrap();
        assert_eq!(tuning.dropout_chance, 0.9);
        assert_eq!(tuning.weight_difficulty, 0.25);
        assert_eq!(tuning.max_failures, 10);
    }
}
