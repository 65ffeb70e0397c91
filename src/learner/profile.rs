//! Learner profile and its random generation

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{CellId, Leaning, LearnerId, MediaMix};

const NAMES: [&str; 12] = [
    "Mira", "Juno", "Theo", "Aria", "Noah", "Sena", "Ezra", "Lina", "Iris", "Owen", "Vera", "Remy",
];

/// Four trait percentages that always sum to exactly 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitMix {
    pub explorer: u32,
    pub achiever: u32,
    pub competitor: u32,
    pub creator: u32,
}

impl TraitMix {
    pub fn total(&self) -> u32 {
        self.explorer + self.achiever + self.competitor + self.creator
    }

    /// Rescale the axes back to a sum of 100 after drift.
    ///
    /// The first three axes are scaled and truncated; the creator axis
    /// absorbs the rounding remainder.
    pub fn normalize(&mut self) {
        let total = self.total();
        if total == 0 {
            *self = Self::default();
            return;
        }
        let factor = 100.0 / total as f64;
        self.explorer = (self.explorer as f64 * factor) as u32;
        self.achiever = (self.achiever as f64 * factor) as u32;
        self.competitor = (self.competitor as f64 * factor) as u32;
        self.creator = 100 - self.explorer - self.achiever - self.competitor;
    }
}

impl Default for TraitMix {
    fn default() -> Self {
        Self {
            explorer: 25,
            achiever: 25,
            competitor: 25,
            creator: 25,
        }
    }
}

/// A synthetic learner's state vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub id: LearnerId,
    pub name: String,
    pub traits: TraitMix,
    pub challenge: Leaning,
    pub failure_tolerance: Leaning,
    /// Affinity for each concrete media kind, in [0, 1]
    pub media_affinity: MediaMix,
    /// Average focused stretch before attention fades (seconds)
    pub focus_span_secs: u32,
    /// Dwell time past which concept/support units start to bore (seconds)
    pub boredom_secs: u32,
    /// Failure count at which abandoning the session becomes likely
    pub dropout_threshold: u32,
    /// Chance of re-attempting after failures, percent
    pub retry_chance: u32,
    /// Chance of opting into exploratory content, percent
    pub expansion_chance: u32,
    pub rest_acceptance: Leaning,
    /// Bumped every time the state vector drifts
    pub version: u32,
    pub completed: Vec<CellId>,
}

/// Generate a fresh random learner.
///
/// Trait draws are skewed toward a dominant axis (`u^0.7`) before being
/// normalized to a sum of 100; the explorer axis absorbs the rounding
/// remainder.
pub fn generate_profile(rng: &mut impl Rng) -> LearnerProfile {
    let raw: [f64; 4] = std::array::from_fn(|_| rng.gen::<f64>().powf(0.7));
    let total: f64 = raw.iter().sum();
    let mut norm: [u32; 4] = std::array::from_fn(|i| (raw[i] / total * 100.0) as u32);
    norm[0] += 100 - norm.iter().sum::<u32>();

    LearnerProfile {
        id: LearnerId::new(),
        name: NAMES[rng.gen_range(0..NAMES.len())].to_string(),
        traits: TraitMix {
            explorer: norm[0],
            achiever: norm[1],
            competitor: norm[2],
            creator: norm[3],
        },
        challenge: Leaning::ALL[rng.gen_range(0..Leaning::ALL.len())],
        failure_tolerance: Leaning::ALL[rng.gen_range(0..Leaning::ALL.len())],
        media_affinity: MediaMix {
            image: rng.gen_range(0.2..0.9),
            text: rng.gen_range(0.2..0.9),
            numeric: rng.gen_range(0.2..0.9),
            video: rng.gen_range(0.2..0.9),
        },
        focus_span_secs: rng.gen_range(90..=300),
        boredom_secs: rng.gen_range(60..=200),
        dropout_threshold: rng.gen_range(2..=6),
        retry_chance: rng.gen_range(20..=80),
        expansion_chance: rng.gen_range(15..=60),
        rest_acceptance: Leaning::ALL[rng.gen_range(0..Leaning::ALL.len())],
        version: 0,
        completed: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fresh_profile_is_blank() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let profile = generate_profile(&mut rng);
        assert_eq!(profile.version, 0);
        assert!(profile.completed.is_empty());
    }

    #[test]
    fn test_traits_sum_to_100() {
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let profile = generate_profile(&mut rng);
            assert_eq!(profile.traits.total(), 100, "seed {seed}");
        }
    }

    #[test]
    fn test_generated_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let p = generate_profile(&mut rng);
            for (_, affinity) in p.media_affinity.entries() {
                assert!((0.2..0.9).contains(&affinity));
            }
            assert!((90..=300).contains(&p.focus_span_secs));
            assert!((60..=200).contains(&p.boredom_secs));
            assert!((2..=6).contains(&p.dropout_threshold));
            assert!((20..=80).contains(&p.retry_chance));
            assert!((15..=60).contains(&p.expansion_chance));
        }
    }

    #[test]
    fn test_normalize_restores_sum() {
        let mut traits = TraitMix {
            explorer: 40,
            achiever: 30,
            competitor: 20,
            creator: 10,
        };
        traits.explorer += 2;
        traits.normalize();
        assert_eq!(traits.total(), 100);

        let mut traits = TraitMix {
            explorer: 0,
            achiever: 0,
            competitor: 0,
            creator: 0,
        };
        traits.normalize();
        assert_eq!(traits, TraitMix::default());
    }
}
