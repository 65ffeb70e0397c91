//! Fixed unit info for each honeycomb cell
//!
//! A catalog is generated once per learner: difficulty and unit kind
//! follow the cell's ring, subjects rotate across the seven strands, and
//! prerequisites are derived from the adjacency relation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{CellId, MediaKind, RewardKind, Subject, UnitKind, CELL_COUNT};
use crate::grid::adjacency::{neighbors, ring_of};

/// Everything about a unit that is decided before any learning happens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpec {
    pub cell: CellId,
    pub kind: UnitKind,
    /// Difficulty on a 1..=12 scale, growing with the ring
    pub difficulty: u32,
    pub subject: Subject,
    pub recommended_media: MediaKind,
    pub estimated_secs: u32,
    /// Failures a session can absorb before achievement suffers
    pub fail_allow: u32,
    pub reward: RewardKind,
    pub adjacent: Vec<CellId>,
    /// Must all be completed before the unit is recommendable
    pub prereq_required: Vec<CellId>,
    /// Completing these raises the prerequisite fit
    pub prereq_recommended: Vec<CellId>,
}

/// Generate the 61-unit catalog in arena order
pub fn generate_catalog(rng: &mut impl Rng) -> Vec<UnitSpec> {
    (1..=CELL_COUNT)
        .map(|id| {
            let cell = CellId(id);
            let ring = ring_of(cell);

            let difficulty = (ring * 3 + rng.gen_range(0..=2)).clamp(1, 12);

            let kind = match ring {
                0 => UnitKind::Concept,
                1 => [UnitKind::Concept, UnitKind::Support][rng.gen_range(0..2)],
                2 => [UnitKind::Support, UnitKind::Practice][rng.gen_range(0..2)],
                _ => [UnitKind::Practice, UnitKind::Explore][rng.gen_range(0..2)],
            };

            let subject = Subject::ALL[(id - 1) as usize % Subject::ALL.len()];
            let recommended_media = MediaKind::ALL[rng.gen_range(0..MediaKind::ALL.len())];
            let estimated_secs = (120 + difficulty as i32 * 15 + rng.gen_range(-20..=20)) as u32;
            let reward = RewardKind::ALL[rng.gen_range(0..RewardKind::ALL.len())];

            let adjacent = neighbors(cell);
            let prereq_required: Vec<CellId> = adjacent
                .iter()
                .copied()
                .filter(|a| a.0 < id && ring_of(*a) < ring)
                .take(1)
                .collect();
            let prereq_recommended: Vec<CellId> = adjacent
                .iter()
                .copied()
                .filter(|a| a.0 < id)
                .take(2)
                .collect();

            UnitSpec {
                cell,
                kind,
                difficulty,
                subject,
                recommended_media,
                estimated_secs,
                fail_allow: (5 - difficulty / 3).max(1),
                reward,
                adjacent,
                prereq_required,
                prereq_recommended,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn catalog(seed: u64) -> Vec<UnitSpec> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_catalog(&mut rng)
    }

    #[test]
    fn test_catalog_covers_every_cell() {
        let catalog = catalog(7);
        assert_eq!(catalog.len(), CELL_COUNT as usize);
        for (i, unit) in catalog.iter().enumerate() {
            assert_eq!(unit.cell, CellId::from_index(i));
        }
    }

    #[test]
    fn test_difficulty_in_scale_and_grows_with_rings() {
        let catalog = catalog(7);
        for unit in &catalog {
            assert!((1..=12).contains(&unit.difficulty));
        }
        // Center stays easy, outermost ring is near the top of the scale
        assert!(catalog[0].difficulty <= 2);
        for unit in &catalog[37..] {
            assert!(unit.difficulty >= 12);
        }
    }

    #[test]
    fn test_center_is_a_concept_unit_without_prereqs() {
        let catalog = catalog(123);
        let center = &catalog[0];
        assert_eq!(center.kind, UnitKind::Concept);
        assert!(center.prereq_required.is_empty());
        assert!(center.prereq_recommended.is_empty());
    }

    #[test]
    fn test_subjects_rotate_round_robin() {
        let catalog = catalog(7);
        for unit in &catalog {
            let expected = Subject::ALL[(unit.cell.0 - 1) as usize % Subject::ALL.len()];
            assert_eq!(unit.subject, expected);
        }
    }

    #[test]
    fn test_required_prereqs_sit_on_inner_rings() {
        let catalog = catalog(99);
        for unit in &catalog {
            for req in &unit.prereq_required {
                assert!(req.0 < unit.cell.0);
                assert!(ring_of(*req) < ring_of(unit.cell));
                assert!(unit.adjacent.contains(req));
            }
            assert!(unit.prereq_required.len() <= 1);
            assert!(unit.prereq_recommended.len() <= 2);
        }
    }

    #[test]
    fn test_fail_allow_shrinks_with_difficulty() {
        let catalog = catalog(7);
        for unit in &catalog {
            assert_eq!(unit.fail_allow, (5 - unit.difficulty / 3).max(1));
            assert!(unit.fail_allow >= 1);
        }
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = catalog(42);
        let b = catalog(42);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.difficulty, y.difficulty);
            assert_eq!(x.kind, y.kind);
            assert_eq!(x.recommended_media, y.recommended_media);
        }
    }
}
