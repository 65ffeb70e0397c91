//! Five-factor match scoring
//!
//! For every cell, five bounded sub-scores measure how well the unit fits
//! the learner right now; a fixed-weight linear combination ranks the
//! candidates. Scoring is stateless and recomputed from scratch after
//! every session.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::catalog::UnitSpec;
use crate::core::tuning::Tuning;
use crate::core::types::{CellId, CellState, CellStatus, Leaning, MediaKind, UnitKind};
use crate::learner::profile::LearnerProfile;
use crate::session::SessionLog;

/// Why a cell cannot be recommended right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    AlreadyCompleted,
    Locked,
    PrereqUnmet,
}

/// Match score for one candidate cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScore {
    pub cell: CellId,
    /// Fixed-weight linear combination of the five sub-scores
    pub total: f32,
    pub difficulty_fit: f32,
    pub kind_fit: f32,
    pub media_fit: f32,
    pub prereq_fit: f32,
    pub disposition_fit: f32,
    pub block: Option<BlockReason>,
}

impl MatchScore {
    fn blocked(cell: CellId, reason: BlockReason) -> Self {
        Self {
            cell,
            total: 0.0,
            difficulty_fit: 0.0,
            kind_fit: 0.0,
            media_fit: 0.0,
            prereq_fit: 0.0,
            disposition_fit: 0.0,
            block: Some(reason),
        }
    }

    pub fn is_available(&self) -> bool {
        self.block.is_none()
    }
}

/// Score every cell against the learner's current state.
///
/// Available cells sort before blocked ones, then by total descending;
/// the sort is stable, so equal totals keep arena order.
pub fn score_cells(
    profile: &LearnerProfile,
    last_log: Option<&SessionLog>,
    catalog: &[UnitSpec],
    cells: &[CellState],
    tuning: &Tuning,
) -> Vec<MatchScore> {
    let mut scores: Vec<MatchScore> = catalog
        .iter()
        .map(|unit| score_unit(profile, last_log, unit, &cells[unit.cell.index()], tuning))
        .collect();

    scores.sort_by_key(|s| {
        (
            Reverse(s.is_available()),
            Reverse(OrderedFloat(s.total)),
        )
    });
    scores
}

fn score_unit(
    profile: &LearnerProfile,
    last_log: Option<&SessionLog>,
    unit: &UnitSpec,
    state: &CellState,
    tuning: &Tuning,
) -> MatchScore {
    if state.status == CellStatus::Completed || profile.completed.contains(&unit.cell) {
        return MatchScore::blocked(unit.cell, BlockReason::AlreadyCompleted);
    }
    if state.status == CellStatus::Locked {
        return MatchScore::blocked(unit.cell, BlockReason::Locked);
    }
    if !unit
        .prereq_required
        .iter()
        .all(|req| profile.completed.contains(req))
    {
        return MatchScore::blocked(unit.cell, BlockReason::PrereqUnmet);
    }

    let prereq_fit = prereq_fit(profile, unit);
    let difficulty_fit = difficulty_fit(profile, last_log, unit, tuning);
    let kind_fit = kind_fit(profile, last_log, unit);
    let media_fit = media_fit(profile, last_log, unit);
    let disposition_fit = disposition_fit(profile, unit);

    let total = difficulty_fit * tuning.weight_difficulty
        + kind_fit * tuning.weight_kind
        + media_fit * tuning.weight_media
        + prereq_fit * tuning.weight_prereq
        + disposition_fit * tuning.weight_disposition;

    MatchScore {
        cell: unit.cell,
        total,
        difficulty_fit,
        kind_fit,
        media_fit,
        prereq_fit,
        disposition_fit,
        block: None,
    }
}

/// Fraction of recommended prerequisites already completed, on a
/// 0.6..=1.0 scale
fn prereq_fit(profile: &LearnerProfile, unit: &UnitSpec) -> f32 {
    let total = unit.prereq_recommended.len().max(1) as f32;
    let met = unit
        .prereq_recommended
        .iter()
        .filter(|req| profile.completed.contains(req))
        .count() as f32;
    0.6 + met / total * 0.4
}

/// Distance of the unit's difficulty from the learner's ideal
fn difficulty_fit(
    profile: &LearnerProfile,
    last_log: Option<&SessionLog>,
    unit: &UnitSpec,
    tuning: &Tuning,
) -> f32 {
    let mut ideal = tuning.ideal_difficulty;
    if let Some(log) = last_log {
        if log.failures > 2 {
            ideal -= 1;
        }
        if !log.dropped_out && log.failures <= 1 {
            ideal += 1;
        }
    }
    match profile.challenge {
        Leaning::High => ideal += 2,
        Leaning::Low => ideal -= 1,
        Leaning::Medium => {}
    }

    let gap = (unit.difficulty as i32 - ideal).abs() as f32;
    (1.0 - gap * tuning.difficulty_falloff).max(0.0)
}

/// Whether the unit's kind matches the moment: push after a retry,
/// ease off after a dropout, and follow the trait mix
fn kind_fit(profile: &LearnerProfile, last_log: Option<&SessionLog>, unit: &UnitSpec) -> f32 {
    let mut fit: f32 = 0.5;

    if let Some(log) = last_log {
        if log.dropped_out {
            match unit.kind {
                UnitKind::Support => fit += 0.3,
                UnitKind::Explore => fit += 0.2,
                _ => {}
            }
        } else if log.retried && unit.kind == UnitKind::Practice {
            fit += 0.3;
        }
    }

    fit += match unit.kind {
        UnitKind::Explore => profile.traits.explorer as f32 * 0.005,
        UnitKind::Practice => profile.traits.achiever as f32 * 0.005,
        UnitKind::Concept => profile.traits.creator as f32 * 0.003,
        UnitKind::Support => 0.0,
    };

    fit.min(1.0)
}

/// Learner's affinity for the unit's recommended media, blended with the
/// last session's observed reaction
fn media_fit(profile: &LearnerProfile, last_log: Option<&SessionLog>, unit: &UnitSpec) -> f32 {
    match unit.recommended_media {
        MediaKind::Mixed => 0.5,
        kind => {
            let mut pref = profile.media_affinity.get(kind).unwrap_or(0.5);
            if let Some(log) = last_log {
                if let Some(reaction) = log.media_reaction.get(kind) {
                    pref = (pref + reaction) / 2.0;
                }
            }
            pref
        }
    }
}

/// Whether the learner would *want* this unit, from the trait mix alone
fn disposition_fit(profile: &LearnerProfile, unit: &UnitSpec) -> f32 {
    let fit = 0.5
        + match unit.kind {
            UnitKind::Explore => profile.traits.explorer as f32 * 0.004,
            UnitKind::Practice => {
                profile.traits.achiever as f32 * 0.004 + profile.traits.competitor as f32 * 0.002
            }
            UnitKind::Concept => profile.traits.creator as f32 * 0.003,
            UnitKind::Support => 0.0,
        };
    fit.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::generate_catalog;
    use crate::core::types::CELL_COUNT;
    use crate::learner::profile::generate_profile;
    use crate::learner::update::apply_session;
    use crate::session::simulate_session;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fresh_cells() -> Vec<CellState> {
        let mut cells = vec![CellState::default(); CELL_COUNT as usize];
        cells[CellId::CENTER.index()].status = CellStatus::Available;
        cells
    }

    #[test]
    fn test_only_the_center_starts_available() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let catalog = generate_catalog(&mut rng);
        let profile = generate_profile(&mut rng);
        let tuning = Tuning::default();

        let scores = score_cells(&profile, None, &catalog, &fresh_cells(), &tuning);
        let available: Vec<_> = scores.iter().filter(|s| s.is_available()).collect();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].cell, CellId::CENTER);

        // Blocked cells carry a reason and sort after available ones
        assert!(scores[0].is_available());
        for s in &scores[1..] {
            assert_eq!(s.block, Some(BlockReason::Locked));
        }
    }

    #[test]
    fn test_sub_scores_clamped_and_total_is_weighted_sum() {
        let tuning = Tuning::default();
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let catalog = generate_catalog(&mut rng);
            let mut profile = generate_profile(&mut rng);

            // Unlock everything and play a session so last_log paths run
            let mut cells = vec![
                CellState {
                    status: CellStatus::Available,
                    achievement: 0.0,
                };
                CELL_COUNT as usize
            ];
            let log = simulate_session(&profile, &catalog[0], &tuning, &mut rng);
            apply_session(&mut profile, &log, &catalog[0], &mut rng);
            if !log.dropped_out {
                cells[0].status = CellStatus::Completed;
            }

            for s in score_cells(&profile, Some(&log), &catalog, &cells, &tuning) {
                if !s.is_available() {
                    continue;
                }
                for sub in [
                    s.difficulty_fit,
                    s.kind_fit,
                    s.media_fit,
                    s.prereq_fit,
                    s.disposition_fit,
                ] {
                    assert!((0.0..=1.0).contains(&sub));
                }
                let expected = s.difficulty_fit * tuning.weight_difficulty
                    + s.kind_fit * tuning.weight_kind
                    + s.media_fit * tuning.weight_media
                    + s.prereq_fit * tuning.weight_prereq
                    + s.disposition_fit * tuning.weight_disposition;
                assert!((s.total - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_available_scores_sorted_descending() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let catalog = generate_catalog(&mut rng);
        let profile = generate_profile(&mut rng);
        let tuning = Tuning::default();

        let cells = vec![
            CellState {
                status: CellStatus::Available,
                achievement: 0.0,
            };
            CELL_COUNT as usize
        ];
        let scores = score_cells(&profile, None, &catalog, &cells, &tuning);
        for pair in scores.windows(2) {
            if pair[0].is_available() && pair[1].is_available() {
                assert!(pair[0].total >= pair[1].total);
            }
            // Once blocked entries start, no available entry follows
            if !pair[0].is_available() {
                assert!(!pair[1].is_available());
            }
        }
    }

    #[test]
    fn test_completed_cells_are_blocked() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let catalog = generate_catalog(&mut rng);
        let mut profile = generate_profile(&mut rng);
        let tuning = Tuning::default();

        let mut cells = fresh_cells();
        cells[CellId::CENTER.index()].status = CellStatus::Completed;
        profile.completed.push(CellId::CENTER);

        let scores = score_cells(&profile, None, &catalog, &cells, &tuning);
        let center = scores.iter().find(|s| s.cell == CellId::CENTER).unwrap();
        assert_eq!(center.block, Some(BlockReason::AlreadyCompleted));
    }

    #[test]
    fn test_unmet_required_prereq_blocks() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let catalog = generate_catalog(&mut rng);
        let profile = generate_profile(&mut rng);
        let tuning = Tuning::default();

        // Everything unlocked but nothing completed: any unit with a
        // required prerequisite must be held back.
        let cells = vec![
            CellState {
                status: CellStatus::Available,
                achievement: 0.0,
            };
            CELL_COUNT as usize
        ];
        let scores = score_cells(&profile, None, &catalog, &cells, &tuning);
        for s in &scores {
            let unit = &catalog[s.cell.index()];
            if !unit.prereq_required.is_empty() {
                assert_eq!(s.block, Some(BlockReason::PrereqUnmet));
            }
        }
    }

    #[test]
    fn test_mixed_media_scores_neutral() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let catalog = generate_catalog(&mut rng);
        let profile = generate_profile(&mut rng);

        for unit in catalog
            .iter()
            .filter(|u| u.recommended_media == MediaKind::Mixed)
        {
            assert_eq!(media_fit(&profile, None, unit), 0.5);
        }
    }
}
