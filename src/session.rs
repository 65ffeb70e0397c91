//! Session outcome simulation
//!
//! One simulated learning attempt: fixed unit info crossed with the
//! learner's state vector produces a log. Every draw always succeeds;
//! "failure" and "dropout" are simulated domain events, not program
//! faults.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::UnitSpec;
use crate::core::tuning::Tuning;
use crate::core::types::{
    clamp01, CellId, Leaning, LearnerId, LogId, MediaMix, RewardKind, UnitKind,
};
use crate::learner::profile::LearnerProfile;

/// Outcome of one simulated learning attempt; immutable once produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLog {
    pub id: LogId,
    pub cell: CellId,
    pub learner: LearnerId,
    pub dwell_secs: u32,
    pub failures: u32,
    pub retried: bool,
    pub dropped_out: bool,
    pub reward_reaction: RewardKind,
    /// How well each concrete media kind landed this session, in [0, 1]
    pub media_reaction: MediaMix,
    /// Achievement for the attempt, in [0, 1]
    pub achievement: f32,
}

/// Simulate one session of the given unit for the given learner
pub fn simulate_session(
    profile: &LearnerProfile,
    unit: &UnitSpec,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> SessionLog {
    // Dwell time: focus span pulled by difficulty (centered on the
    // midpoint of the 1..=12 scale), jittered, scaled by unit kind.
    let base = profile.focus_span_secs as f32;
    let difficulty_pull = (unit.difficulty as f32 - 6.0) * 8.0;
    let jitter = rng.gen_range(-tuning.dwell_jitter_secs..tuning.dwell_jitter_secs);
    let dwell_secs = ((base + difficulty_pull + jitter) * unit.kind.dwell_multiplier())
        .max(tuning.min_dwell_secs as f32) as u32;

    // Failure count from difficulty, adjusted by the learner's leanings.
    let mut failures = ((unit.difficulty as i32 - 5) / 2).max(0) as u32 + rng.gen_range(0..=2);
    match profile.challenge {
        Leaning::High => failures += rng.gen_range(0..=2),
        Leaning::Low => failures = failures.saturating_sub(1),
        Leaning::Medium => {}
    }
    if profile.failure_tolerance == Leaning::High {
        failures = failures.saturating_sub(1);
    }
    let failures = failures.min(tuning.max_failures);

    // Dropout gates on the failure threshold AND a coin flip; slow
    // concept/support sessions risk a boredom dropout on top.
    let mut dropped_out =
        failures >= profile.dropout_threshold && rng.gen::<f32>() < tuning.dropout_chance;
    if dwell_secs > profile.boredom_secs
        && matches!(unit.kind, UnitKind::Concept | UnitKind::Support)
    {
        dropped_out = dropped_out || rng.gen::<f32>() < tuning.boredom_dropout_chance;
    }

    let retried =
        failures > 0 && !dropped_out && rng.gen_range(0.0..100.0) < profile.retry_chance as f32;

    let reward_reaction = draw_reward(profile, rng);

    let mut media_reaction = MediaMix::default();
    for (kind, affinity) in profile.media_affinity.entries() {
        let noise = rng.gen_range(-tuning.media_reaction_jitter..tuning.media_reaction_jitter);
        media_reaction.set(kind, clamp01(affinity + noise));
    }
    if let Some(score) = media_reaction.get(unit.recommended_media) {
        media_reaction.set(
            unit.recommended_media,
            clamp01(score + tuning.media_match_bonus),
        );
    }

    let achievement = if dropped_out {
        rng.gen_range(0.1..0.4)
    } else if failures > unit.fail_allow {
        rng.gen_range(0.4..0.7)
    } else {
        rng.gen_range(0.7..1.0)
    };

    if dropped_out {
        tracing::debug!(cell = %unit.cell, failures, dwell_secs, "learner dropped out");
    }

    SessionLog {
        id: LogId::new(),
        cell: unit.cell,
        learner: profile.id,
        dwell_secs,
        failures,
        retried,
        dropped_out,
        reward_reaction,
        media_reaction,
        achievement,
    }
}

/// Weighted draw over reward reactions, biased by the trait mix
fn draw_reward(profile: &LearnerProfile, rng: &mut impl Rng) -> RewardKind {
    let praise = (profile.traits.achiever + 10) as f32;
    let unlock = (profile.traits.explorer + profile.traits.creator) as f32;
    let visual = (profile.traits.creator + profile.traits.competitor) as f32;

    let mut roll = rng.gen::<f32>() * (praise + unlock + visual);
    if roll <= praise {
        return RewardKind::Praise;
    }
    roll -= praise;
    if roll <= unlock {
        return RewardKind::Unlock;
    }
    RewardKind::VisualEffect
}
