//! Post-session profile drift
//!
//! The learner does not change; the state vector drifts a little after
//! every session and is re-normalized so the trait axes keep summing
//! to 100.

use rand::Rng;

use crate::catalog::UnitSpec;
use crate::core::types::{clamp01, Leaning, UnitKind};
use crate::learner::profile::LearnerProfile;
use crate::session::SessionLog;

/// Affinity gained by the best-reacting media each session
const MEDIA_DRIFT_UP: f32 = 0.03;

/// Affinity lost by every other media each session
const MEDIA_DRIFT_DOWN: f32 = 0.01;

/// Chance a frustrated medium-preference learner drops to low challenge
const CHALLENGE_DROP_CHANCE: f32 = 0.3;

/// Chance a cleanly succeeding low-preference learner recovers to medium
const CHALLENGE_RECOVER_CHANCE: f32 = 0.2;

/// Fold one session log into the learner's state vector
pub fn apply_session(
    profile: &mut LearnerProfile,
    log: &SessionLog,
    unit: &UnitSpec,
    rng: &mut impl Rng,
) {
    // Media preference drifts toward whatever landed best this session.
    let best = log.media_reaction.best();
    for (kind, affinity) in profile.media_affinity.entries() {
        let delta = if kind == best {
            MEDIA_DRIFT_UP
        } else {
            -MEDIA_DRIFT_DOWN
        };
        profile.media_affinity.set(kind, clamp01(affinity + delta));
    }

    // Challenge preference reacts to frustration and to clean successes.
    if log.dropped_out || log.failures > unit.fail_allow {
        match profile.challenge {
            Leaning::High => {
                profile.challenge = Leaning::Medium;
                tracing::debug!(learner = %profile.id, "challenge preference eased to medium");
            }
            Leaning::Medium if rng.gen::<f32>() < CHALLENGE_DROP_CHANCE => {
                profile.challenge = Leaning::Low;
                tracing::debug!(learner = %profile.id, "challenge preference eased to low");
            }
            _ => {}
        }
    }
    if !log.dropped_out
        && log.failures <= 1
        && profile.challenge == Leaning::Low
        && rng.gen::<f32>() < CHALLENGE_RECOVER_CHANCE
    {
        profile.challenge = Leaning::Medium;
        tracing::debug!(learner = %profile.id, "challenge preference recovered to medium");
    }

    // Trait axes drift by a point or two, then re-normalize.
    let traits = &mut profile.traits;
    if !log.dropped_out && rng.gen_range(0.0..100.0) < profile.expansion_chance as f32 {
        traits.explorer += 2;
    } else if log.dropped_out {
        traits.explorer = traits.explorer.saturating_sub(1);
    }

    if !log.dropped_out {
        traits.achiever += 1;
    }
    if log.retried {
        traits.achiever += 1;
    }

    if unit.kind == UnitKind::Explore && !log.dropped_out {
        traits.creator += 2;
    }

    traits.normalize();

    profile.version += 1;
    if !log.dropped_out {
        profile.completed.push(log.cell);
    }
}
