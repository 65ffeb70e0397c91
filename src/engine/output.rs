//! Run summary and serialization

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::engine::HiveEngine;
use crate::learner::profile::LearnerProfile;
use crate::session::SessionLog;

/// Serializable snapshot of a finished simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub statistics: RunStats,
    pub final_profile: Option<LearnerProfile>,
    pub history: Vec<SessionLog>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub sessions: u32,
    pub completions: u32,
    pub dropouts: u32,
    pub retries: u32,
    pub cells_completed: u32,
    pub mean_achievement: f32,
    pub simulation_time_ms: u64,
}

impl RunSummary {
    pub fn new(seed: u64, engine: &HiveEngine, elapsed: Duration) -> Self {
        let history = engine.history().to_vec();
        let sessions = history.len() as u32;
        let dropouts = history.iter().filter(|l| l.dropped_out).count() as u32;
        let retries = history.iter().filter(|l| l.retried).count() as u32;
        let mean_achievement = if history.is_empty() {
            0.0
        } else {
            history.iter().map(|l| l.achievement).sum::<f32>() / sessions as f32
        };

        Self {
            seed,
            statistics: RunStats {
                sessions,
                completions: sessions - dropouts,
                dropouts,
                retries,
                cells_completed: engine.completed_count(),
                mean_achievement,
                simulation_time_ms: elapsed.as_millis() as u64,
            },
            final_profile: engine.profile().cloned(),
            history,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        format!(
            "Simulated {} sessions in {}ms\n{}/61 cells completed, {} dropouts, {} retries, mean achievement {:.0}%",
            self.statistics.sessions,
            self.statistics.simulation_time_ms,
            self.statistics.cells_completed,
            self.statistics.dropouts,
            self.statistics.retries,
            self.statistics.mean_achievement * 100.0,
        )
    }
}
