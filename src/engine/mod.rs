//! Simulation engine: the honeycomb map, one live learner, and the
//! recommend -> learn -> update loop
//!
//! State lives in two arenas indexed by cell id: the fixed unit catalog
//! and the dynamic cell states. The engine owns a deterministic RNG, so
//! a seed fully determines a run.

pub mod output;

pub use output::RunSummary;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::{generate_catalog, UnitSpec};
use crate::core::error::{HiveError, Result};
use crate::core::tuning::Tuning;
use crate::core::types::{CellId, CellState, CellStatus, CELL_COUNT};
use crate::learner::profile::{generate_profile, LearnerProfile};
use crate::learner::update::apply_session;
use crate::scoring::{score_cells, MatchScore};
use crate::session::{simulate_session, SessionLog};

/// The honeycomb learning simulator
pub struct HiveEngine {
    catalog: Vec<UnitSpec>,
    cells: Vec<CellState>,
    profile: Option<LearnerProfile>,
    history: Vec<SessionLog>,
    current: Option<CellId>,
    tuning: Tuning,
    rng: ChaCha8Rng,
}

impl HiveEngine {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let catalog = generate_catalog(&mut rng);
        Self {
            catalog,
            cells: fresh_cells(),
            profile: None,
            history: Vec::new(),
            current: None,
            tuning,
            rng,
        }
    }

    /// Generate a fresh learner and reset the map.
    ///
    /// The catalog is regenerated, every cell relocks except the center,
    /// the history clears, and the center cell becomes current.
    pub fn new_learner(&mut self) -> &LearnerProfile {
        self.catalog = generate_catalog(&mut self.rng);
        self.cells = fresh_cells();
        self.history.clear();
        self.current = Some(CellId::CENTER);

        let profile = generate_profile(&mut self.rng);
        tracing::info!(learner = %profile.id, name = %profile.name, "generated learner");
        self.profile.insert(profile)
    }

    /// Make an available cell the current one (a click on the map)
    pub fn select_cell(&mut self, id: u32) -> Result<CellId> {
        if self.profile.is_none() {
            return Err(HiveError::NoLearner);
        }
        let cell = CellId::new(id).ok_or(HiveError::CellOutOfRange(id))?;
        match self.cells[cell.index()].status {
            CellStatus::Locked => Err(HiveError::CellLocked(cell)),
            CellStatus::Completed => Err(HiveError::CellCompleted(cell)),
            CellStatus::Available => {
                self.current = Some(cell);
                Ok(cell)
            }
        }
    }

    /// Simulate one session on the current cell.
    ///
    /// On success the cell completes and its locked neighbors unlock; the
    /// next current cell is picked synchronously before returning, so no
    /// later interaction can observe a stale current cell. After a
    /// dropout the learner stays where they are.
    pub fn learn_current(&mut self) -> Result<SessionLog> {
        let profile = self.profile.as_mut().ok_or(HiveError::NoLearner)?;
        let current = self.current.ok_or(HiveError::NoCurrentCell)?;
        let unit = &self.catalog[current.index()];

        let log = simulate_session(profile, unit, &self.tuning, &mut self.rng);
        apply_session(profile, &log, unit, &mut self.rng);

        if !log.dropped_out {
            let state = &mut self.cells[current.index()];
            state.status = CellStatus::Completed;
            state.achievement = log.achievement;

            for adj in &unit.adjacent {
                let neighbor = &mut self.cells[adj.index()];
                if neighbor.status == CellStatus::Locked {
                    neighbor.status = CellStatus::Available;
                    tracing::debug!(cell = %adj, completed = %current, "cell unlocked");
                }
            }
        }

        self.history.push(log.clone());
        self.current = if log.dropped_out {
            Some(current)
        } else {
            self.pick_next()
        };

        Ok(log)
    }

    /// Top-n recommendations for the display panel
    pub fn recommendations(&self, n: usize) -> Result<Vec<MatchScore>> {
        let profile = self.profile.as_ref().ok_or(HiveError::NoLearner)?;
        let scores = score_cells(
            profile,
            self.history.last(),
            &self.catalog,
            &self.cells,
            &self.tuning,
        );
        Ok(scores
            .into_iter()
            .filter(|s| s.is_available())
            .take(n)
            .collect())
    }

    /// Best available cell by match score, if any remains.
    ///
    /// When every available cell is held back by an unmet required
    /// prerequisite, fall back to the lowest-numbered available cell so
    /// the learner is never stranded on a non-empty map.
    fn pick_next(&self) -> Option<CellId> {
        let profile = self.profile.as_ref()?;
        let scores = score_cells(
            profile,
            self.history.last(),
            &self.catalog,
            &self.cells,
            &self.tuning,
        );
        scores
            .into_iter()
            .find(|s| s.is_available())
            .map(|s| s.cell)
            .or_else(|| self.available_cells().into_iter().min())
    }

    pub fn profile(&self) -> Option<&LearnerProfile> {
        self.profile.as_ref()
    }

    pub fn current(&self) -> Option<CellId> {
        self.current
    }

    pub fn history(&self) -> &[SessionLog] {
        &self.history
    }

    pub fn catalog(&self) -> &[UnitSpec] {
        &self.catalog
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn unit(&self, cell: CellId) -> &UnitSpec {
        &self.catalog[cell.index()]
    }

    pub fn cell_status(&self, cell: CellId) -> CellStatus {
        self.cells[cell.index()].status
    }

    pub fn available_cells(&self) -> Vec<CellId> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.status == CellStatus::Available)
            .map(|(i, _)| CellId::from_index(i))
            .collect()
    }

    pub fn completed_count(&self) -> u32 {
        self.cells
            .iter()
            .filter(|c| c.status == CellStatus::Completed)
            .count() as u32
    }
}

fn fresh_cells() -> Vec<CellState> {
    let mut cells = vec![CellState::default(); CELL_COUNT as usize];
    cells[CellId::CENTER.index()].status = CellStatus::Available;
    cells
}
