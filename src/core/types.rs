//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of cells in the honeycomb map
pub const CELL_COUNT: u32 = 61;

/// Number of rings around the center cell (1 + 6 + 12 + 18 + 24 = 61)
pub const RING_COUNT: u32 = 4;

/// 1-based identifier for a honeycomb cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl CellId {
    /// The fixed start cell at the grid center
    pub const CENTER: CellId = CellId(1);

    /// Returns `None` for ids outside 1..=61
    pub fn new(id: u32) -> Option<Self> {
        (1..=CELL_COUNT).contains(&id).then_some(Self(id))
    }

    /// Arena index for this cell
    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unique identifier for learners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LearnerId(pub Uuid);

impl LearnerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LearnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LearnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short form for on-screen panels
        write!(f, "{}", &self.0.simple().to_string()[..8])
    }
}

/// Unique identifier for session logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogId(pub Uuid);

impl LogId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LogId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.0.simple().to_string()[..8])
    }
}

/// Lifecycle state of a map cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Locked,
    Available,
    Completed,
}

/// Dynamic per-cell learning state, stored arena-indexed alongside the
/// unit catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CellState {
    pub status: CellStatus,
    /// Achievement recorded when the cell was completed, in [0, 1]
    pub achievement: f32,
}

/// Learning unit flavor, assigned per ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Concept,
    Support,
    Practice,
    Explore,
}

impl UnitKind {
    pub const ALL: [UnitKind; 4] = [
        UnitKind::Concept,
        UnitKind::Support,
        UnitKind::Practice,
        UnitKind::Explore,
    ];

    /// Dwell-time multiplier: concept units hold attention longest,
    /// support units shortest
    pub fn dwell_multiplier(&self) -> f32 {
        match self {
            UnitKind::Concept => 1.2,
            UnitKind::Practice => 1.0,
            UnitKind::Explore => 0.8,
            UnitKind::Support => 0.7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Concept => "concept",
            UnitKind::Support => "support",
            UnitKind::Practice => "practice",
            UnitKind::Explore => "explore",
        }
    }
}

/// How a unit's content is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Text,
    Numeric,
    Video,
    Mixed,
}

impl MediaKind {
    pub const ALL: [MediaKind; 5] = [
        MediaKind::Image,
        MediaKind::Text,
        MediaKind::Numeric,
        MediaKind::Video,
        MediaKind::Mixed,
    ];

    /// The four kinds a learner holds an affinity for (`Mixed` has none)
    pub const CONCRETE: [MediaKind; 4] = [
        MediaKind::Image,
        MediaKind::Text,
        MediaKind::Numeric,
        MediaKind::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Text => "text",
            MediaKind::Numeric => "numeric",
            MediaKind::Video => "video",
            MediaKind::Mixed => "mixed",
        }
    }
}

/// Reward flavor a unit hands out on completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    Praise,
    Unlock,
    VisualEffect,
}

impl RewardKind {
    pub const ALL: [RewardKind; 3] = [
        RewardKind::Praise,
        RewardKind::Unlock,
        RewardKind::VisualEffect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RewardKind::Praise => "praise",
            RewardKind::Unlock => "unlock",
            RewardKind::VisualEffect => "visual-effect",
        }
    }
}

/// Three-level qualitative leaning (challenge preference, failure
/// tolerance, rest acceptance)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Leaning {
    Low,
    Medium,
    High,
}

impl Leaning {
    pub const ALL: [Leaning; 3] = [Leaning::Low, Leaning::Medium, Leaning::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Leaning::Low => "low",
            Leaning::Medium => "medium",
            Leaning::High => "high",
        }
    }
}

/// Subject strand, assigned round-robin across cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Math,
    Science,
    Language,
    SocialStudies,
    Arts,
    Athletics,
    Coding,
}

impl Subject {
    pub const ALL: [Subject; 7] = [
        Subject::Math,
        Subject::Science,
        Subject::Language,
        Subject::SocialStudies,
        Subject::Arts,
        Subject::Athletics,
        Subject::Coding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::Language => "language",
            Subject::SocialStudies => "social-studies",
            Subject::Arts => "arts",
            Subject::Athletics => "athletics",
            Subject::Coding => "coding",
        }
    }
}

/// One scalar per concrete media kind; used both for learner affinities
/// and for per-session reaction scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaMix {
    pub image: f32,
    pub text: f32,
    pub numeric: f32,
    pub video: f32,
}

impl MediaMix {
    /// `None` for `Mixed`, which carries no per-learner scalar
    pub fn get(&self, kind: MediaKind) -> Option<f32> {
        match kind {
            MediaKind::Image => Some(self.image),
            MediaKind::Text => Some(self.text),
            MediaKind::Numeric => Some(self.numeric),
            MediaKind::Video => Some(self.video),
            MediaKind::Mixed => None,
        }
    }

    pub fn set(&mut self, kind: MediaKind, value: f32) {
        match kind {
            MediaKind::Image => self.image = value,
            MediaKind::Text => self.text = value,
            MediaKind::Numeric => self.numeric = value,
            MediaKind::Video => self.video = value,
            MediaKind::Mixed => {}
        }
    }

    pub fn entries(&self) -> [(MediaKind, f32); 4] {
        [
            (MediaKind::Image, self.image),
            (MediaKind::Text, self.text),
            (MediaKind::Numeric, self.numeric),
            (MediaKind::Video, self.video),
        ]
    }

    /// Kind with the highest score; ties resolve to the earlier entry
    pub fn best(&self) -> MediaKind {
        let mut best = (MediaKind::Image, self.image);
        for (kind, value) in self.entries() {
            if value > best.1 {
                best = (kind, value);
            }
        }
        best.0
    }
}

/// Clamp a score into the unit interval
pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}
