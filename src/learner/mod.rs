//! Synthetic learner profiles
//!
//! A profile is a trait vector plus qualitative preferences. The learner
//! itself never changes mid-run; the profile's state vector drifts a
//! little after every session.

pub mod profile;
pub mod update;

pub use profile::{generate_profile, LearnerProfile, TraitMix};
pub use update::apply_session;
