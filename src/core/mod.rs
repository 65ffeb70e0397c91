pub mod error;
pub mod tuning;
pub mod types;

pub use error::{HiveError, Result};
pub use tuning::Tuning;
