//! Honeycomb grid geometry
//!
//! Cells are numbered 1..=61 spiraling outward from the center: ring 0 is
//! the single center cell, ring k holds 6k cells.

pub mod adjacency;
pub mod layout;

pub use adjacency::{neighbors, ring_len, ring_of, ring_start};
pub use layout::{hex_centers, HexCenter};
