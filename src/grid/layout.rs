//! Planar coordinates for the honeycomb cells
//!
//! Deterministic given ring count and cell size; no randomness.

use serde::{Deserialize, Serialize};

use crate::core::types::{CellId, CELL_COUNT};

/// Planar center of one hex cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexCenter {
    pub x: f32,
    pub y: f32,
    pub cell: CellId,
}

/// Generate cell centers for `rings` concentric rings around the origin,
/// truncated at the fixed cell count.
///
/// Each ring is walked with the same six-direction step pattern, starting
/// from the cell directly below the center. Cell 1 is always the origin.
pub fn hex_centers(rings: u32, cell_size: f32) -> Vec<HexCenter> {
    let h = cell_size * 3.0_f32.sqrt();

    let mut centers = Vec::with_capacity(CELL_COUNT as usize);
    centers.push(HexCenter {
        x: 0.0,
        y: 0.0,
        cell: CellId::CENTER,
    });

    let directions = [
        (1.5 * cell_size, -h / 2.0),
        (0.0, -h),
        (-1.5 * cell_size, -h / 2.0),
        (-1.5 * cell_size, h / 2.0),
        (0.0, h),
        (1.5 * cell_size, h / 2.0),
    ];

    for ring in 1..=rings {
        let mut x = 0.0;
        let mut y = ring as f32 * h;

        for (dx, dy) in directions {
            for _ in 0..ring {
                if centers.len() == CELL_COUNT as usize {
                    return centers;
                }
                centers.push(HexCenter {
                    x,
                    y,
                    cell: CellId::from_index(centers.len()),
                });
                x += dx;
                y += dy;
            }
        }
    }

    centers
}
