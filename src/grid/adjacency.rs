//! Cell adjacency over the honeycomb numbering
//!
//! Ring membership is derived analytically from the closed-form inverse
//! of the ring-size sum; neighbors on the inner and outer rings are found
//! by projecting a cell's position proportionally onto them. The
//! projection is a good approximation of the planar neighbor relation
//! but is not geometrically exact for every id.

use crate::core::types::{CellId, CELL_COUNT, RING_COUNT};

/// Ring a cell belongs to (ring 0 is the center cell).
///
/// For n >= 2 this inverts `ring_end(k) = 1 + 3k(k + 1)`.
pub fn ring_of(cell: CellId) -> u32 {
    if cell == CellId::CENTER {
        return 0;
    }
    let n = cell.0 as f64;
    (((12.0 * n - 3.0).sqrt() - 3.0) / 6.0).ceil() as u32
}

/// First cell id on a ring
pub fn ring_start(ring: u32) -> u32 {
    if ring == 0 {
        1
    } else {
        2 + 3 * ring * (ring - 1)
    }
}

/// Number of cells on a ring
pub fn ring_len(ring: u32) -> u32 {
    if ring == 0 {
        1
    } else {
        6 * ring
    }
}

/// Neighbor ids of a cell, sorted ascending.
///
/// Same-ring predecessor and successor wrap within the ring; the inner
/// and outer rings contribute cells at the proportionally projected
/// offset. Ring 0 and the outermost ring are special-cased.
pub fn neighbors(cell: CellId) -> Vec<CellId> {
    if cell == CellId::CENTER {
        return (2..=7).map(CellId).collect();
    }

    let ring = ring_of(cell);
    let start = ring_start(ring);
    let end = start + ring_len(ring) - 1;
    let n = cell.0;
    let offset = n - start;

    let mut adj = vec![
        if n > start { n - 1 } else { end },
        if n < end { n + 1 } else { start },
    ];

    if ring > 1 {
        let inner = ring_start(ring - 1) + offset * (ring - 1) / ring;
        adj.push(inner);
    } else {
        adj.push(CellId::CENTER.0);
    }

    if ring < RING_COUNT {
        let outer = ring_start(ring + 1) + offset * (ring + 1) / ring;
        adj.push(outer);
        adj.push(outer + 1);
    }

    adj.sort_unstable();
    adj.dedup();
    adj.retain(|&a| (1..=CELL_COUNT).contains(&a) && a != n);
    adj.into_iter().map(CellId).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_sizes_sum_to_cell_count() {
        let total: u32 = (0..=RING_COUNT).map(ring_len).sum();
        assert_eq!(total, CELL_COUNT);
    }

    #[test]
    fn test_ring_of_boundaries() {
        assert_eq!(ring_of(CellId(1)), 0);
        assert_eq!(ring_of(CellId(2)), 1);
        assert_eq!(ring_of(CellId(7)), 1);
        assert_eq!(ring_of(CellId(8)), 2);
        assert_eq!(ring_of(CellId(19)), 2);
        assert_eq!(ring_of(CellId(20)), 3);
        assert_eq!(ring_of(CellId(37)), 3);
        assert_eq!(ring_of(CellId(38)), 4);
        assert_eq!(ring_of(CellId(61)), 4);
    }

    #[test]
    fn test_ring_of_matches_ring_start() {
        for ring in 1..=RING_COUNT {
            let start = ring_start(ring);
            let end = start + ring_len(ring) - 1;
            assert_eq!(ring_of(CellId(start)), ring);
            assert_eq!(ring_of(CellId(end)), ring);
        }
    }

    #[test]
    fn test_center_neighbors_are_ring_one() {
        let adj = neighbors(CellId::CENTER);
        assert_eq!(adj, (2..=7).map(CellId).collect::<Vec<_>>());
    }

    #[test]
    fn test_ring_one_cells_touch_the_center() {
        for id in 2..=7 {
            assert!(
                neighbors(CellId(id)).contains(&CellId::CENTER),
                "cell {id} should touch the center"
            );
        }
    }

    #[test]
    fn test_neighbors_stay_in_bounds_and_exclude_self() {
        for id in 1..=CELL_COUNT {
            let cell = CellId(id);
            let adj = neighbors(cell);
            assert!(!adj.is_empty(), "cell {id} has no neighbors");
            for a in adj {
                assert!((1..=CELL_COUNT).contains(&a.0));
                assert_ne!(a, cell);
            }
        }
    }

    #[test]
    fn test_same_ring_neighbors_wrap() {
        // First cell of ring 2 wraps back to its last cell
        let adj = neighbors(CellId(8));
        assert!(adj.contains(&CellId(19)));
        assert!(adj.contains(&CellId(9)));

        // Last cell of ring 4 wraps forward to its first cell
        let adj = neighbors(CellId(61));
        assert!(adj.contains(&CellId(38)));
        assert!(adj.contains(&CellId(60)));
    }

    #[test]
    fn test_outermost_ring_has_no_outer_neighbors() {
        for id in ring_start(RING_COUNT)..=CELL_COUNT {
            for a in neighbors(CellId(id)) {
                assert!(ring_of(a) >= RING_COUNT - 1);
            }
        }
    }
}
