//! Moves module - the directional slide-and-merge sweep
//!
//! All four directions run one algorithm over different lane geometries. A
//! lane is a single row or column read in travel order: lane-local position
//! 0 is the edge the tiles slide toward. [`merge_line`] compacts one lane
//! and applies merges, [`shift`] maps lanes onto the grid for a direction
//! and writes back only the cells that changed.
//!
//! Merge rules for one sweep:
//!
//! - Tiles keep their relative order while sliding over empty cells.
//! - Two equal neighbors merge into one tile of twice the value.
//! - A tile produced by a merge is frozen for the rest of the sweep, so
//!   `[4, 2, 2]` becomes `[4, 4]` and not `[8]`.
//! - When three equal tiles meet, the pair nearest the target edge merges.
//!
//! The sweep works on stack-allocated buffers sized by [`MAX_GRID_SIZE`],
//! so a move never allocates.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Cell, Direction, MAX_GRID_SIZE};

/// One lane of cells in travel order, bounded by the largest grid size
pub type Lane = ArrayVec<Cell, MAX_GRID_SIZE>;

/// Map lane-local position `k` to grid coordinates for a direction
///
/// `lane` selects the row or column, `k` counts from the edge the tiles
/// move toward (k = 0 is that edge).
#[inline(always)]
fn lane_cell(dir: Direction, size: usize, lane: usize, k: usize) -> (usize, usize) {
    match dir {
        Direction::Up => (k, lane),
        Direction::Down => (size - 1 - k, lane),
        Direction::Left => (lane, k),
        Direction::Right => (lane, size - 1 - k),
    }
}

/// Slide and merge one lane toward position 0
///
/// Returns the full-length image of the lane: survivors packed at the
/// front in their original order, empties trailing. `merge_floor` marks the
/// end of the prefix that already contains a merged tile; a write position
/// at or below the floor may never merge again, which enforces the
/// merge-once rule.
pub fn merge_line(lane: &[Cell]) -> Lane {
    debug_assert!(lane.len() <= MAX_GRID_SIZE);

    let mut out: Lane = (0..lane.len()).map(|_| None).collect();
    let mut write = 0;
    let mut merge_floor = 0;

    for &cell in lane {
        let Some(value) = cell else {
            continue;
        };
        if write > merge_floor && out[write - 1] == Some(value) {
            out[write - 1] = Some(value << 1);
            merge_floor = write;
        } else {
            out[write] = Some(value);
            write += 1;
        }
    }

    out
}

/// Slide and merge the whole board toward the given edge
///
/// Returns true when any cell changed value or position. An unchanged
/// sweep leaves the board untouched, including its empty index, so calling
/// the same direction twice in a row is a no-op the second time.
pub fn shift(board: &mut Board, dir: Direction) -> bool {
    let size = board.size();
    let mut changed = false;
    let mut lane_buf = Lane::new();

    for lane in 0..size {
        lane_buf.clear();
        for k in 0..size {
            let (row, col) = lane_cell(dir, size, lane, k);
            lane_buf.push(board.at(row, col));
        }

        let merged = merge_line(&lane_buf);
        for k in 0..size {
            if merged[k] != lane_buf[k] {
                let (row, col) = lane_cell(dir, size, lane, k);
                board.set(row, col, merged[k]);
                changed = true;
            }
        }
    }

    changed
}
