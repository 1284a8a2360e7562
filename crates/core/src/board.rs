//! Board module - manages the game grid
//!
//! The board is a size x size grid where each cell is empty or holds a
//! power-of-two tile. Cells live in a flat vector for better cache locality.
//! Coordinates: (row, col) where row ranges 0..size (top to bottom) and col
//! ranges 0..size (left to right).
//!
//! Alongside the cells the board keeps an index of the empty positions so a
//! spawner can pick a uniformly random empty cell in O(1). The index is not
//! a cache that can drift: every write goes through [`Board::set`], which
//! updates membership in O(1).

use crate::moves;
use crate::rng::RandomSource;
use crate::types::{Cell, Direction, Tile, MAX_GRID_SIZE, MIN_GRID_SIZE, SPAWN_TILE_LOW};

/// Marker for "this cell has no slot in the empty index"
const NO_SLOT: usize = usize::MAX;

/// Index over the empty cells with O(1) insert, remove and random pick
///
/// `slots` densely packs the flat indices of all empty cells, in no
/// particular order. `slot_of` maps a flat cell index back to its position
/// in `slots` (or `NO_SLOT`). Removal swaps the last slot into the vacated
/// position, so both directions stay O(1).
#[derive(Debug, Clone)]
pub struct EmptySet {
    slots: Vec<usize>,
    slot_of: Vec<usize>,
}

impl EmptySet {
    /// Create an index covering all of `len` cells (a fully empty board)
    pub(crate) fn with_all(len: usize) -> Self {
        let mut set = Self {
            slots: Vec::with_capacity(len),
            slot_of: Vec::with_capacity(len),
        };
        set.reset(len);
        set
    }

    /// Mark all of `len` cells empty again, reusing the existing buffers
    pub(crate) fn reset(&mut self, len: usize) {
        self.slots.clear();
        self.slots.extend(0..len);
        self.slot_of.clear();
        self.slot_of.extend(0..len);
    }

    /// Number of empty cells
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no cell is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when the cell at `idx` is tracked as empty
    pub fn contains(&self, idx: usize) -> bool {
        self.slot_of.get(idx).is_some_and(|&slot| slot != NO_SLOT)
    }

    /// Iterate over the flat indices of all empty cells (unordered)
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }

    /// Flat cell index stored in the given slot
    fn get(&self, slot: usize) -> usize {
        self.slots[slot]
    }

    /// Track `idx` as empty
    pub(crate) fn insert(&mut self, idx: usize) {
        assert!(
            self.slot_of[idx] == NO_SLOT,
            "cell {} already in the empty index",
            idx
        );
        self.slot_of[idx] = self.slots.len();
        self.slots.push(idx);
    }

    /// Stop tracking `idx`, swapping the last slot into its place
    pub(crate) fn remove(&mut self, idx: usize) {
        let slot = self.slot_of[idx];
        assert!(slot != NO_SLOT, "cell {} not in the empty index", idx);

        let last = self.slots[self.slots.len() - 1];
        self.slots[slot] = last;
        self.slot_of[last] = slot;
        self.slots.pop();
        self.slot_of[idx] = NO_SLOT;
    }

    /// Check that `slots` and `slot_of` agree with each other
    fn back_pointers_valid(&self) -> bool {
        self.slots
            .iter()
            .enumerate()
            .all(|(slot, &idx)| self.slot_of.get(idx) == Some(&slot))
    }
}

/// The game board - a size x size grid using flat array storage
#[derive(Debug, Clone)]
pub struct Board {
    /// Edge length of the grid
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
    /// Index of the empty cells, kept in lockstep with `cells`
    empty: EmptySet,
}

impl Board {
    /// Create a new empty board with the given edge length
    ///
    /// Panics if `size` is outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size),
            "board size {} outside supported range {}..={}",
            size,
            MIN_GRID_SIZE,
            MAX_GRID_SIZE
        );
        Self {
            size,
            cells: vec![None; size * size],
            empty: EmptySet::with_all(size * size),
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    /// Convert a flat index back to (row, col) coordinates
    #[inline(always)]
    fn coord(&self, idx: usize) -> (usize, usize) {
        (idx / self.size, idx % self.size)
    }

    /// Get the edge length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    /// Get cell at position (row, col), which must be in bounds
    #[inline(always)]
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Get the tile value at position (row, col), with 0 for an empty cell
    ///
    /// Panics if the coordinates are outside the board.
    pub fn value(&self, row: usize, col: usize) -> Tile {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) outside {}x{} board",
            row,
            col,
            self.size,
            self.size
        );
        self.cells[row * self.size + col].unwrap_or(0)
    }

    /// Set cell at position (row, col), keeping the empty index in sync
    ///
    /// Panics if the coordinates are outside the board.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) outside {}x{} board",
            row,
            col,
            self.size,
            self.size
        );
        if let Some(value) = cell {
            debug_assert!(
                value >= SPAWN_TILE_LOW && value.is_power_of_two(),
                "illegal tile value {}",
                value
            );
        }

        let idx = row * self.size + col;
        match (self.cells[idx].is_some(), cell.is_some()) {
            (true, false) => self.empty.insert(idx),
            (false, true) => self.empty.remove(idx),
            _ => {}
        }
        self.cells[idx] = cell;
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and holds a tile
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.empty.len()
    }

    /// True when every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.empty.is_empty()
    }

    /// Read-only view of the empty index
    pub fn empty_set(&self) -> &EmptySet {
        &self.empty
    }

    /// Pick a uniformly random empty cell, or None when the board is full
    ///
    /// Draws exactly one value from `rng`, and none at all on a full board.
    pub fn random_empty(&self, rng: &mut dyn RandomSource) -> Option<(usize, usize)> {
        if self.empty.is_empty() {
            return None;
        }
        let slot = rng.next_range(self.empty.len() as u32) as usize;
        Some(self.coord(self.empty.get(slot)))
    }

    /// Slide and merge every tile toward the given edge
    ///
    /// Returns true when any cell changed. See [`crate::moves::shift`].
    pub fn shift(&mut self, dir: Direction) -> bool {
        moves::shift(self, dir)
    }

    /// True when the board holds a tile of exactly this value
    pub fn contains(&self, value: Tile) -> bool {
        self.cells.iter().any(|&cell| cell == Some(value))
    }

    /// Largest tile on the board, or None when the board is empty
    pub fn max_tile(&self) -> Option<Tile> {
        self.cells.iter().copied().flatten().max()
    }

    /// Sum of all tile values on the board
    ///
    /// Merges conserve this sum and spawns only add to it, which makes it a
    /// cheap diagnostic for move correctness.
    pub fn total_value(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }

    /// Check if any two orthogonally adjacent cells hold equal tiles
    ///
    /// Scans each cell's right and below neighbor, so every adjacent pair is
    /// visited exactly once, including pairs in the last row and column.
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..self.size {
            for col in 0..self.size {
                let Some(value) = self.at(row, col) else {
                    continue;
                };
                if col + 1 < self.size && self.at(row, col + 1) == Some(value) {
                    return true;
                }
                if row + 1 < self.size && self.at(row + 1, col) == Some(value) {
                    return true;
                }
            }
        }
        false
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get one row as a slice
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < self.size, "row {} outside {}x{} board", row, self.size, self.size);
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over the rows top to bottom, for rendering
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Write all tile values into `out` in row-major order, 0 for empty
    ///
    /// Clears and refills the vector, so a reused buffer does not allocate.
    pub fn write_values(&self, out: &mut Vec<Tile>) {
        out.clear();
        out.extend(self.cells.iter().map(|cell| cell.unwrap_or(0)));
    }

    /// Clear the entire board
    ///
    /// Reuses the empty-index buffers, so a game reset does not allocate.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
        self.empty.reset(self.cells.len());
    }

    /// Check that the empty index agrees with the cells exactly
    ///
    /// Intended for tests and debugging. Normal play keeps this true.
    pub fn empty_index_consistent(&self) -> bool {
        let mut empties = 0;
        for (idx, cell) in self.cells.iter().enumerate() {
            let tracked = self.empty.contains(idx);
            match cell {
                None => {
                    empties += 1;
                    if !tracked {
                        return false;
                    }
                }
                Some(_) => {
                    if tracked {
                        return false;
                    }
                }
            }
        }
        empties == self.empty.len() && self.empty.back_pointers_valid()
    }

    /// Create from a 2D vector of values for testing (0 means empty)
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|row| row.len() == size));

        let mut board = Self::new(size);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    board.set(row, col, Some(value));
                }
            }
        }
        board
    }

    /// Convert to a 2D vector of values for testing (0 means empty)
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        (0..self.size)
            .map(|row| self.row(row).iter().map(|cell| cell.unwrap_or(0)).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_GRID_SIZE)
    }
}

// Equality is the visible grid. The empty index is derived bookkeeping and
// its slot order depends on mutation history, so it stays out of comparisons.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Board {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(4);
        assert_eq!(board.index(0, 0), 0);
        assert_eq!(board.index(0, 3), 3);
        assert_eq!(board.index(1, 0), 4);
        assert_eq!(board.index(3, 3), 15);

        assert_eq!(board.coord(0), (0, 0));
        assert_eq!(board.coord(3), (0, 3));
        assert_eq!(board.coord(4), (1, 0));
        assert_eq!(board.coord(15), (3, 3));
    }

    #[test]
    fn test_board_get_set() {
        let mut board = Board::new(4);

        board.set(0, 0, Some(2));
        board.set(2, 3, Some(64));

        assert_eq!(board.get(0, 0), Some(Some(2)));
        assert_eq!(board.get(2, 3), Some(Some(64)));
        assert_eq!(board.get(1, 1), Some(None));
        assert_eq!(board.get(4, 0), None);
        assert_eq!(board.get(0, 4), None);

        // Verify internal array
        assert_eq!(board.cells[0], Some(2));
        assert_eq!(board.cells[2 * 4 + 3], Some(64));
    }

    #[test]
    fn test_board_value_accessor() {
        let mut board = Board::new(4);
        board.set(1, 2, Some(8));

        assert_eq!(board.value(1, 2), 8);
        assert_eq!(board.value(0, 0), 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_board_value_out_of_bounds_panics() {
        let board = Board::new(4);
        let _ = board.value(4, 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_board_set_out_of_bounds_panics() {
        let mut board = Board::new(4);
        board.set(0, 4, Some(2));
    }

    #[test]
    #[should_panic(expected = "size")]
    fn test_board_size_out_of_range_panics() {
        let _ = Board::new(1);
    }

    #[test]
    fn test_empty_index_tracks_writes() {
        let mut board = Board::new(3);
        assert_eq!(board.empty_count(), 9);

        board.set(0, 0, Some(2));
        board.set(1, 1, Some(4));
        assert_eq!(board.empty_count(), 7);
        assert!(!board.empty_set().contains(0));
        assert!(!board.empty_set().contains(4));
        assert!(board.empty_set().contains(8));

        // Overwriting a tile with a tile must not touch the index
        board.set(0, 0, Some(8));
        assert_eq!(board.empty_count(), 7);

        // Clearing a tile returns it to the index
        board.set(0, 0, None);
        assert_eq!(board.empty_count(), 8);
        assert!(board.empty_set().contains(0));

        assert!(board.empty_index_consistent());
    }

    #[test]
    fn test_empty_set_swap_remove() {
        let mut set = EmptySet::with_all(5);
        assert_eq!(set.len(), 5);

        // Removing from the middle swaps the last slot in
        set.remove(1);
        assert_eq!(set.len(), 4);
        assert!(!set.contains(1));
        assert!(set.contains(4));
        assert!(set.back_pointers_valid());

        set.remove(4);
        set.insert(1);
        assert_eq!(set.len(), 4);
        assert!(set.contains(1));
        assert!(!set.contains(4));
        assert!(set.back_pointers_valid());

        let mut members: Vec<usize> = set.iter().collect();
        members.sort_unstable();
        assert_eq!(members, vec![0, 1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "not in the empty index")]
    fn test_empty_set_double_remove_panics() {
        let mut set = EmptySet::with_all(3);
        set.remove(2);
        set.remove(2);
    }

    #[test]
    fn test_random_empty_is_uniform_over_slots() {
        let mut board = Board::new(2);
        board.set(0, 0, Some(2));
        board.set(1, 1, Some(4));

        // Two empty cells left; a scan over many draws must hit both
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 4];
        for _ in 0..64 {
            let (row, col) = board.random_empty(&mut rng).unwrap();
            assert!(board.is_empty_at(row, col));
            seen[row * 2 + col] = true;
        }
        assert!(seen[1] && seen[2]);
        assert!(!seen[0] && !seen[3]);
    }

    #[test]
    fn test_random_empty_on_full_board() {
        let mut board = Board::new(2);
        board.set(0, 0, Some(2));
        board.set(0, 1, Some(4));
        board.set(1, 0, Some(8));
        board.set(1, 1, Some(16));

        let mut rng = SimpleRng::new(1);
        let before = rng.clone();
        assert_eq!(board.random_empty(&mut rng), None);
        // A full board must not consume randomness
        assert_eq!(rng.state(), before.state());
    }

    #[test]
    fn test_adjacent_pair_scan() {
        let board = Board::from_rows(vec![
            vec![2, 4, 2],
            vec![4, 2, 4],
            vec![2, 4, 2],
        ]);
        assert!(!board.has_adjacent_pair());

        // Vertical pair in the last column
        let board = Board::from_rows(vec![
            vec![2, 4, 2],
            vec![4, 2, 4],
            vec![2, 8, 4],
        ]);
        assert!(board.has_adjacent_pair());

        // Pair in the last row
        let board = Board::from_rows(vec![
            vec![2, 4, 2],
            vec![4, 2, 4],
            vec![2, 2, 8],
        ]);
        assert!(board.has_adjacent_pair());

        // Equal values on a diagonal never count
        let board = Board::from_rows(vec![
            vec![2, 4, 2],
            vec![4, 8, 4],
            vec![2, 4, 2],
        ]);
        assert!(!board.has_adjacent_pair());
    }

    #[test]
    fn test_board_stats() {
        let mut board = Board::new(4);
        assert_eq!(board.max_tile(), None);
        assert_eq!(board.total_value(), 0);
        assert!(!board.contains(2));

        board.set(0, 0, Some(2));
        board.set(3, 3, Some(512));
        assert_eq!(board.max_tile(), Some(512));
        assert_eq!(board.total_value(), 514);
        assert!(board.contains(2));
        assert!(board.contains(512));
        assert!(!board.contains(4));
    }

    #[test]
    fn test_board_clear() {
        let mut board = Board::from_rows(vec![vec![2, 4], vec![8, 16]]);
        assert!(board.is_full());

        board.clear();
        assert_eq!(board.empty_count(), 4);
        assert!(board.cells().iter().all(|cell| cell.is_none()));
        assert!(board.empty_index_consistent());
    }

    #[test]
    fn test_board_rows_roundtrip() {
        let rows = vec![vec![2, 0, 4], vec![0, 8, 0], vec![16, 0, 32]];
        let board = Board::from_rows(rows.clone());
        assert_eq!(board.to_rows(), rows);
        assert_eq!(board.row(1), &[None, Some(8), None]);
        assert!(board.empty_index_consistent());

        // Row iteration agrees with indexed access
        for (idx, row) in board.iter_rows().enumerate() {
            assert_eq!(row, board.row(idx));
        }
        assert_eq!(board.iter_rows().count(), 3);
    }

    #[test]
    fn test_write_values_reuses_buffer() {
        let board = Board::from_rows(vec![vec![2, 0], vec![0, 4]]);

        let mut out = Vec::new();
        board.write_values(&mut out);
        assert_eq!(out, vec![2, 0, 0, 4]);

        // Second write replaces rather than appends
        board.write_values(&mut out);
        assert_eq!(out.len(), 4);
    }
}
