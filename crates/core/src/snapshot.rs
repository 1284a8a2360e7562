//! Snapshot module - a plain-data view of a game for observers
//!
//! Renderers and tooling read game state through [`GameSnapshot`] instead
//! of borrowing the live [`crate::game::Game`]. The snapshot owns its cell
//! buffer, so one instance can be refreshed every frame via
//! [`crate::game::Game::snapshot_into`] without allocating.

use crate::types::{GameStatus, Tile};

/// Owned view of a game at one point in time
///
/// `cells` holds the grid in row-major order with 0 standing in for an
/// empty cell, which keeps the snapshot free of nested options and easy to
/// feed to display code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Edge length of the grid
    pub size: usize,
    /// Tile values in row-major order, 0 for empty
    pub cells: Vec<Tile>,
    pub status: GameStatus,
    /// Tile value that wins the game
    pub goal: Tile,
    /// Changed moves made so far
    pub moves: u32,
    /// True when the engine still owes a spawn for the last changed move
    pub pending_spawn: bool,
    /// Which game this is since the engine was created (reset increments)
    pub episode_id: u32,
}

impl GameSnapshot {
    /// Tile value at (row, col), 0 for empty
    ///
    /// Panics if the coordinates are outside the snapshot's grid.
    pub fn value(&self, row: usize, col: usize) -> Tile {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) outside {}x{} snapshot",
            row,
            col,
            self.size,
            self.size
        );
        self.cells[row * self.size + col]
    }

    /// Reset every field to its empty-game value, keeping the cell buffer
    pub fn clear(&mut self) {
        self.size = 0;
        self.cells.clear();
        self.status = GameStatus::Playing;
        self.goal = 0;
        self.moves = 0;
        self.pending_spawn = false;
        self.episode_id = 0;
    }

    /// True while the game accepts moves
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
            status: GameStatus::Playing,
            goal: 0,
            moves: 0,
            pending_spawn: false,
            episode_id: 0,
        }
    }
}
