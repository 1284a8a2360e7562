//! Game module - the playable state machine over the board
//!
//! This module ties together the board, the directional sweep, and the RNG.
//! It owns the turn cycle: a move that changes the board arms the spawn
//! flag, the next spawn consumes it, and the win/lose status is refreshed
//! at the point where each becomes decidable (win after a changed move,
//! loss after a spawn).
//!
//! The driver loop for a playable game is:
//!
//! ```text
//! game.start();
//! loop {
//!     let dir = /* read player input */;
//!     game.shift(dir);
//!     game.spawn_tile();
//!     if game.status().is_over() { break; }
//! }
//! ```
//!
//! Unchanged moves never spawn: `shift` only arms the flag when the sweep
//! actually moved or merged something, and `spawn_tile` without the flag is
//! a no-op.

use crate::board::Board;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{
    Direction, GameConfig, GameStatus, Tile, SPAWN_TILE_HIGH, SPAWN_TILE_LOW,
};

/// Complete game state
#[derive(Debug)]
pub struct Game {
    board: Board,
    /// Every random decision flows through this seam
    rng: Box<dyn RandomSource>,
    /// Tile value that ends the game as a win
    goal: Tile,
    status: GameStatus,
    /// True when a spawn is owed: set at construction (the opening tile)
    /// and after every changed move, cleared by the spawn that honors it
    pending_spawn: bool,
    started: bool,
    /// Moves that changed the board since the game started
    moves: u32,
    /// Monotonic episode id (increments on reset)
    episode_id: u32,
}

impl Game {
    /// Create a new game with the given rules and RNG seed
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self::with_source(config, Box::new(SimpleRng::new(seed)))
    }

    /// Create a new game drawing randomness from the given source
    ///
    /// Panics if the configuration is invalid.
    pub fn with_source(config: GameConfig, rng: Box<dyn RandomSource>) -> Self {
        assert!(
            config.valid(),
            "invalid game config: size {}, goal {}",
            config.size,
            config.goal
        );
        Self {
            board: Board::new(config.size),
            rng,
            goal: config.goal,
            status: GameStatus::Playing,
            pending_spawn: true,
            started: false,
            moves: 0,
            episode_id: 0,
        }
    }

    /// Start the game and spawn the opening tile
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_tile();
    }

    /// Slide and merge every tile toward the given edge
    ///
    /// Returns true when the board changed. A changed move arms the spawn
    /// flag, counts toward `moves`, and refreshes the win status. An
    /// unchanged move leaves all state untouched, and any move after the
    /// game is over is rejected outright.
    pub fn shift(&mut self, dir: Direction) -> bool {
        if self.status.is_over() {
            return false;
        }

        let changed = self.board.shift(dir);
        if changed {
            self.pending_spawn = true;
            self.moves += 1;
            if self.is_won() {
                self.status = GameStatus::Won;
            }
        }
        changed
    }

    /// Place a random tile on a random empty cell, if a spawn is owed
    ///
    /// Returns true when a tile was placed. The spawn doubles an empty
    /// cell once or twice with equal probability, producing a 2 or a 4.
    /// Without the pending flag this is a no-op; with the flag but no empty
    /// cell it keeps the flag and only refreshes the loss status.
    pub fn spawn_tile(&mut self) -> bool {
        if self.status.is_over() || !self.pending_spawn {
            return false;
        }

        let spawned = match self.board.random_empty(self.rng.as_mut()) {
            Some((row, col)) => {
                let value = if self.rng.next_range(2) == 0 {
                    SPAWN_TILE_LOW
                } else {
                    SPAWN_TILE_HIGH
                };
                self.board.set(row, col, Some(value));
                self.pending_spawn = false;
                true
            }
            None => false,
        };

        // Loss becomes decidable here: a spawn can fill the last gap, and a
        // full board with no adjacent pair has no legal move left
        if self.is_lost() {
            self.status = GameStatus::Lost;
        }
        spawned
    }

    /// True when any cell holds the goal tile
    pub fn is_won(&self) -> bool {
        self.board.contains(self.goal)
    }

    /// True when the board is full and no move could merge anything
    pub fn is_lost(&self) -> bool {
        self.board.is_full() && !self.board.has_adjacent_pair()
    }

    /// Reset to a fresh game with the same rules and spawn the opening tile
    ///
    /// The random stream continues rather than repeating, so consecutive
    /// games differ even though the seed was fixed once.
    pub fn reset(&mut self) {
        self.board.clear();
        self.status = GameStatus::Playing;
        self.pending_spawn = true;
        self.started = false;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.start();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn goal(&self) -> Tile {
        self.goal
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pending_spawn(&self) -> bool {
        self.pending_spawn
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Fill a reusable snapshot with the current game state
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.board.size();
        self.board.write_values(&mut out.cells);
        out.status = self.status;
        out.goal = self.goal;
        out.moves = self.moves;
        out.pending_spawn = self.pending_spawn;
        out.episode_id = self.episode_id;
    }

    /// Allocate a fresh snapshot of the current game state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
