//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the rules of the sliding-tile merge game. It
//! has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every random decision can be scripted
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: The move sweep runs on stack buffers and never allocates
//!
//! # Module Structure
//!
//! - [`board`]: sized square grid with an O(1) index over the empty cells
//! - [`moves`]: one slide-and-merge sweep parameterized by direction
//! - [`game`]: the playable state machine (moves, spawns, win/lose)
//! - [`rng`]: the randomness seam with a seedable LCG and a scripted source
//! - [`snapshot`]: plain-data view of a game for renderers and tooling
//!
//! # Game Rules
//!
//! - A move slides every tile as far as possible toward one edge.
//! - Two equal tiles that collide merge into their doubled value; each tile
//!   merges at most once per move.
//! - Every move that changes the board is followed by one spawned tile (a 2
//!   or a 4) on a uniformly random empty cell.
//! - Reaching the goal tile wins; a full board with no possible merge loses.
//!
//! # Example
//!
//! ```
//! use twenty48_core::Game;
//! use twenty48_types::{Direction, GameConfig};
//!
//! // Create and start a game
//! let mut game = Game::new(GameConfig::default(), 12345);
//! game.start();
//! assert_eq!(game.board().empty_count(), 15);
//!
//! // Drive one turn: move, then honor the spawn the move armed
//! let changed = game.shift(Direction::Left);
//! if changed {
//!     game.spawn_tile();
//! }
//!
//! // Observe the result without touching the live state
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.size, 4);
//! ```

pub mod board;
pub mod game;
pub mod moves;
pub mod rng;
pub mod snapshot;

pub use twenty48_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, EmptySet};
pub use game::Game;
pub use moves::{merge_line, shift, Lane};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use snapshot::GameSnapshot;
