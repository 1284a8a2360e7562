//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (board logic, rendering front ends, tooling).
//!
//! # Grid Dimensions
//!
//! The board is a square grid of `size * size` cells, addressed as
//! `(row, col)` with `(0, 0)` in the top-left corner:
//!
//! - **Default size**: 4x4 (the classic layout)
//! - **Supported sizes**: `MIN_GRID_SIZE..=MAX_GRID_SIZE` (2..=16)
//!
//! # Tile Values
//!
//! A cell is either empty (`None`) or holds a power-of-two tile:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_TILE_LOW` | 2 | Spawned tile after one doubling |
//! | `SPAWN_TILE_HIGH` | 4 | Spawned tile after two doublings |
//! | `MIN_GOAL` | 8 | Smallest allowed winning tile |
//! | `DEFAULT_GOAL` | 2048 | The classic winning tile |
//!
//! Merging two equal tiles produces one tile of twice the value, so every
//! tile on a legal board is a power of two and at least 2.
//!
//! # Examples
//!
//! ```
//! use twenty48_types::{Direction, GameConfig, GameStatus, DEFAULT_GRID_SIZE};
//!
//! // Parse a direction from string (full names or wasd letters)
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(Direction::from_str("a"), Some(Direction::Left));
//!
//! // Default configuration: 4x4 grid, win at 2048
//! let config = GameConfig::default();
//! assert_eq!(config.size, DEFAULT_GRID_SIZE);
//! assert!(config.valid());
//!
//! // Terminal states
//! assert!(!GameStatus::Playing.is_over());
//! assert!(GameStatus::Won.is_over());
//! ```

/// Default board edge length (4x4 grid)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest supported board edge length
///
/// A 1x1 board has no room to slide, so 2 is the floor.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest supported board edge length
///
/// Also the capacity of the stack-allocated lane buffers used by the
/// directional sweep, so it is a hard limit rather than a soft default.
pub const MAX_GRID_SIZE: usize = 16;

/// The classic winning tile value (2048)
pub const DEFAULT_GOAL: Tile = 2048;

/// Smallest allowed winning tile
///
/// The goal must exceed every spawnable tile, otherwise a game could be won
/// by a spawn instead of a move.
pub const MIN_GOAL: Tile = 8;

/// Tile value produced by a spawn that doubles the empty cell once
pub const SPAWN_TILE_LOW: Tile = 2;

/// Tile value produced by a spawn that doubles the empty cell twice
pub const SPAWN_TILE_HIGH: Tile = 4;


/// The value of a single tile (2, 4, 8, ...)
///
/// Always a power of two on a legal board. `u32` comfortably covers every
/// reachable tile: even a full 16x16 board cannot exceed 2^31.
pub type Tile = u32;

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(tile)`: Cell holding a tile of the given value
///
/// Used internally by the board as a flat array of cells.
pub type Cell = Option<Tile>;

/// The four sliding directions
///
/// A move slides every tile as far as possible toward one edge of the
/// board, merging equal neighbors along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in scan order
    ///
    /// Handy for exhaustive iteration in tests and availability checks.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or the traditional wasd letters:
    /// "up" | "w", "down" | "s", "left" | "a", "right" | "d"
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "w" => Some(Direction::Up),
            "down" | "s" => Some(Direction::Down),
            "left" | "a" => Some(Direction::Left),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Lifecycle state of a game
///
/// A game starts `Playing` and ends in exactly one of the terminal states:
/// - **Won**: Some cell reached the goal tile after a move
/// - **Lost**: The board is full and no two adjacent cells are equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True for the terminal states (`Won` or `Lost`)
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Game rule parameters: board size and winning tile
///
/// # Examples
///
/// ```
/// use twenty48_types::GameConfig;
///
/// let classic = GameConfig::default();
/// assert_eq!((classic.size, classic.goal), (4, 2048));
///
/// let quick = GameConfig::new(3, 64);
/// assert!(quick.valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board edge length (the grid is `size * size` cells)
    pub size: usize,
    /// Tile value that wins the game
    pub goal: Tile,
}

impl GameConfig {
    /// Create a configuration with the given size and goal
    pub fn new(size: usize, goal: Tile) -> Self {
        Self { size, goal }
    }

    /// Check the rule invariants: size within the supported range, goal a
    /// power of two no smaller than `MIN_GOAL`
    pub fn valid(&self) -> bool {
        (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.size)
            && self.goal.is_power_of_two()
            && self.goal >= MIN_GOAL
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            goal: DEFAULT_GOAL,
        }
    }
}
