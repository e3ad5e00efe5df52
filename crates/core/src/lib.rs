//! Game-state engine - pure, deterministic, and testable.
//!
//! This crate contains all the game rules and state management. It has zero
//! dependencies on UI or I/O, so it can run in a terminal loop, a fixed-step
//! test harness, or a benchmark without modification.
//!
//! # Module structure
//!
//! - [`shapes`]: static catalog of the 7 shapes as 5x5 bitmask rotation states
//! - [`grid`]: 10x20 grid with occupancy checks and row clearing
//! - [`piece`]: the falling piece and its validity check
//! - [`game`]: the drop loop, manual moves, scoring, and game-over reset
//! - [`rng`]: seeded LCG and the uniform piece stream
//!
//! # Example
//!
//! ```
//! use termtris_core::Game;
//! use termtris_types::GameAction;
//!
//! let mut game = Game::new(12345);
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The first piece is now locked into the grid.
//! assert!(game.grid().cells().iter().any(|c| c.is_some()));
//! ```
//!
//! # Timing
//!
//! Call [`Game::tick`] with the elapsed milliseconds since the previous call.
//! The game accumulates time and applies gravity whenever the accumulator
//! exceeds the current drop interval (500ms at level 1, 50ms faster per
//! level, floored at 100ms).

pub mod game;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod shapes;

pub use game::Game;
pub use grid::Grid;
pub use piece::Piece;
pub use rng::{PieceStream, SimpleRng};
