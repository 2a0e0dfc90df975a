//! Kalah game implementation.
//!
//! Split along the same seams as the rules themselves:
//!
//! - [`board`] - the 14-slot stone layout and its addressing helpers
//! - [`apply_move`] - the pure move algorithm: sowing, capture, completion
//!   detection and the end-of-game sweep
//! - [`Game`] - the lifecycle state machine layered on top of the engine

pub mod board;
mod engine;
mod game;
mod types;

pub use board::Board;
pub use engine::{MoveError, MoveOutcome, apply_move};
pub use game::{Game, GameId};
pub use types::{GameStatus, Player};
