//! Kalah game server library.
//!
//! Implements the board game Kalah as a pure move engine wrapped by a small
//! REST service.
//!
//! # Architecture
//!
//! - **Engine**: sowing, capture, completion and sweep over a 14-slot board
//! - **Lifecycle**: turn ownership and status transitions per game
//! - **Store**: in-memory persistence, lock-serialized per game record
//! - **REST**: axum routes mirroring the service operations
//!
//! # Example
//!
//! ```
//! use kalah::{GameService, GameStatus};
//!
//! let service = GameService::new();
//! let game = service.create_game();
//!
//! // First player sows pit 0; the last stone lands on their own side.
//! let game = service.make_move(game.id(), 0).unwrap();
//! assert_eq!(*game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod error;
mod games;
mod id;
mod rest;
mod service;
mod store;
mod trace;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - error taxonomy
pub use error::GameError;

// Crate-level exports - game types
pub use games::kalah::{
    Board, Game, GameId, GameStatus, MoveError, MoveOutcome, Player, apply_move, board,
};

// Crate-level exports - id generation
pub use id::{GAME_ID_LENGTH, generate_game_id, generate_request_id};

// Crate-level exports - REST surface
pub use rest::{ErrorDetails, GameResponse, router};

// Crate-level exports - orchestration and persistence
pub use service::GameService;
pub use store::GameStore;
