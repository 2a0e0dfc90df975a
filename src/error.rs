//! Error taxonomy shared by the service, the store and the REST surface.

use crate::games::kalah::GameStatus;
use derive_more::{Display, Error};

/// Failures surfaced to callers of the game service.
///
/// Every variant is deterministic for its inputs, so nothing here is ever
/// retried internally; a failed operation leaves the stored game unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// No game exists for the identifier.
    #[display("GameId: {id} is not known while fetching game")]
    GameNotFound {
        /// The identifier that was looked up.
        id: String,
    },
    /// Pit selector is a store, out of range, empty, or not the mover's.
    #[display("{reason}")]
    InvalidPit {
        /// Human-readable rejection reason.
        reason: String,
    },
    /// Game identifier failed surface validation.
    #[display("Invalid Game ID")]
    InvalidGame,
    /// Move attempted against a finished game.
    #[display("Game is already completed. {status}")]
    GameCompleted {
        /// The terminal status the game is in.
        status: GameStatus,
    },
}
