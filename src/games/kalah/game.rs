//! Game lifecycle: turn ownership, status transitions, atomic commit.

use super::board::{self, Board};
use super::engine::{self, MoveOutcome};
use super::types::{GameStatus, Player};
use crate::error::GameError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Unique identifier for a game.
pub type GameId = String;

/// One Kalah match: board, turn and status, committed as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Game {
    /// Unique id, stable for the game's lifetime.
    id: GameId,
    /// Stone counts for all 14 slots.
    board: Board,
    /// Player expected to move next. Before the first move the value is a
    /// placeholder defaulting to player one.
    turn: Player,
    /// Lifecycle state.
    status: GameStatus,
}

impl Game {
    /// Creates a game with the starting board, waiting for its first move.
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            board: Board::new(),
            turn: Player::One,
            status: GameStatus::Created,
        }
    }

    /// Reassembles a game from its stored parts.
    pub fn from_parts(id: GameId, board: Board, turn: Player, status: GameStatus) -> Self {
        Self {
            id,
            board,
            turn,
            status,
        }
    }

    /// Executes a move on the 0-based pit `pit`.
    ///
    /// Validation precedes all mutation: a rejected move returns an error and
    /// leaves the game exactly as it was. On success the board, the turn and
    /// the status are updated together.
    ///
    /// The very first move of a game is exempt from turn-ownership checking,
    /// so a freshly created game accepts an opening move on either side's
    /// pits; that move is credited to player one.
    ///
    /// # Errors
    ///
    /// [`GameError::GameCompleted`] once the game has reached a terminal
    /// status, [`GameError::InvalidPit`] for pits the mover may not sow.
    #[instrument(skip(self), fields(game_id = %self.id, status = ?self.status))]
    pub fn make_move(&mut self, pit: usize) -> Result<MoveOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameCompleted {
                status: self.status,
            });
        }
        if self.status == GameStatus::InProgress {
            self.check_turn_ownership(pit)?;
        }

        let (next_board, outcome) = engine::apply_move(&self.board, self.turn, pit)
            .map_err(|e| GameError::InvalidPit {
                reason: e.to_string(),
            })?;

        self.board = next_board;
        match outcome {
            MoveOutcome::TurnAdvances { next_player } => {
                self.status = GameStatus::InProgress;
                self.turn = next_player;
                debug!(?next_player, "Turn passes");
            }
            MoveOutcome::GameOver { winner } => {
                self.status = match winner {
                    Some(Player::One) => GameStatus::FirstPlayerWon,
                    Some(Player::Two) => GameStatus::SecondPlayerWon,
                    None => GameStatus::Draw,
                };
                debug!(status = %self.status, "Game completed");
            }
        }
        Ok(outcome)
    }

    /// Rejects pits on the side of the board owned by the waiting player.
    fn check_turn_ownership(&self, pit: usize) -> Result<(), GameError> {
        if self.turn == Player::Two && board::is_own_pit(Player::One, pit) {
            return Err(GameError::InvalidPit {
                reason: "Player one is not allowed to move".into(),
            });
        }
        if self.turn == Player::One && board::is_own_pit(Player::Two, pit) {
            return Err(GameError::InvalidPit {
                reason: "Player two is not allowed to move".into(),
            });
        }
        Ok(())
    }
}
