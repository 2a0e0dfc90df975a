//! Core domain types for Kalah.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player, owner of pits 0-5 and the store at index 6.
    One,
    /// Second player, owner of pits 7-12 and the store at index 13.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Current status of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum GameStatus {
    /// Game exists but no move has been made yet.
    Created,
    /// At least one move has been accepted and the game is ongoing.
    InProgress,
    /// First player's store holds the majority of the stones.
    FirstPlayerWon,
    /// Second player's store holds the majority of the stones.
    SecondPlayerWon,
    /// Both stores hold the same number of stones.
    Draw,
}

impl GameStatus {
    /// True for the three end states. No move ever leaves a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::FirstPlayerWon | GameStatus::SecondPlayerWon | GameStatus::Draw
        )
    }
}
