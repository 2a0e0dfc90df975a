//! Game orchestration between the REST surface and the store.

use crate::error::GameError;
use crate::games::kalah::Game;
use crate::id;
use crate::store::GameStore;
use tracing::{debug, info, instrument};

/// Creates games, executes moves and fetches game state.
///
/// Every move runs as fetch, apply and save under the store's per-map lock,
/// so two concurrent moves against the same game id cannot interleave.
#[derive(Debug, Clone, Default)]
pub struct GameService {
    store: GameStore,
}

impl GameService {
    /// Creates a service backed by a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_store(GameStore::new())
    }

    /// Creates a service over an existing store.
    #[instrument(skip(store))]
    pub fn with_store(store: GameStore) -> Self {
        Self { store }
    }

    /// Starts a new game with the standard board and persists it.
    #[instrument(skip(self))]
    pub fn create_game(&self) -> Game {
        let game = Game::new(id::generate_game_id());
        info!(game_id = %game.id(), "Game created");
        self.store.insert(game.clone());
        game
    }

    /// Applies a move on the 0-based pit `pit` and persists the result.
    ///
    /// # Errors
    ///
    /// [`GameError::GameNotFound`] for unknown ids; [`GameError::InvalidPit`]
    /// or [`GameError::GameCompleted`] when the move is rejected, in which
    /// case the stored game is untouched.
    #[instrument(skip(self))]
    pub fn make_move(&self, game_id: &str, pit: usize) -> Result<Game, GameError> {
        debug!(game_id, pit, "Processing move");

        let game = self
            .store
            .update(game_id, |game| game.make_move(pit).map(|_| ()))?;

        info!(game_id, pit, status = %game.status(), "Move completed");
        Ok(game)
    }

    /// Fetches a game by id.
    ///
    /// # Errors
    ///
    /// [`GameError::GameNotFound`] when no game exists for `game_id`.
    #[instrument(skip(self))]
    pub fn get_game(&self, game_id: &str) -> Result<Game, GameError> {
        self.store
            .find_by_id(game_id)
            .ok_or_else(|| GameError::GameNotFound {
                id: game_id.to_string(),
            })
    }
}
