//! In-memory game store.

use crate::error::GameError;
use crate::games::kalah::{Game, GameId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument};

/// Durable lookup and save of games, keyed by game id.
///
/// All records live behind one lock, so concurrent moves against the same
/// game id serialize: fetch, mutate and save happen as a single step via
/// [`GameStore::update`]. Different games never share state beyond the map
/// itself.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    games: Arc<Mutex<HashMap<GameId, Game>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a game, replacing any previous record with the same id.
    #[instrument(skip(self, game), fields(game_id = %game.id()))]
    pub fn insert(&self, game: Game) {
        let mut games = self.games.lock().unwrap();
        games.insert(game.id().clone(), game);
        debug!("Game saved");
    }

    /// Looks up a game by id, returning a snapshot of its current state.
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: &str) -> Option<Game> {
        let games = self.games.lock().unwrap();
        let game = games.get(id).cloned();

        if game.is_none() {
            debug!(game_id = id, "Game not found");
        }

        game
    }

    /// Mutates a game under the store lock and returns the updated snapshot.
    ///
    /// The closure must leave the game untouched when it fails; its error is
    /// passed through unchanged.
    ///
    /// # Errors
    ///
    /// [`GameError::GameNotFound`] when no record exists for `id`, or
    /// whatever the closure returns.
    #[instrument(skip(self, f))]
    pub fn update<F>(&self, id: &str, f: F) -> Result<Game, GameError>
    where
        F: FnOnce(&mut Game) -> Result<(), GameError>,
    {
        let mut games = self.games.lock().unwrap();
        let game = games.get_mut(id).ok_or_else(|| GameError::GameNotFound {
            id: id.to_string(),
        })?;

        f(game)?;
        debug!(game_id = id, "Game updated");
        Ok(game.clone())
    }
}
