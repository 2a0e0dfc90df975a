//! REST surface: routes, wire types and error mapping.
//!
//! The surface validates only shape (game id length, pit number range and
//! the two store pits); everything rule-related is decided by the game
//! itself. Pit numbers on the wire are 1-based, the board is 0-based.

use crate::error::GameError;
use crate::games::kalah::{Game, GameStatus, Player, board};
use crate::id::GAME_ID_LENGTH;
use crate::service::GameService;
use crate::trace;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router, middleware};
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// Wire representation of a game. Fields that do not apply to a response
/// are omitted from the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    /// Unique identifier of the game.
    pub id: String,
    /// Link to the created game (creation responses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Stone count per 1-based pit number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BTreeMap<usize, u32>>,
    /// Which player should move, or how the game ended.
    #[serde(rename = "playerMessage", skip_serializing_if = "Option::is_none")]
    pub player_message: Option<String>,
}

/// Error payload returned for every rejected request.
#[derive(Debug, Clone, Serialize, Deserialize, new)]
pub struct ErrorDetails {
    /// When the rejection happened.
    pub timestamp: DateTime<Utc>,
    /// Human-readable reason.
    pub message: String,
    /// Optional machine-readable code.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    pub code: Option<i32>,
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = match self {
            GameError::GameNotFound { .. } => StatusCode::NOT_FOUND,
            GameError::InvalidPit { .. }
            | GameError::InvalidGame
            | GameError::GameCompleted { .. } => StatusCode::BAD_REQUEST,
        };
        let details = ErrorDetails::new(Utc::now(), self.to_string());
        (status, Json(details)).into_response()
    }
}

/// Builds the application router around a shared service.
pub fn router(service: GameService) -> Router {
    Router::new()
        .route("/games", post(create_game))
        .route("/games/{game_id}", get(get_game))
        .route("/games/{game_id}/pits/{pit_id}", put(make_move))
        .layer(middleware::from_fn(trace::trace_request))
        .with_state(service)
}

/// `POST /games` - starts a new game.
#[instrument(skip(service, headers))]
async fn create_game(
    State(service): State<GameService>,
    headers: HeaderMap,
) -> (StatusCode, Json<GameResponse>) {
    let game = service.create_game();

    let uri = match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{}/games/{}", host, game.id()),
        None => format!("/games/{}", game.id()),
    };

    let response = GameResponse {
        id: game.id().clone(),
        uri: Some(uri),
        status: None,
        player_message: None,
    };
    (StatusCode::CREATED, Json(response))
}

/// `GET /games/{game_id}` - fetches the current state of a game.
#[instrument(skip(service))]
async fn get_game(
    State(service): State<GameService>,
    Path(game_id): Path<String>,
) -> Result<Json<GameResponse>, GameError> {
    validate_game_id(&game_id)?;
    let game = service.get_game(&game_id)?;
    Ok(Json(game_view(&game)))
}

/// `PUT /games/{game_id}/pits/{pit_id}` - applies a move on the 1-based pit.
#[instrument(skip(service))]
async fn make_move(
    State(service): State<GameService>,
    Path((game_id, pit_id)): Path<(String, usize)>,
) -> Result<Json<GameResponse>, GameError> {
    validate_game_id(&game_id)?;
    validate_pit_number(pit_id)?;
    let game = service.make_move(&game_id, pit_id - 1)?;
    Ok(Json(game_view(&game)))
}

fn validate_game_id(game_id: &str) -> Result<(), GameError> {
    if game_id.len() != GAME_ID_LENGTH {
        return Err(GameError::InvalidGame);
    }
    Ok(())
}

/// Shape check for the 1-based pit number: range first, stores second.
fn validate_pit_number(pit_id: usize) -> Result<(), GameError> {
    if !(1..=board::SLOTS).contains(&pit_id) {
        return Err(GameError::InvalidPit {
            reason: "Invalid Pit".to_string(),
        });
    }
    if pit_id == board::STORE_ONE + 1 || pit_id == board::STORE_TWO + 1 {
        return Err(GameError::InvalidPit {
            reason: "Coins from the house are not allowed to move. Please choose a pit"
                .to_string(),
        });
    }
    Ok(())
}

fn game_view(game: &Game) -> GameResponse {
    GameResponse {
        id: game.id().clone(),
        uri: None,
        status: Some(pit_status(game)),
        player_message: Some(player_message(game)),
    }
}

/// Maps the board into the wire shape: 1-based pit number to stone count.
fn pit_status(game: &Game) -> BTreeMap<usize, u32> {
    game.board()
        .slots()
        .iter()
        .enumerate()
        .map(|(index, &stones)| (index + 1, stones))
        .collect()
}

fn player_message(game: &Game) -> String {
    match *game.status() {
        GameStatus::Created | GameStatus::InProgress => match *game.turn() {
            Player::One => "First Player should move the coin(s)".to_string(),
            Player::Two => "Second Player should move the coin(s)".to_string(),
        },
        status => format!("Game is completed with game status {}", status),
    }
}
