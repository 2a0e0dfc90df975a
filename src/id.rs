//! Unique id generation for games and requests.

use uuid::Uuid;

/// Length of a game id.
pub const GAME_ID_LENGTH: usize = 8;

/// Generates a new game id: 8 lowercase hex characters.
pub fn generate_game_id() -> String {
    generate_request_id()[..GAME_ID_LENGTH].to_string()
}

/// Generates a new request correlation id: 32 lowercase hex characters.
pub fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()
}
