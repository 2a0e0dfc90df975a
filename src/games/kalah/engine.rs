//! Move execution: sowing, capture, completion detection and sweep.
//!
//! [`apply_move`] is a pure function from `(board, player, pit)` to a new
//! board plus an outcome. It never touches its input and never returns a
//! partially applied state: a rejected move yields only a [`MoveError`].

use super::board::{self, Board, SLOTS, STORE_ONE, STORE_TWO};
use super::types::Player;
use derive_more::{Display, Error};
use std::cmp::Ordering;

/// What a successfully executed move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Sowing ended in a non-final position; the named player moves next.
    TurnAdvances {
        /// Owner of the board side the last stone landed on.
        next_player: Player,
    },
    /// One side's pits emptied; the sweep has been applied to the board.
    GameOver {
        /// Player with the fuller store, or `None` for a draw.
        winner: Option<Player>,
    },
}

/// Rejection reasons for a proposed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index does not address a slot on the board.
    #[display("Selected pit is not on the board")]
    OutOfRange,
    /// Stores are never a legal move source.
    #[display("Coins from the house are not allowed to move")]
    StorePit,
    /// The chosen pit holds no stones.
    #[display("No coins are present in the selected pit. Please choose another pit")]
    EmptyPit,
}

/// Executes one move: sows the stones of the 0-based pit `pit`, applies the
/// capture rule, and detects game completion.
///
/// `player` is the mover whose turn is being taken; captures and the next
/// turn are credited to them. The sowing walk drops one stone per slot and
/// passes over two slots without dropping anything: the store across the
/// board from the chosen pit (the skip rule follows the pit's side, not the
/// mover - the lifecycle layer may let an opening move start on either side)
/// and the origin pit itself, whose stones are all in flight.
///
/// # Errors
///
/// Returns a [`MoveError`] without building a new board when `pit` is out of
/// range, a store, or empty.
pub fn apply_move(
    board: &Board,
    player: Player,
    pit: usize,
) -> Result<(Board, MoveOutcome), MoveError> {
    if pit >= SLOTS {
        return Err(MoveError::OutOfRange);
    }
    if board::is_store(pit) {
        return Err(MoveError::StorePit);
    }

    let mut slots = *board.slots();
    let mut stones = slots[pit] as usize;
    if stones == 0 {
        return Err(MoveError::EmptyPit);
    }

    let skipped_store = if pit < STORE_ONE { STORE_TWO } else { STORE_ONE };

    let mut last = pit;
    let mut step = 1;
    while step <= stones {
        let next = (pit + step) % SLOTS;
        if next == skipped_store || next == pit {
            // The stone meant for this slot carries over to the next one.
            stones += 1;
        } else {
            slots[next] += 1;
            last = next;
        }
        step += 1;
    }

    // Every stone of the source pit has been distributed.
    slots[pit] = 0;

    apply_capture(&mut slots, player, last);

    let sown = Board::from(slots);
    debug_assert_eq!(sown.total(), board.total());

    if side_cleared(&sown) {
        let swept = sweep(sown);
        debug_assert_eq!(swept.total(), board.total());
        let winner = winner_by_stores(&swept);
        return Ok((swept, MoveOutcome::GameOver { winner }));
    }

    let next_player = if last <= STORE_ONE {
        Player::One
    } else {
        Player::Two
    };
    Ok((sown, MoveOutcome::TurnAdvances { next_player }))
}

/// Capture rule: when the last stone lands in the mover's own previously
/// empty pit, that stone and all stones in the opposite pit move into the
/// mover's store.
fn apply_capture(slots: &mut [u32; SLOTS], player: Player, last: usize) {
    if board::is_store(last) || slots[last] != 1 || !board::is_own_pit(player, last) {
        return;
    }
    let opposite = board::opposite_index(last);
    let store = board::store_index(player);
    slots[store] += slots[last] + slots[opposite];
    slots[last] = 0;
    slots[opposite] = 0;
}

/// The game ends as soon as either side's six playing pits are all empty.
fn side_cleared(board: &Board) -> bool {
    board.pit_sum(Player::One) == 0 || board.pit_sum(Player::Two) == 0
}

/// End-of-game sweep: each player keeps the stones remaining in their own
/// pits, moved into their own store. All twelve playing pits end at zero.
fn sweep(board: Board) -> Board {
    let mut slots = *board.slots();
    for player in [Player::One, Player::Two] {
        let store = board::store_index(player);
        for index in board::pit_range(player) {
            slots[store] += slots[index];
            slots[index] = 0;
        }
    }
    Board::from(slots)
}

/// Compares the stores of a swept board.
fn winner_by_stores(board: &Board) -> Option<Player> {
    match board.get(STORE_ONE).cmp(&board.get(STORE_TWO)) {
        Ordering::Greater => Some(Player::One),
        Ordering::Less => Some(Player::Two),
        Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sowing_passes_through_own_store() {
        let board = Board::new();
        let (next, outcome) = apply_move(&board, Player::One, 2).unwrap();
        // Four stones from pit 2 land in pits 3-5 and the store; ending in
        // the own store keeps the turn on the landing side's owner.
        assert_eq!(next.slots(), &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
        assert_eq!(
            outcome,
            MoveOutcome::TurnAdvances {
                next_player: Player::One
            }
        );
    }

    #[test]
    fn full_lap_skips_opponent_store_and_origin() {
        // Thirteen stones from pit 9 lap the whole board. The walk passes
        // over the first player's store and the origin pit, so the lap's
        // final stone reaches pit 10 a second time.
        let board = Board::from([4, 4, 4, 4, 4, 4, 0, 4, 4, 13, 4, 4, 4, 0]);
        let (next, outcome) = apply_move(&board, Player::Two, 9).unwrap();
        assert_eq!(next.slots(), &[5, 5, 5, 5, 5, 5, 0, 5, 5, 0, 6, 5, 5, 1]);
        assert_eq!(next.total(), board.total());
        assert_eq!(
            outcome,
            MoveOutcome::TurnAdvances {
                next_player: Player::Two
            }
        );
    }

    #[test]
    fn capture_fires_even_when_opposite_pit_is_empty() {
        let board = Board::from([0, 2, 0, 0, 0, 0, 3, 6, 0, 5, 0, 0, 0, 0]);
        // Two stones from pit 1 end in empty pit 3; the opposite pit 10 is
        // empty, so only the landing stone reaches the store.
        let (next, _) = apply_move(&board, Player::One, 1).unwrap();
        assert_eq!(next.get(3), 0);
        assert_eq!(next.get(STORE_ONE), 4);
    }

    #[test]
    fn no_capture_when_landing_pit_was_occupied() {
        let board = Board::from([3, 1, 1, 1, 0, 0, 0, 4, 4, 4, 4, 4, 4, 0]);
        let (next, _) = apply_move(&board, Player::One, 0).unwrap();
        // The last stone lands in pit 3, which already held a stone.
        assert_eq!(next.get(3), 2);
        assert_eq!(next.get(board::opposite_index(3)), 4);
        assert_eq!(next.get(STORE_ONE), 0);
    }

    #[test]
    fn capture_for_second_player_uses_their_store() {
        let board = Board::from([4, 4, 4, 4, 4, 4, 0, 1, 0, 4, 4, 4, 4, 2]);
        let (next, _) = apply_move(&board, Player::Two, 7).unwrap();
        // One stone from pit 7 lands in empty pit 8; opposite is pit 1.
        assert_eq!(next.get(8), 0);
        assert_eq!(next.get(1), 0);
        assert_eq!(next.get(STORE_TWO), 2 + 1 + 4);
    }

    #[test]
    fn store_and_out_of_range_pits_are_rejected() {
        let board = Board::new();
        assert_eq!(
            apply_move(&board, Player::One, STORE_ONE),
            Err(MoveError::StorePit)
        );
        assert_eq!(
            apply_move(&board, Player::Two, STORE_TWO),
            Err(MoveError::StorePit)
        );
        assert_eq!(
            apply_move(&board, Player::One, SLOTS),
            Err(MoveError::OutOfRange)
        );
    }

    #[test]
    fn draw_when_swept_stores_match() {
        let board = Board::from([0, 0, 0, 0, 0, 1, 23, 1, 0, 0, 0, 0, 0, 23]);
        let (next, outcome) = apply_move(&board, Player::One, 5).unwrap();
        assert_eq!(next.get(STORE_ONE), 24);
        assert_eq!(next.get(STORE_TWO), 24);
        assert_eq!(outcome, MoveOutcome::GameOver { winner: None });
    }
}
