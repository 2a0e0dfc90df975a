//! Board model: stone counts and addressing helpers.
//!
//! The board carries no game logic of its own; the move engine builds new
//! boards by value instead of mutating a shared one.

use super::types::Player;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of slots on the board: twelve playing pits plus two stores.
pub const SLOTS: usize = 14;

/// Index of the first player's store.
pub const STORE_ONE: usize = 6;

/// Index of the second player's store.
pub const STORE_TWO: usize = 13;

/// Stones on the board at game start: 4 in each of the 12 playing pits.
pub const STARTING_STONES: u32 = 48;

/// Ordered stone counts for all 14 slots.
///
/// Indices 0-5 are the first player's pits and index 6 their store; indices
/// 7-12 are the second player's pits and index 13 their store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: [u32; SLOTS],
}

impl Board {
    /// Creates the starting board.
    pub fn new() -> Self {
        Self {
            slots: [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0],
        }
    }

    /// Returns all slots in board order.
    pub fn slots(&self) -> &[u32; SLOTS] {
        &self.slots
    }

    /// Stones in the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not within `0..14`.
    pub fn get(&self, index: usize) -> u32 {
        self.slots[index]
    }

    /// Total stones in a player's six playing pits, store excluded.
    pub fn pit_sum(&self, player: Player) -> u32 {
        pit_range(player).map(|index| self.slots[index]).sum()
    }

    /// Total stones on the board, stores included.
    pub fn total(&self) -> u32 {
        self.slots.iter().sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[u32; SLOTS]> for Board {
    fn from(slots: [u32; SLOTS]) -> Self {
        Self { slots }
    }
}

/// The six pit indices owned by a player, store excluded.
pub fn pit_range(player: Player) -> RangeInclusive<usize> {
    match player {
        Player::One => 0..=5,
        Player::Two => 7..=12,
    }
}

/// Index of a player's store.
pub fn store_index(player: Player) -> usize {
    match player {
        Player::One => STORE_ONE,
        Player::Two => STORE_TWO,
    }
}

/// True for the two store indices.
pub fn is_store(index: usize) -> bool {
    index == STORE_ONE || index == STORE_TWO
}

/// True if `index` is one of the player's six playing pits.
pub fn is_own_pit(player: Player, index: usize) -> bool {
    pit_range(player).contains(&index)
}

/// The playing pit directly across the board from a playing pit.
///
/// Pits pair up seven slots apart: pit 0 with pit 7, pit 1 with pit 8, and
/// so on. Not defined for stores.
pub fn opposite_index(index: usize) -> usize {
    debug_assert!(!is_store(index) && index < SLOTS);
    if index < STORE_ONE {
        index + 7
    } else {
        index - 7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board_holds_48_stones() {
        let board = Board::new();
        assert_eq!(board.total(), STARTING_STONES);
        assert_eq!(board.get(STORE_ONE), 0);
        assert_eq!(board.get(STORE_TWO), 0);
    }

    #[test]
    fn pit_ranges_exclude_stores() {
        assert!(!pit_range(Player::One).contains(&STORE_ONE));
        assert!(!pit_range(Player::Two).contains(&STORE_TWO));
        assert_eq!(pit_range(Player::One).count(), 6);
        assert_eq!(pit_range(Player::Two).count(), 6);
    }

    #[test]
    fn ownership_is_disjoint() {
        for index in 0..SLOTS {
            assert!(!(is_own_pit(Player::One, index) && is_own_pit(Player::Two, index)));
            if is_store(index) {
                assert!(!is_own_pit(Player::One, index));
                assert!(!is_own_pit(Player::Two, index));
            }
        }
    }

    #[test]
    fn opposite_pairing_is_symmetric() {
        for player in [Player::One, Player::Two] {
            for index in pit_range(player) {
                let opposite = opposite_index(index);
                assert!(is_own_pit(player.opponent(), opposite));
                assert_eq!(opposite_index(opposite), index);
            }
        }
        assert_eq!(opposite_index(1), 8);
        assert_eq!(opposite_index(8), 1);
    }

    #[test]
    fn pit_sum_ignores_stores() {
        let board = Board::from([1, 1, 1, 1, 1, 1, 9, 2, 2, 2, 2, 2, 2, 9]);
        assert_eq!(board.pit_sum(Player::One), 6);
        assert_eq!(board.pit_sum(Player::Two), 12);
    }
}
