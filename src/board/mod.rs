pub mod kalaha;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pit index on a seat's side, 1..=6. Pit `i` is `7 - i` steps away from its store.
pub type Pit = usize;

pub const PITS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self { Seat::One => Seat::Two, Seat::Two => Seat::One }
    }

    pub fn number(self) -> u8 {
        match self { Seat::One => 1, Seat::Two => 2 }
    }

    pub fn from_number(n: u8) -> Option<Seat> {
        match n { 1 => Some(Seat::One), 2 => Some(Seat::Two), _ => None }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.number()) }
}

/// Result state of a position: still being played, drawn, or won by a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Draw,
    Won(Seat),
}

/// Rules surface the search consumes. Implementors own the sowing, capture,
/// bonus-turn and end-of-game rules; the search only clones and queries.
///
/// `clone` must produce a fully independent position.
pub trait Board: Clone {
    fn move_is_legal(&self, pit: Pit) -> bool;
    /// Sow `pit` for the seat to move. Caller guarantees `move_is_legal(pit)`.
    fn apply_move(&mut self, pit: Pit);
    fn seat_to_move(&self) -> Seat;
    fn outcome(&self) -> Outcome;
    fn score(&self, seat: Seat) -> i32;
    fn seeds_in_pit(&self, pit: Pit, seat: Seat) -> i32;

    fn legal_moves(&self) -> Vec<Pit> {
        (1..=PITS).rev().filter(|&p| self.move_is_legal(p)).collect()
    }
}
