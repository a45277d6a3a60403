use super::{Board, Outcome, Pit, Seat, PITS};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_SEEDS: i32 = 6;
/// Upper bound on seeds a parsed board may hold in total.
pub const MAX_SEEDS: i32 = 10_000;

// Ring layout: seat One pits 1..6, One store, seat Two pits 1..6, Two store.
const RING: usize = 2 * PITS + 2;
const STORE_ONE: usize = PITS;
const STORE_TWO: usize = 2 * PITS + 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("invalid field {index}: {value:?}")]
    Parse { index: usize, value: String },
    #[error("invalid seat: {0}")]
    InvalidSeat(String),
    #[error("illegal move: pit {pit} for seat {seat}")]
    IllegalMove { pit: Pit, seat: Seat },
    #[error("too many seeds: more than {max} on the board")]
    TooManySeeds { max: i32 },
}

/// A Kalaha position: six pits and a store per seat plus the seat to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    ring: [i32; RING],
    to_move: Seat,
}

impl Default for GameState {
    fn default() -> Self { Self::new() }
}

fn base(seat: Seat) -> usize {
    match seat { Seat::One => 0, Seat::Two => STORE_ONE + 1 }
}

fn store(seat: Seat) -> usize {
    match seat { Seat::One => STORE_ONE, Seat::Two => STORE_TWO }
}

fn slot(seat: Seat, pit: Pit) -> usize { base(seat) + pit - 1 }

impl GameState {
    pub fn new() -> Self { Self::with_seeds(DEFAULT_SEEDS) }

    pub fn with_seeds(seeds: i32) -> Self {
        let mut ring = [seeds; RING];
        ring[STORE_ONE] = 0;
        ring[STORE_TWO] = 0;
        Self { ring, to_move: Seat::One }
    }

    /// Build a position from explicit pit contents (pit 1 first) and stores.
    /// A position with an emptied side is settled immediately.
    pub fn from_parts(one: [i32; PITS], store_one: i32, two: [i32; PITS], store_two: i32, to_move: Seat) -> Self {
        let mut ring = [0; RING];
        ring[..PITS].copy_from_slice(&one);
        ring[STORE_ONE] = store_one;
        ring[STORE_ONE + 1..STORE_TWO].copy_from_slice(&two);
        ring[STORE_TWO] = store_two;
        let mut state = Self { ring, to_move };
        state.settle_if_over();
        state
    }

    pub fn is_over(&self) -> bool {
        self.side_total(Seat::One) == 0 || self.side_total(Seat::Two) == 0
    }

    pub fn side_total(&self, seat: Seat) -> i32 {
        let b = base(seat);
        self.ring[b..b + PITS].iter().sum()
    }

    pub fn total_seeds(&self) -> i32 { self.ring.iter().sum() }

    pub fn try_move(&mut self, pit: Pit) -> Result<(), BoardError> {
        if !self.move_is_legal(pit) {
            return Err(BoardError::IllegalMove { pit, seat: self.to_move });
        }
        self.apply_move(pit);
        Ok(())
    }

    fn settle_if_over(&mut self) {
        if !self.is_over() { return; }
        for seat in [Seat::One, Seat::Two] {
            let swept = self.side_total(seat);
            let b = base(seat);
            self.ring[b..b + PITS].iter_mut().for_each(|s| *s = 0);
            self.ring[store(seat)] += swept;
        }
    }

    /// Multi-line picture with seat Two on top, pits facing their owner.
    pub fn render(&self) -> String {
        let two: Vec<String> = (1..=PITS).rev().map(|p| format!("{:>3}", self.seeds_in_pit(p, Seat::Two))).collect();
        let one: Vec<String> = (1..=PITS).map(|p| format!("{:>3}", self.seeds_in_pit(p, Seat::One))).collect();
        let width = 3 * PITS;
        let mut out = String::new();
        out.push_str(&format!("     {}\n", two.join("")));
        out.push_str(&format!("{:>3}  {:width$}  {:<3}\n", self.ring[STORE_TWO], "", self.ring[STORE_ONE], width = width));
        out.push_str(&format!("     {}\n", one.join("")));
        out.push_str(&format!("to move: seat {}", self.to_move));
        out
    }
}

impl Board for GameState {
    fn move_is_legal(&self, pit: Pit) -> bool {
        (1..=PITS).contains(&pit) && !self.is_over() && self.ring[slot(self.to_move, pit)] > 0
    }

    fn apply_move(&mut self, pit: Pit) {
        let mover = self.to_move;
        let skip = store(mover.opponent());
        let mut idx = slot(mover, pit);
        let mut hand = std::mem::take(&mut self.ring[idx]);
        while hand > 0 {
            idx = (idx + 1) % RING;
            if idx == skip { continue; }
            self.ring[idx] += 1;
            hand -= 1;
        }

        let own_store = store(mover);
        let own_side = base(mover)..base(mover) + PITS;
        if idx != own_store {
            if own_side.contains(&idx) && self.ring[idx] == 1 {
                let opposite = 2 * PITS - idx;
                if self.ring[opposite] > 0 {
                    self.ring[own_store] += self.ring[opposite] + 1;
                    self.ring[opposite] = 0;
                    self.ring[idx] = 0;
                }
            }
            self.to_move = mover.opponent();
        }
        self.settle_if_over();
    }

    fn seat_to_move(&self) -> Seat { self.to_move }

    fn outcome(&self) -> Outcome {
        if !self.is_over() { return Outcome::InProgress; }
        let (a, b) = (self.score(Seat::One), self.score(Seat::Two));
        if a > b { Outcome::Won(Seat::One) } else if b > a { Outcome::Won(Seat::Two) } else { Outcome::Draw }
    }

    fn score(&self, seat: Seat) -> i32 { self.ring[store(seat)] }

    fn seeds_in_pit(&self, pit: Pit, seat: Seat) -> i32 { self.ring[slot(seat, pit)] }
}

impl FromStr for GameState {
    type Err = BoardError;

    /// `one_pit1..one_pit6;one_store;two_pit1..two_pit6;two_store;to_move`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(';').map(str::trim).collect();
        if fields.len() != RING + 1 {
            return Err(BoardError::FieldCount { expected: RING + 1, found: fields.len() });
        }
        let mut ring = [0; RING];
        let mut total: i32 = 0;
        for (i, f) in fields[..RING].iter().enumerate() {
            ring[i] = match f.parse::<i32>() {
                Ok(v) if v >= 0 => v,
                _ => return Err(BoardError::Parse { index: i, value: f.to_string() }),
            };
            total = total
                .checked_add(ring[i])
                .filter(|&t| t <= MAX_SEEDS)
                .ok_or(BoardError::TooManySeeds { max: MAX_SEEDS })?;
        }
        let to_move = fields[RING]
            .parse::<u8>()
            .ok()
            .and_then(Seat::from_number)
            .ok_or_else(|| BoardError::InvalidSeat(fields[RING].to_string()))?;
        let mut state = Self { ring, to_move };
        state.settle_if_over();
        Ok(state)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.ring { write!(f, "{};", v)?; }
        write!(f, "{}", self.to_move)
    }
}
