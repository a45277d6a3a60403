// Kalaha engine: fixed-depth minimax with alpha-beta pruning
pub mod board;
pub mod protocol;
pub mod search;
pub mod selfplay;

pub use board::kalaha::{BoardError, GameState};
pub use board::{Board, Outcome, Pit, Seat};
pub use search::alphabeta::{choose_move, SearchParams, SearchResult, Searcher};
