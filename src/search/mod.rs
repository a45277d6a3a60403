pub mod alphabeta;
pub mod eval;
