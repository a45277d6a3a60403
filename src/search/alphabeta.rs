use crate::board::{Board, Pit, Seat, PITS};
use crate::search::eval::evaluate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DEPTH: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Ply horizon. Every applied move counts, bonus turns included.
    pub depth: u32,
    /// Alpha-beta cutoffs. Off means plain minimax over the same horizon.
    pub pruning: bool,
}

impl Default for SearchParams {
    fn default() -> Self { Self { depth: DEFAULT_DEPTH, pruning: true } }
}

impl SearchParams {
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the root had no legal move; `value` is then the static evaluation.
    pub best_move: Option<Pit>,
    pub value: i32,
    pub nodes: u64,
}

// One recursive invocation. Owns its position; min/max orientation is read
// from the seat to move, never from ply parity, since bonus turns repeat seats.
struct Node<B: Board> {
    position: B,
    perspective: Seat,
    value: i32,
    best_move: Option<Pit>,
}

impl<B: Board> Node<B> {
    fn new(position: B, perspective: Seat) -> Self {
        let mut node = Self { position, perspective, value: 0, best_move: None };
        node.value = if node.is_maximizing() { i32::MIN } else { i32::MAX };
        node
    }

    fn is_maximizing(&self) -> bool { self.position.seat_to_move() == self.perspective }

    // Strict improvement only: ties keep the first (highest) pit examined.
    fn offer(&mut self, score: i32, pit: Pit) {
        let better = if self.is_maximizing() { score > self.value } else { score < self.value };
        if better {
            self.value = score;
            self.best_move = Some(pit);
        }
    }
}

#[derive(Default)]
pub struct Searcher {
    params: SearchParams,
    pub(crate) nodes: u64,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self { Self { params, nodes: 0 } }

    pub fn params(&self) -> SearchParams { self.params }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// Full fixed-depth search for `perspective`. `board` is never mutated; each
    /// explored move is sown on its own clone.
    ///
    /// Precondition: `perspective` should be the seat to move with at least one
    /// legal pit. Otherwise `best_move` is `None` and the value is the static
    /// evaluation of `board`.
    pub fn search<B: Board>(&mut self, board: &B, perspective: Seat) -> SearchResult {
        self.nodes = 0;
        let mut root = Node::new(board.clone(), perspective);
        let value = self.expand(&mut root, 0, i32::MIN, i32::MAX);
        debug!(
            "search seat={} depth={} pruning={} best={:?} value={} nodes={}",
            perspective, self.params.depth, self.params.pruning, root.best_move, value, self.nodes
        );
        SearchResult { best_move: root.best_move, value, nodes: self.nodes }
    }

    pub fn choose_move<B: Board>(&mut self, board: &B, seat: Seat) -> Option<Pit> {
        self.search(board, seat).best_move
    }

    pub fn best_value<B: Board>(&mut self, board: &B, seat: Seat) -> i32 {
        self.search(board, seat).value
    }

    fn expand<B: Board>(&mut self, node: &mut Node<B>, ply: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if ply == self.params.depth {
            return evaluate(&node.position, node.perspective);
        }

        let maximizing = node.is_maximizing();
        let mut explored = false;
        for pit in (1..=PITS).rev() {
            if !node.position.move_is_legal(pit) { continue; }
            explored = true;

            let mut next = node.position.clone();
            next.apply_move(pit);
            let mut child = Node::new(next, node.perspective);
            let score = self.expand(&mut child, ply + 1, alpha, beta);
            node.offer(score, pit);

            if !self.params.pruning { continue; }
            if maximizing {
                if score > beta { break; }
                alpha = alpha.max(score);
            } else {
                if score < alpha { break; }
                beta = beta.min(score);
            }
        }

        if !explored {
            return evaluate(&node.position, node.perspective);
        }
        node.value
    }
}

/// Pit `seat` should sow from `board`, searched to the default ten plies.
pub fn choose_move<B: Board>(board: &B, seat: Seat) -> Option<Pit> {
    Searcher::default().choose_move(board, seat)
}
