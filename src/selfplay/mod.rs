use crate::board::kalaha::GameState;
use crate::board::{Board, Outcome, Pit, Seat};
use crate::search::alphabeta::{SearchParams, Searcher};
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub depth: u32,
    pub random_plies: usize, // uniformly random legal moves before the engine takes over
    pub seed: u64,
    pub openings_path: Option<PathBuf>, // optional file of board texts, one per line
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, max_plies: 200, depth: 6, random_plies: 0, seed: 42, openings_path: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub seat: Seat,
    pub pit: Pit,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub start: String,
    pub moves: Vec<MoveRecord>,
    pub final_board: String,
    pub winner: Option<Seat>, // None: draw or unfinished
    pub finished: bool,
    pub score_one: i32,
    pub score_two: i32,
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let openings = load_openings(params);
    let mut searcher = Searcher::new(SearchParams { depth: params.depth, pruning: true });
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let start = if !openings.is_empty() {
            openings[(rng.gen::<u64>() ^ (gi as u64)) as usize % openings.len()].clone()
        } else { GameState::new() };
        let mut board = start.clone();
        let mut moves = Vec::new();
        while moves.len() < params.max_plies && board.outcome() == Outcome::InProgress {
            let seat = board.seat_to_move();
            let pit = if moves.len() < params.random_plies {
                select_random_move(&board, &mut rng)
            } else {
                searcher.choose_move(&board, seat)
            };
            let Some(pit) = pit else { break };
            board.apply_move(pit);
            moves.push(MoveRecord { seat, pit });
        }
        let outcome = board.outcome();
        let record = GameRecord {
            start: start.to_string(),
            moves,
            final_board: board.to_string(),
            winner: match outcome { Outcome::Won(s) => Some(s), _ => None },
            finished: outcome != Outcome::InProgress,
            score_one: board.score(Seat::One),
            score_two: board.score(Seat::Two),
        };
        info!("game {} finished after {} plies: {:?} ({}-{})", gi, record.moves.len(), outcome, record.score_one, record.score_two);
        games.push(record);
    }
    games
}

fn select_random_move(board: &GameState, rng: &mut SmallRng) -> Option<Pit> {
    let moves = board.legal_moves();
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
}

fn load_openings(params: &SelfPlayParams) -> Vec<GameState> {
    let mut out = Vec::new();
    let Some(ref p) = params.openings_path else { return out };
    let text = match std::fs::read_to_string(p) {
        Ok(t) => t,
        Err(e) => { warn!("cannot read openings {}: {}", p.display(), e); return out; }
    };
    for line in text.lines() {
        let raw = line.trim();
        if raw.is_empty() || raw.starts_with('#') { continue; }
        match raw.parse::<GameState>() {
            Ok(b) if b.outcome() == Outcome::InProgress => out.push(b),
            Ok(_) => warn!("skipping finished opening {raw}"),
            Err(e) => warn!("skipping opening {raw}: {e}"),
        }
    }
    out
}

/// Replays a record's moves from its start position.
pub fn replay(game: &GameRecord) -> anyhow::Result<GameState> {
    let mut board: GameState = game.start.parse()?;
    for m in &game.moves {
        anyhow::ensure!(board.seat_to_move() == m.seat, "seat {} recorded, seat {} to move", m.seat, board.seat_to_move());
        board.try_move(m.pit)?;
    }
    Ok(board)
}

pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> anyhow::Result<()> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() { std::fs::create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path.as_ref())?);
    for g in games {
        writeln!(w, "{}", serde_json::to_string(g)?)?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path.as_ref())?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
