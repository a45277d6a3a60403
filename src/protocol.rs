use std::io::{self, BufRead, Write};
use log::warn;
use crate::board::kalaha::GameState;
use crate::board::{Board, Seat};
use crate::search::alphabeta::{SearchParams, Searcher};
use crate::search::eval::evaluate;

/// Line-driven front end: one command per line, one or more answer lines.
pub struct ProtocolEngine {
    pos: GameState,
    params: SearchParams,
}

impl Default for ProtocolEngine {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl ProtocolEngine {
    pub fn new(params: SearchParams) -> Self { Self { pos: GameState::new(), params } }

    pub fn position(&self) -> &GameState { &self.pos }

    fn cmd_position<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        match args.parse::<GameState>() {
            Ok(p) => { self.pos = p; writeln!(out, "ok") }
            Err(e) => { warn!("rejected position {args:?}: {e}"); writeln!(out, "error {e}") }
        }
    }

    fn cmd_move<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        let Ok(pit) = args.trim().parse::<usize>() else {
            warn!("rejected move {args:?}");
            return writeln!(out, "error invalid pit {}", args.trim());
        };
        match self.pos.try_move(pit) {
            Ok(()) => writeln!(out, "ok"),
            Err(e) => { warn!("{e}"); writeln!(out, "error {e}") }
        }
    }

    fn cmd_go<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        // go | go depth N
        let mut params = self.params;
        let mut tokens = args.split_whitespace();
        while let Some(tok) = tokens.next() {
            if tok == "depth" {
                let raw = tokens.next().unwrap_or("");
                match raw.parse::<u32>() {
                    Ok(d) => params.depth = d,
                    Err(_) => {
                        warn!("rejected depth {raw:?}");
                        return writeln!(out, "error invalid depth {raw}");
                    }
                }
            }
        }
        let res = Searcher::new(params).search(&self.pos, self.pos.seat_to_move());
        match res.best_move {
            Some(pit) => writeln!(out, "bestmove {} value {}", pit, res.value),
            None => writeln!(out, "bestmove none value {}", res.value),
        }
    }

    fn cmd_eval<W: Write>(&self, args: &str, out: &mut W) -> io::Result<()> {
        let seat = match args.trim() {
            "" => Some(self.pos.seat_to_move()),
            s => s.parse::<u8>().ok().and_then(Seat::from_number),
        };
        match seat {
            Some(seat) => writeln!(out, "eval {}", evaluate(&self.pos, seat)),
            None => writeln!(out, "error invalid seat {}", args.trim()),
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() { continue; }
            let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
            match cmd {
                "quit" => break,
                "newgame" => { self.pos = GameState::new(); writeln!(out, "ok")?; }
                "position" => self.cmd_position(rest, &mut out)?,
                "move" => self.cmd_move(rest, &mut out)?,
                "go" => self.cmd_go(rest, &mut out)?,
                "eval" => self.cmd_eval(rest, &mut out)?,
                "show" => writeln!(out, "{}", self.pos)?,
                _ => writeln!(out, "error unknown command")?,
            }
            out.flush()?;
        }
        Ok(())
    }
}
