use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use kalaha_engine::protocol::ProtocolEngine;
use kalaha_engine::search::eval::evaluate;
use kalaha_engine::selfplay::{generate_games, write_jsonl, SelfPlayParams};
use kalaha_engine::{Board, GameState, Outcome, SearchParams, Searcher, Seat};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kalaha-engine", author, version, about = "Kalaha engine: fixed-depth minimax with alpha-beta pruning")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct SearchArgs {
    /// Ply horizon (overrides --params)
    #[arg(long)]
    depth: Option<u32>,
    /// Disable alpha-beta cutoffs
    #[arg(long)]
    no_pruning: bool,
    /// JSON file with search parameters
    #[arg(long)]
    params: Option<PathBuf>,
}

impl SearchArgs {
    fn resolve(&self) -> Result<SearchParams> {
        let mut p = match &self.params {
            Some(path) => SearchParams::from_json_file(path)
                .with_context(|| format!("loading search params from {}", path.display()))?,
            None => SearchParams::default(),
        };
        if let Some(d) = self.depth { p.depth = d; }
        if self.no_pruning { p.pruning = false; }
        Ok(p)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search a position and print the chosen pit
    Bestmove {
        /// Board text: one_pit1..6;one_store;two_pit1..6;two_store;to_move
        #[arg(long)]
        board: Option<String>,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Print the static evaluation of a position
    Eval {
        #[arg(long)]
        board: String,
        /// Perspective seat (1 or 2); defaults to the seat to move
        #[arg(long)]
        seat: Option<u8>,
    },
    /// Generate engine-vs-engine games as JSON lines
    Selfplay {
        #[arg(long, default_value_t = 10)]
        games: usize,
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
        #[arg(long, default_value_t = 6)]
        depth: u32,
        #[arg(long, default_value_t = 4)]
        random_plies: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        openings: Option<PathBuf>,
        #[arg(long, default_value = "out/selfplay.jsonl")]
        out: PathBuf,
    },
    /// Read commands from stdin (newgame, position, move, go, eval, show, quit)
    Protocol {
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Play one engine-vs-engine game and print every position
    Play {
        #[arg(long)]
        board: Option<String>,
        #[command(flatten)]
        search: SearchArgs,
    },
}

fn parse_board(text: Option<&str>) -> Result<GameState> {
    match text {
        Some(t) => t.parse().with_context(|| format!("invalid board {t:?}")),
        None => Ok(GameState::new()),
    }
}

fn play(mut board: GameState, params: SearchParams) -> Result<()> {
    let mut searcher = Searcher::new(params);
    println!("{}\n", board.render());
    while board.outcome() == Outcome::InProgress {
        let seat = board.seat_to_move();
        let res = searcher.search(&board, seat);
        let Some(pit) = res.best_move else { bail!("no move found for seat {seat}") };
        board.try_move(pit)?;
        println!("seat {} sows pit {} (value {}, {} nodes)", seat, pit, res.value, res.nodes);
        println!("{}\n", board.render());
    }
    match board.outcome() {
        Outcome::Won(s) => println!("seat {s} wins {}-{}", board.score(s), board.score(s.opponent())),
        _ => println!("draw {}-{}", board.score(Seat::One), board.score(Seat::Two)),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Bestmove { board, search } => {
            let board = parse_board(board.as_deref())?;
            let res = Searcher::new(search.resolve()?).search(&board, board.seat_to_move());
            match res.best_move {
                Some(pit) => println!("bestmove {} value {} nodes {}", pit, res.value, res.nodes),
                None => println!("bestmove none value {}", res.value),
            }
        }
        Commands::Eval { board, seat } => {
            let board = parse_board(Some(board.as_str()))?;
            let seat = match seat {
                Some(n) => Seat::from_number(n).with_context(|| format!("invalid seat {n}"))?,
                None => board.seat_to_move(),
            };
            println!("{}", evaluate(&board, seat));
        }
        Commands::Selfplay { games, max_plies, depth, random_plies, seed, openings, out } => {
            let params = SelfPlayParams { games, max_plies, depth, random_plies, seed, openings_path: openings };
            eprintln!("Generating {} games (depth={}, random_plies={}, seed={})", games, depth, random_plies, seed);
            let records = generate_games(&params);
            write_jsonl(&records, &out)?;
            eprintln!("Wrote {} games to {}", records.len(), out.display());
        }
        Commands::Protocol { search } => {
            let mut engine = ProtocolEngine::new(search.resolve()?);
            engine.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::Play { board, search } => {
            play(parse_board(board.as_deref())?, search.resolve()?)?;
        }
    }
    Ok(())
}
