//! Strictly Tic-Tac-Toe - Unified CLI
//!
//! Terminal game, headless simulation and board analysis.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SessionArgs};
use serde::Serialize;
use strictly_tictactoe::{
    Board, Difficulty, GameStatus, Minimax, Player, ScoredMove, SessionConfig, legal_moves,
    search, simulate, terminal_status,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli.session)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run(config),
        Command::Simulate {
            games,
            opponent,
            opponent_seed,
            json,
        } => {
            init_stderr_logging();
            run_simulate(&config, games, opponent, opponent_seed, json)
        }
        Command::Analyze {
            board,
            player,
            json,
        } => {
            init_stderr_logging();
            run_analyze(&config, &board, player, json)
        }
    }
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the config file (if any) and applies command-line overrides.
fn load_config(args: &SessionArgs) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => SessionConfig::default(),
    };

    if let Some(first) = args.first {
        config = config.with_starting_mark(first);
    }
    if let Some(difficulty) = args.difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(computer) = args.computer {
        config = config.with_computer(Some(computer));
    }
    if args.no_computer {
        config = config.with_computer(None);
    }
    if args.seed.is_some() {
        config = config.with_seed(args.seed);
    }
    Ok(config)
}

/// Run a batch of headless games
#[instrument(skip(config))]
fn run_simulate(
    config: &SessionConfig,
    games: usize,
    opponent: Difficulty,
    opponent_seed: Option<u64>,
    json: bool,
) -> Result<()> {
    info!("Starting simulation");
    let tally = simulate(config, games, opponent, opponent_seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!(
            "{} games (computer: {}, {} vs {} opponent)",
            tally.games(),
            config
                .computer()
                .map_or_else(|| "none".to_string(), |p| p.to_string()),
            config.difficulty(),
            opponent
        );
        println!("  X wins: {}", tally.x_wins());
        println!("  O wins: {}", tally.o_wins());
        println!("  Draws:  {}", tally.draws());
    }
    Ok(())
}

/// Analysis report for one board.
#[derive(Debug, Serialize)]
struct Analysis {
    board: String,
    status: GameStatus,
    legal_moves: Vec<usize>,
    player: Option<Player>,
    scores: Vec<ScoredMove>,
    best: Option<usize>,
    nodes: u64,
}

/// Print status, legal moves and minimax scores for a board
#[instrument(skip(config))]
fn run_analyze(
    config: &SessionConfig,
    board: &str,
    player: Option<Player>,
    json: bool,
) -> Result<()> {
    let board: Board = board.parse()?;
    let status = terminal_status(&board);
    let moves = legal_moves(&board);

    let player = match status {
        GameStatus::Ongoing => Some(player.unwrap_or_else(|| side_to_move(&board, config))),
        _ => None,
    };
    let (scores, stats) = match player {
        Some(p) => Minimax::new(p).score_moves(&board),
        None => (Vec::new(), Default::default()),
    };
    let best = search::first_maximum(&scores).map(|m| m.position().to_index());

    let analysis = Analysis {
        board: board.to_string(),
        status,
        legal_moves: moves.iter().map(|p| p.to_index()).collect(),
        player,
        scores,
        best,
        nodes: *stats.nodes(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{}\n", board.display());
    println!("Status: {}", analysis.status);
    println!("Legal moves: {:?}", analysis.legal_moves);
    if let Some(p) = analysis.player {
        println!("Scores for {} ({} nodes):", p, analysis.nodes);
        for m in &analysis.scores {
            let marker = if Some(m.position().to_index()) == analysis.best {
                " *"
            } else {
                ""
            };
            println!(
                "  {} {:<13} {:+}{}",
                m.position().to_index(),
                m.position().label(),
                m.score(),
                marker
            );
        }
    }
    Ok(())
}

/// Mark to move judged by counts; equal counts mean the starting mark is up.
fn side_to_move(board: &Board, config: &SessionConfig) -> Player {
    let first = *config.starting_mark();
    if board.count(first) > board.count(first.opponent()) {
        first.opponent()
    } else {
        first
    }
}
