//! Command-line interface for strictly_tictactoe.

use clap::{Args, Parser, Subcommand};
use strictly_tictactoe::{Difficulty, Player};

/// Strictly Tic-Tac-Toe - play against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe with a minimax computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Session settings
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Flags overriding the session configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Path to a TOML session config
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Mark that moves first (X or O)
    #[arg(long, global = true)]
    pub first: Option<Player>,

    /// Computer strength (easy, medium, hard)
    #[arg(short, long, global = true)]
    pub difficulty: Option<Difficulty>,

    /// Mark played by the computer
    #[arg(long, global = true, conflicts_with = "no_computer")]
    pub computer: Option<Player>,

    /// Two human players, no computer
    #[arg(long, global = true)]
    pub no_computer: bool,

    /// Seed for random move selection
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Play many headless games and report the results
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Strength of the scripted opponent
        #[arg(long, default_value = "easy")]
        opponent: Difficulty,

        /// Seed for the scripted opponent
        #[arg(long)]
        opponent_seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show status, legal moves and minimax scores for a board
    Analyze {
        /// Nine cells of X, O and `.`, optionally split by `/`
        board: String,

        /// Mark to score moves for (inferred from mark counts if omitted)
        #[arg(long = "for")]
        player: Option<Player>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["strictly_tictactoe"]);
        assert!(cli.command.is_none());
        assert!(!cli.session.no_computer);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "strictly_tictactoe",
            "simulate",
            "--games",
            "5",
            "--difficulty",
            "hard",
            "--first",
            "o",
        ]);
        assert_eq!(cli.session.difficulty, Some(Difficulty::Hard));
        assert_eq!(cli.session.first, Some(Player::O));
        assert!(matches!(cli.command, Some(Command::Simulate { games: 5, .. })));
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::parse_from(["strictly_tictactoe", "analyze", "XOX/XOO/OX.", "--for", "x"]);
        match cli.command {
            Some(Command::Analyze { board, player, json }) => {
                assert_eq!(board, "XOX/XOO/OX.");
                assert_eq!(player, Some(Player::X));
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
