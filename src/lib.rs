//! Strictly Tic-Tac-Toe library - game engine with a minimax opponent
//!
//! # Architecture
//!
//! - **Games**: board model, pure rules, minimax search and move selection
//! - **Session**: turn order and the synchronous computer reply
//! - **Config**: session settings loaded from TOML
//! - **Simulate**: headless batches of computer games
//!
//! Front ends drive a [`GameSession`] with cell selections and render the
//! [`Snapshot`] it returns; the engine never holds UI state.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Difficulty, GameSession, Player, SessionConfig};
//!
//! let mut session = GameSession::new(SessionConfig::new(Player::X, Difficulty::Hard));
//! session.select_cell(4);
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.board().count(Player::O), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;
mod simulate;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Session management
pub use session::{GameSession, IgnoreReason, Move, MoveOutcome, SessionState};

// Crate-level exports - Simulation
pub use simulate::{Tally, simulate};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Difficulty, GameStatus, Minimax, MoveSelector, Player,
    Position, ScoredMove, SearchStats, SelectError, Snapshot, Square, is_draw, legal_moves,
    rules, search, terminal_status, winner,
};
