//! Tic-tac-toe engine: board, rules, search and move selection.

mod difficulty;
mod position;
pub mod rules;
pub mod search;
mod selector;
mod snapshot;
mod types;

pub use difficulty::Difficulty;
pub use position::Position;
pub use rules::{is_draw, legal_moves, terminal_status, winner};
pub use search::{Minimax, ScoredMove, SearchStats};
pub use selector::{MoveSelector, SelectError};
pub use snapshot::Snapshot;
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
