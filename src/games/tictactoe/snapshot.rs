//! Immutable view of a session handed to the presentation layer.

use super::rules::winning_line;
use super::{Board, Difficulty, GameStatus, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to render one frame.
///
/// Built fresh after each input; holds no references back into the session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents.
    board: Board,
    /// Status recomputed from `board`.
    status: GameStatus,
    /// Mark to move next (the last mover once the game is over).
    current: Player,
    /// Configured computer strength.
    difficulty: Difficulty,
    /// Mark played by the computer, if any.
    computer: Option<Player>,
    /// Most recently filled square.
    last_move: Option<Position>,
    /// Most recent square taken by the computer since the last reset.
    computer_move: Option<Position>,
    /// Squares of the completed line, when won.
    winning_line: Option<[Position; 3]>,
}

impl Snapshot {
    pub(crate) fn capture(
        board: &Board,
        status: GameStatus,
        current: Player,
        difficulty: Difficulty,
        computer: Option<Player>,
        last_move: Option<Position>,
        computer_move: Option<Position>,
    ) -> Self {
        Self {
            board: board.clone(),
            status,
            current,
            difficulty,
            computer,
            last_move,
            computer_move,
            winning_line: winning_line(board).map(|(_, line)| line),
        }
    }

    /// Winning mark, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// One-line status text for display.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::Ongoing if self.computer == Some(self.current) => {
                format!("Computer ({}) to move", self.current)
            }
            GameStatus::Ongoing => format!("Player {}'s turn", self.current),
            terminal => terminal.to_string(),
        }
    }
}
