//! Exhaustive minimax search for the computer player.
//!
//! The search explores the full game tree below a position with no pruning,
//! no depth limit and no transposition table. Terminal boards score `+1` when
//! the computer has won, `-1` when its opponent has won and `0` on a draw.
//! Depth is recorded for statistics only, so a slow win scores the same as a
//! fast one.
//!
//! Candidate moves are applied to a private scratch board, scored and undone
//! before the next candidate is tried. The caller's board is never touched.

use super::rules::{is_full, legal_moves, winner};
use super::{Board, Player, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a terminal board from the computer's point of view.
pub type Score = i8;

/// Score for a board the computer has won.
pub const WIN: Score = 1;
/// Score for a board the computer has lost.
pub const LOSS: Score = -1;
/// Score for a drawn board.
pub const DRAW: Score = 0;

/// A root move together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct ScoredMove {
    /// Square the computer would take.
    position: Position,
    /// Minimax value after taking it.
    score: Score,
}

/// Counters gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SearchStats {
    /// Boards visited, root children included.
    nodes: u64,
    /// Deepest ply reached below the root.
    max_depth: u32,
}

/// Minimax searcher maximising for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Minimax {
    computer: Player,
}

impl Minimax {
    /// The player this searcher maximises for.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Scores every legal move for the computer, in ascending index order.
    ///
    /// Returns an empty list when the board has no empty squares.
    #[instrument(skip(self, board), fields(computer = %self.computer, board = %board))]
    pub fn score_moves(&self, board: &Board) -> (Vec<ScoredMove>, SearchStats) {
        let mut scratch = board.clone();
        let mut stats = SearchStats::default();

        let scored: Vec<ScoredMove> = legal_moves(board)
            .into_iter()
            .map(|pos| {
                scratch.place(pos, self.computer);
                let score = self.minimax(&mut scratch, 1, false, &mut stats);
                scratch.clear(pos);
                ScoredMove::new(pos, score)
            })
            .collect();

        debug_assert_eq!(&scratch, board);
        debug!(
            nodes = stats.nodes,
            max_depth = stats.max_depth,
            scores = ?scored.iter().map(|m| (m.position.to_index(), m.score)).collect::<Vec<_>>(),
            "Scored root moves"
        );
        (scored, stats)
    }

    /// Best move for the computer: the highest score, earliest index on ties.
    #[instrument(skip(self, board), fields(computer = %self.computer))]
    pub fn best_move(&self, board: &Board) -> Option<Position> {
        let (scored, _) = self.score_moves(board);
        let best = first_maximum(&scored)?;
        debug!(position = %best.position, score = best.score, "Chose move");
        Some(best.position)
    }

    /// Minimax value of `board` with the given side to move.
    ///
    /// `board` is restored before returning.
    pub fn evaluate(&self, board: &mut Board, computer_to_move: bool) -> (Score, SearchStats) {
        let mut stats = SearchStats::default();
        let score = self.minimax(board, 0, computer_to_move, &mut stats);
        (score, stats)
    }

    fn minimax(
        &self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        stats: &mut SearchStats,
    ) -> Score {
        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);

        if let Some(player) = winner(board) {
            return if player == self.computer { WIN } else { LOSS };
        }
        if is_full(board) {
            return DRAW;
        }

        let mover = if maximizing {
            self.computer
        } else {
            self.computer.opponent()
        };
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.place(pos, mover);
            let score = self.minimax(board, depth + 1, !maximizing, stats);
            board.clear(pos);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

/// First move holding the maximum score.
pub fn first_maximum(scored: &[ScoredMove]) -> Option<&ScoredMove> {
    scored.iter().fold(None, |best: Option<&ScoredMove>, candidate| match best {
        Some(current) if current.score >= candidate.score => Some(current),
        _ => Some(candidate),
    })
}
