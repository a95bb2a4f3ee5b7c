//! Computer move selection.

use super::rules::legal_moves;
use super::search::Minimax;
use super::{Board, Difficulty, Player, Position};
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks the computer's move according to a [`Difficulty`].
#[derive(Debug, Clone)]
pub struct MoveSelector {
    difficulty: Difficulty,
    rng: StdRng,
}

impl MoveSelector {
    /// Creates a selector. A `seed` makes random presets reproducible.
    #[instrument]
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { difficulty, rng }
    }

    /// The configured preset.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Chooses one legal move for `computer`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError`] when the board has no empty square. Callers
    /// must only ask for a move on a board that is still in play.
    #[instrument(skip(self, board), fields(difficulty = %self.difficulty, board = %board))]
    pub fn select(&mut self, board: &Board, computer: Player) -> Result<Position, SelectError> {
        let moves = legal_moves(board);
        if moves.is_empty() {
            return Err(SelectError::new("No legal moves available"));
        }

        let choice = match self.difficulty {
            Difficulty::Easy | Difficulty::Medium => moves.choose(&mut self.rng).copied(),
            Difficulty::Hard => Minimax::new(computer).best_move(board),
        };

        let position = choice.ok_or_else(|| SelectError::new("Search returned no move"))?;
        debug!(%position, "Selected computer move");
        Ok(position)
    }
}

/// Move selector invoked on a board with no legal moves.
#[derive(Debug, Clone, Display, Error)]
#[display("Select error: {} at {}:{}", message, file, line)]
pub struct SelectError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SelectError {
    /// Creates a new selection error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_presets_pick_legal_moves() {
        let board: Board = "XOX.O.X..".parse().unwrap();
        let legal = legal_moves(&board);
        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            let mut selector = MoveSelector::new(difficulty, Some(7));
            for _ in 0..50 {
                let pos = selector.select(&board, Player::O).unwrap();
                assert!(legal.contains(&pos));
            }
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let board = Board::new();
        let mut a = MoveSelector::new(Difficulty::Easy, Some(42));
        let mut b = MoveSelector::new(Difficulty::Easy, Some(42));
        for _ in 0..10 {
            assert_eq!(
                a.select(&board, Player::O).unwrap(),
                b.select(&board, Player::O).unwrap()
            );
        }
    }

    #[test]
    fn test_medium_plays_exactly_like_easy() {
        let mut easy = MoveSelector::new(Difficulty::Easy, Some(2024));
        let mut medium = MoveSelector::new(Difficulty::Medium, Some(2024));
        let boards: [Board; 3] = [
            Board::new(),
            "X...O....".parse().unwrap(),
            "XOX.O.X..".parse().unwrap(),
        ];
        for board in &boards {
            for _ in 0..20 {
                assert_eq!(
                    easy.select(board, Player::O).unwrap(),
                    medium.select(board, Player::O).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_easy_eventually_covers_every_square() {
        let board = Board::new();
        let mut selector = MoveSelector::new(Difficulty::Easy, Some(1));
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[selector.select(&board, Player::O).unwrap().to_index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_hard_answers_center_with_corner() {
        let board: Board = "....X....".parse().unwrap();
        let mut selector = MoveSelector::new(Difficulty::Hard, None);
        let pos = selector.select(&board, Player::O).unwrap();
        assert!(pos.is_corner());
        assert_eq!(pos, Position::TopLeft);
    }

    #[test]
    fn test_full_board_is_an_error() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        let mut selector = MoveSelector::new(Difficulty::Hard, None);
        assert!(selector.select(&board, Player::O).is_err());
    }
}
