//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] snapshot. Nothing here mutates or
//! caches; the status of a board is recomputed on every call.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, winner, winning_line};

use super::{Board, GameStatus, Position};
use tracing::instrument;

/// Classifies the board. A completed line takes precedence over a full board.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn terminal_status(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}

/// All empty positions, in ascending index order.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::Player;
    use super::*;

    #[test]
    fn test_empty_board_is_ongoing() {
        let board = Board::new();
        assert_eq!(terminal_status(&board), GameStatus::Ongoing);
        assert_eq!(legal_moves(&board), Position::ALL.to_vec());
    }

    #[test]
    fn test_single_empty_square() {
        let board: Board = "XOXXOOOX.".parse().unwrap();
        assert_eq!(winner(&board), None);
        assert_eq!(legal_moves(&board), vec![Position::BottomRight]);
        assert_eq!(terminal_status(&board), GameStatus::Ongoing);
    }

    #[test]
    fn test_top_row_win() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
        assert_eq!(terminal_status(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_draw() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert_eq!(terminal_status(&board), GameStatus::Draw);
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board: Board = "XXXOOXOXO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(terminal_status(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_legal_moves_ascending() {
        let board: Board = ".X.O.X.O.".parse().unwrap();
        let moves: Vec<usize> = legal_moves(&board).iter().map(|p| p.to_index()).collect();
        assert_eq!(moves, vec![0, 2, 4, 6, 8]);
    }
}
