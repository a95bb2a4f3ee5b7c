//! Tests for board rules: win, draw and legal moves.

use proptest::prelude::*;
use strictly_tictactoe::{
    Board, GameStatus, Player, Position, Square, is_draw, legal_moves, rules::LINES,
    terminal_status, winner,
};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(Board::from_squares)
}

fn line_held_by(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|p| board.get(*p) == Square::Occupied(player)))
}

proptest! {
    #[test]
    fn winner_matches_a_uniform_line(board in any_board()) {
        match winner(&board) {
            Some(player) => {
                prop_assert!(line_held_by(&board, player));
            }
            None => {
                prop_assert!(!line_held_by(&board, Player::X));
                prop_assert!(!line_held_by(&board, Player::O));
            }
        }
    }

    #[test]
    fn full_board_without_winner_is_draw(board in any_board()) {
        let full = board.squares().iter().all(|s| *s != Square::Empty);
        if full && winner(&board).is_none() {
            prop_assert!(is_draw(&board));
            prop_assert_eq!(terminal_status(&board), GameStatus::Draw);
        } else {
            prop_assert!(!is_draw(&board));
        }
    }

    #[test]
    fn legal_moves_are_exactly_the_empty_squares(board in any_board()) {
        let moves = legal_moves(&board);
        prop_assert!(moves.windows(2).all(|w| w[0] < w[1]));
        for pos in Position::ALL {
            prop_assert_eq!(moves.contains(&pos), board.is_empty(pos));
        }
    }

    #[test]
    fn rules_do_not_mutate(board in any_board()) {
        let before = board.clone();
        let _ = terminal_status(&board);
        let _ = legal_moves(&board);
        prop_assert_eq!(board, before);
    }
}

#[test]
fn test_last_square_open() {
    let board: Board = "XOX/XOO/OX.".parse().unwrap();
    assert_eq!(winner(&board), None);
    assert_eq!(legal_moves(&board), vec![Position::BottomRight]);
}

#[test]
fn test_top_row_x() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    assert_eq!(winner(&board), Some(Player::X));
    assert_eq!(terminal_status(&board), GameStatus::Won(Player::X));
}

#[test]
fn test_full_board_draw() {
    let board: Board = "XOX/OXO/OXO".parse().unwrap();
    assert_eq!(winner(&board), None);
    assert_eq!(terminal_status(&board), GameStatus::Draw);
}
