//! Keyboard mapping for the terminal UI.

use crossterm::event::KeyCode;
use strictly_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a square.
    Cursor(Position),
    /// Select the cell under the cursor.
    SelectCursor,
    /// Select a cell directly (digit keys 1-9).
    Select(Position),
    /// Clear the board.
    Reset,
    /// Switch to the next difficulty preset.
    CycleDifficulty,
    /// Swap which mark moves first.
    ToggleFirst,
    /// Leave the game.
    Quit,
    /// Key has no binding.
    None,
}

/// Maps a key to an action given the current cursor.
pub fn action_for(key: KeyCode, cursor: Position) -> Action {
    match key {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Action::Cursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::SelectCursor,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_cell_number(d as usize))
            .map_or(Action::None, Action::Select),
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('d') => Action::CycleDifficulty,
        KeyCode::Char('f') => Action::ToggleFirst,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
