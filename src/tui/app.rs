//! Application state and key handling.

use super::input::{Action, action_for};
use crossterm::event::KeyCode;
use strictly_tictactoe::{GameSession, Position, SessionConfig, Snapshot};
use tracing::{debug, instrument};

/// Main application state.
///
/// The session is the only game state; rendering works from its snapshot.
pub struct App {
    session: GameSession,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application and lets the computer open if it starts.
    pub fn new(config: SessionConfig) -> Self {
        let mut app = Self {
            session: GameSession::new(config),
            cursor: Position::Center,
            should_quit: false,
        };
        app.session.play_computer_turn();
        app
    }

    /// Current view of the game.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Active configuration.
    pub fn config(&self) -> &SessionConfig {
        self.session.config()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = action_for(key, self.cursor);
        debug!(?action, "Handling key");

        match action {
            Action::Cursor(pos) => self.cursor = pos,
            Action::SelectCursor => {
                self.session.select_cell(self.cursor.to_index());
            }
            Action::Select(pos) => {
                self.cursor = pos;
                self.session.select_cell(pos.to_index());
            }
            Action::Reset => self.restart(),
            Action::CycleDifficulty => {
                let config = self.config().clone();
                let next = config.difficulty().next();
                self.reconfigure(config.with_difficulty(next));
            }
            Action::ToggleFirst => {
                let config = self.config().clone();
                let first = config.starting_mark().opponent();
                self.reconfigure(config.with_starting_mark(first));
            }
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.session.play_computer_turn();
    }

    fn reconfigure(&mut self, config: SessionConfig) {
        self.session.configure(config);
        self.session.play_computer_turn();
    }
}
