//! Game session: turn order, move application and the computer reply.

use crate::config::SessionConfig;
use crate::games::tictactoe::{
    Board, GameStatus, MoveSelector, Player, Position, Snapshot, terminal_status,
};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// A move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Move {
    /// Mark placed.
    player: Player,
    /// Square it was placed on.
    position: Position,
}

/// Where the session stands between inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the given mark to be placed.
    AwaitingMove(Player),
    /// Game over; only a reset leaves this state.
    Terminal(GameStatus),
}

/// Why a move request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Index outside 0-8.
    OutOfBounds,
    /// Square already holds a mark.
    Occupied,
    /// The game has already been won or drawn.
    GameOver,
}

/// Result of a cell selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was placed, possibly followed by the computer's reply.
    Applied {
        /// Square taken by the requested move.
        position: Position,
        /// Square taken by the computer in the same turn.
        reply: Option<Position>,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Owns the authoritative board for one game.
///
/// All transitions are synchronous: a cell selection that hands the turn to
/// the computer returns only after the computer has moved.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    current: Player,
    selector: MoveSelector,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a session with an empty board.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        info!("Creating new game session");
        let selector = MoveSelector::new(*config.difficulty(), *config.seed());
        Self {
            current: *config.starting_mark(),
            config,
            board: Board::new(),
            selector,
            history: Vec::new(),
        }
    }

    /// Replaces the configuration and resets the game.
    #[instrument(skip(self))]
    pub fn configure(&mut self, config: SessionConfig) {
        info!(
            starting_mark = %config.starting_mark(),
            difficulty = %config.difficulty(),
            "Reconfiguring session"
        );
        self.selector = MoveSelector::new(*config.difficulty(), *config.seed());
        self.config = config;
        self.reset();
    }

    /// Clears the board and restores the configured starting mark.
    ///
    /// Never makes a computer move, so repeated resets leave the same state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(starting_mark = %self.config.starting_mark(), "Resetting game");
        self.board = Board::new();
        self.current = *self.config.starting_mark();
        self.history.clear();
    }

    /// Places the current mark on cell `index` (0-8).
    ///
    /// Invalid requests are dropped without touching the board. When the
    /// move hands the turn to the computer, its reply is played before
    /// returning.
    #[instrument(skip(self), fields(current = %self.current))]
    pub fn select_cell(&mut self, index: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(index) else {
            debug!("Ignoring out-of-bounds cell");
            return MoveOutcome::Ignored(IgnoreReason::OutOfBounds);
        };
        if self.status().is_terminal() {
            debug!("Ignoring move after game over");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !self.board.is_empty(position) {
            debug!(%position, "Ignoring move to occupied cell");
            return MoveOutcome::Ignored(IgnoreReason::Occupied);
        }

        self.apply(position);
        let reply = self.play_computer_turn();
        MoveOutcome::Applied { position, reply }
    }

    /// Lets the computer move if the game is in play and its mark is current.
    ///
    /// Front ends call this when the computer's mark starts the game.
    #[instrument(skip(self), fields(current = %self.current))]
    pub fn play_computer_turn(&mut self) -> Option<Position> {
        if self.status().is_terminal() || !self.config.is_computer(self.current) {
            return None;
        }

        let computer = self.current;
        let position = self
            .selector
            .select(&self.board, computer)
            .unwrap_or_else(|e| {
                error!(error = %e, "Selector invariant broken");
                panic!("Ongoing game always has an empty square: {e}")
            });
        self.apply(position);
        Some(position)
    }

    /// Places the current mark and advances the turn unless the game ended.
    fn apply(&mut self, position: Position) {
        let player = self.current;
        self.board.place(position, player);
        self.history.push(Move::new(player, position));

        let status = self.status();
        info!(%player, %position, %status, "Move applied");
        if !status.is_terminal() {
            self.current = player.opponent();
        }
    }

    /// Status recomputed from the board.
    pub fn status(&self) -> GameStatus {
        terminal_status(&self.board)
    }

    /// Current state-machine state.
    pub fn state(&self) -> SessionState {
        match self.status() {
            GameStatus::Ongoing => SessionState::AwaitingMove(self.current),
            terminal => SessionState::Terminal(terminal),
        }
    }

    /// The authoritative board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move (the last mover once the game is over).
    pub fn current(&self) -> Player {
        self.current
    }

    /// Active configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Moves since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Immutable view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.board,
            self.status(),
            self.current,
            *self.config.difficulty(),
            *self.config.computer(),
            self.history.last().map(|m| m.position),
            self.last_computer_move(),
        )
    }

    /// Most recent square taken by the computer since the last reset.
    fn last_computer_move(&self) -> Option<Position> {
        self.history
            .iter()
            .rev()
            .find(|m| self.config.is_computer(m.player))
            .map(|m| m.position)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
