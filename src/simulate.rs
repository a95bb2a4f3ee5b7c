//! Headless games between the computer and a scripted opponent.

use crate::config::SessionConfig;
use crate::games::tictactoe::{Difficulty, GameStatus, MoveSelector, Player, SelectError};
use crate::session::GameSession;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome counts over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Games played.
    games: usize,
    /// Games won by X.
    x_wins: usize,
    /// Games won by O.
    o_wins: usize,
    /// Drawn games.
    draws: usize,
}

impl Tally {
    fn record(&mut self, status: GameStatus) {
        self.games += 1;
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::Ongoing => {}
        }
    }

    /// Wins for `player`.
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }
}

/// Plays `games` games under `config`.
///
/// Marks not controlled by the computer are played by a selector at
/// `opponent` strength, seeded from `opponent_seed`.
#[instrument(skip(config), fields(difficulty = %config.difficulty()))]
pub fn simulate(
    config: &SessionConfig,
    games: usize,
    opponent: Difficulty,
    opponent_seed: Option<u64>,
) -> Result<Tally, SelectError> {
    let mut session = GameSession::new(config.clone());
    let mut scripted = MoveSelector::new(opponent, opponent_seed);
    let mut tally = Tally::default();

    for game in 0..games {
        session.reset();
        session.play_computer_turn();

        while !session.status().is_terminal() {
            let mark = session.current();
            let position = scripted.select(session.board(), mark)?;
            session.select_cell(position.to_index());
        }

        debug!(game, status = %session.status(), "Game finished");
        tally.record(session.status());
    }

    info!(
        games = tally.games,
        x_wins = tally.x_wins,
        o_wins = tally.o_wins,
        draws = tally.draws,
        "Simulation complete"
    );
    Ok(tally)
}
