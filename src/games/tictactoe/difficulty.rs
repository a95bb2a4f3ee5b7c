//! Computer difficulty presets.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// Strength of the computer opponent.
///
/// `Easy` and `Medium` both pick uniformly at random. `Medium` has no
/// heuristic of its own yet and plays exactly like `Easy`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Random legal move.
    #[default]
    Easy,
    /// Random legal move (placeholder preset).
    Medium,
    /// Full minimax search.
    Hard,
}

impl Difficulty {
    /// Next preset, wrapping from `Hard` back to `Easy`.
    pub fn next(self) -> Self {
        Self::iter()
            .cycle()
            .skip_while(|d| *d != self)
            .nth(1)
            .unwrap_or_default()
    }
}
