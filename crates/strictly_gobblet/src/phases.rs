//! Interaction phases of the turn controller.

use super::{Location, PieceId, Player};
use serde::{Deserialize, Serialize};

/// A piece the player to move has picked up.
///
/// Only a pointer: the piece itself stays in its reserve slot or on its
/// cell until the move completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    /// The selected piece.
    pub piece: PieceId,
    /// Where the piece was when it was picked up.
    pub origin: Location,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins!", player),
            Outcome::Draw => write!(f, "Game ends in a draw!"),
        }
    }
}

/// Where the controller is in the pick-up / put-down cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    /// Nothing selected.
    #[default]
    Idle,
    /// A piece has been picked up and awaits a destination.
    Selected(Selection),
    /// Terminal. No further input is accepted.
    Finished(Outcome),
}

/// Status of the game as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl From<Phase> for GameStatus {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Idle | Phase::Selected(_) => GameStatus::InProgress,
            Phase::Finished(Outcome::Winner(player)) => GameStatus::Won(player),
            Phase::Finished(Outcome::Draw) => GameStatus::Draw,
        }
    }
}
