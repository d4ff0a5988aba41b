//! Core domain types for stacking tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player A (goes first).
    #[display("Player A")]
    A,
    /// Player B (goes second).
    #[display("Player B")]
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Zero-based index, used to address per-player storage.
    pub(crate) fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

/// Piece size. Declaration order is the covering order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Size {
    /// Smallest piece; covers nothing.
    Small,
    /// Covers small pieces.
    Medium,
    /// Covers small and medium pieces.
    Large,
}

impl Size {
    /// Returns true if a piece of this size may be stacked on `other`.
    pub fn can_cover(self, other: Size) -> bool {
        self > other
    }

    /// Single-character label (`s`, `M`, `L`).
    pub fn glyph(self) -> char {
        match self {
            Size::Small => 's',
            Size::Medium => 'M',
            Size::Large => 'L',
        }
    }
}
