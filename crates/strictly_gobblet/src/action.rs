//! Input targets, transition reports and recoverable errors.
//!
//! Every activation either succeeds with an [`Activation`] describing
//! what changed, or fails with a [`MoveError`] describing why nothing
//! (or only the selection) changed. Both are routine during play.

use super::{Cell, Location, PieceId, PieceInfo, Player};
use serde::{Deserialize, Serialize};

/// What a pointer activation resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Target {
    /// A piece, in a reserve or on top of a cell.
    Piece(PieceId),
    /// A board cell.
    Cell(Cell),
    /// Nothing the engine cares about.
    None,
}

/// State change produced by a successful activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Activation {
    /// A piece was picked up (or the selection switched to it).
    Selected {
        /// The selected piece.
        piece: PieceId,
        /// Where it was picked up from.
        from: Location,
    },
    /// A piece was put down and the turn passed.
    Placed {
        /// The piece that moved.
        piece: PieceId,
        /// Where it came from.
        from: Location,
        /// Where it landed.
        to: Cell,
    },
    /// The move completed a line for the mover.
    Won {
        /// The winner.
        player: Player,
        /// Destination of the winning move.
        to: Cell,
    },
    /// The move filled the board without a line.
    Drawn {
        /// Destination of the final move.
        to: Cell,
    },
}

/// Why a piece may not be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum SelectionRefusal {
    /// The piece belongs to the other player.
    #[display("it belongs to {}", _0)]
    NotOwned(Player),
    /// The piece is buried under a larger one.
    #[display("it is covered")]
    Covered,
}

/// Error that can occur when activating a target.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target piece cannot be picked up by the player to move.
    #[display("{} cannot select piece {}: {}", player, piece, reason)]
    IllegalSelection {
        /// The player to move.
        player: Player,
        /// The refused piece.
        piece: PieceId,
        /// Why it was refused.
        reason: SelectionRefusal,
    },

    /// The destination's top piece is at least as large as the mover.
    #[display("Piece {} cannot be placed at {}", piece, to)]
    IllegalPlacement {
        /// The piece that was put back.
        piece: PieceId,
        /// The refused destination.
        to: Cell,
        /// The top piece that blocked it.
        blocker: PieceInfo,
    },

    /// A cell was activated with nothing selected.
    #[display("No piece selected for {}", _0)]
    NothingSelected(Cell),

    /// The activation resolved to nothing.
    #[display("Nothing to activate")]
    NoTarget,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
