//! Contract-based validation for controller transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{MoveError, SelectionRefusal};
use super::game::Game;
use super::invariants::{GameInvariants, InvariantSet};
use super::phases::{Phase, Selection};
use super::{Cell, Location, PieceId};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action;
///   yields whatever the transition needs to proceed.
/// - Postcondition: {Q(after)} - must hold once the action is applied.
pub trait Contract<S, A> {
    /// What a satisfied precondition hands to the transition.
    type Granted;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Granted, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Selection Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The piece belongs to the player to move.
pub struct OwnedByMover;

impl OwnedByMover {
    /// Checks that `piece` is the mover's.
    #[instrument(skip(game))]
    pub fn check(piece: &PieceId, game: &Game) -> Result<(), SelectionRefusal> {
        if piece.owner() != game.turn() {
            Err(SelectionRefusal::NotOwned(piece.owner()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The piece is in reserve or tops its cell.
pub struct Exposed;

impl Exposed {
    /// Checks that nothing covers `piece`, returning its location.
    #[instrument(skip(game))]
    pub fn check(piece: &PieceId, game: &Game) -> Result<Location, SelectionRefusal> {
        game.selectable(*piece)
    }
}

/// Composite precondition: a piece is selectable if the mover owns it
/// and nothing covers it.
pub struct LegalSelection;

impl LegalSelection {
    /// Validates all preconditions for picking up `piece`.
    #[instrument(skip(game))]
    pub fn check(piece: &PieceId, game: &Game) -> Result<Location, MoveError> {
        let refuse = |reason| MoveError::IllegalSelection {
            player: game.turn(),
            piece: *piece,
            reason,
        };
        OwnedByMover::check(piece, game).map_err(refuse)?;
        Exposed::check(piece, game).map_err(refuse)
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Contracts
// ─────────────────────────────────────────────────────────────

/// Contract for picking up a piece.
///
/// Preconditions:
/// - Piece belongs to the player to move
/// - Piece is in reserve or on top of its cell
///
/// Postconditions:
/// - All game invariants hold
pub struct SelectContract;

impl Contract<Game, PieceId> for SelectContract {
    type Granted = Location;

    fn pre(game: &Game, piece: &PieceId) -> Result<Location, MoveError> {
        LegalSelection::check(piece, game)
    }

    fn post(after: &Game) -> Result<(), MoveError> {
        check_invariants(after)
    }
}

/// Contract for putting the selected piece down.
///
/// Preconditions:
/// - A piece is selected
///
/// The covering rule is not a precondition: the board enforces it and
/// the controller compensates when it refuses.
///
/// Postconditions:
/// - All game invariants hold
pub struct PlaceContract;

impl Contract<Game, Cell> for PlaceContract {
    type Granted = Selection;

    fn pre(game: &Game, to: &Cell) -> Result<Selection, MoveError> {
        match game.phase() {
            Phase::Selected(selection) => Ok(selection),
            Phase::Idle => Err(MoveError::NothingSelected(*to)),
            Phase::Finished(_) => Err(MoveError::GameOver),
        }
    }

    fn post(after: &Game) -> Result<(), MoveError> {
        check_invariants(after)
    }
}

/// Verifies all invariants using the composed set.
fn check_invariants(game: &Game) -> Result<(), MoveError> {
    GameInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Asserts that all game invariants hold (panic on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    debug_assert!(check_invariants(game).is_ok(), "Game invariants violated");
}
