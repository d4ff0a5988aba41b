//! Selection integrity: a selection always names a movable piece.

use super::super::{Game, Location, Phase};
use super::Invariant;

/// Invariant: the selected piece belongs to the mover and is exposed.
///
/// Its recorded origin matches where the piece actually is, and if that
/// is a cell, the piece is on top.
pub struct SelectionIntegrityInvariant;

impl Invariant<Game> for SelectionIntegrityInvariant {
    fn holds(game: &Game) -> bool {
        let Phase::Selected(selection) = game.phase() else {
            return true;
        };
        if selection.piece.owner() != game.turn() {
            return false;
        }
        if game.locate(selection.piece) != Some(selection.origin) {
            return false;
        }
        match selection.origin {
            Location::Reserve { .. } => true,
            Location::Board(cell) => game
                .board()
                .top(cell)
                .is_some_and(|top| top.id() == selection.piece),
        }
    }

    fn description() -> &'static str {
        "Selected piece belongs to the mover and is uncovered at its origin"
    }
}
