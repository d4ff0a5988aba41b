//! Strict stacking: sizes grow from the bottom of every stack up.

use super::super::{Cell, Game};
use super::Invariant;

/// Invariant: every piece sits on a strictly smaller one.
pub struct StrictStackingInvariant;

impl Invariant<Game> for StrictStackingInvariant {
    fn holds(game: &Game) -> bool {
        Cell::ALL.iter().all(|cell| {
            game.board()
                .stack(*cell)
                .windows(2)
                .all(|pair| pair[1].size().can_cover(pair[0].size()))
        })
    }

    fn description() -> &'static str {
        "Stack sizes strictly increase from bottom to top"
    }
}
