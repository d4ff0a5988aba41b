//! Draw detection logic.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if every cell holds at least one piece.
///
/// Stack depth is irrelevant; a cell is full once occupied. A full board
/// with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    Cell::ALL.iter().all(|cell| board.top(*cell).is_some())
}
