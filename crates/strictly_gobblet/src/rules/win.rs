//! Win detection logic.

use super::super::{Board, LINES, Player};
use tracing::instrument;

/// Checks whether `player` tops all three cells of any line.
///
/// Every one of the eight lines is examined independently; the first
/// complete line is enough.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|cell| board.top(*cell).is_some_and(|piece| piece.owner() == player))
    })
}

/// Returns a player who has a complete line, checking Player A first.
///
/// A single move can uncover an opponent's line at the same time as it
/// completes the mover's, so both players may hold a line at once.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::A, Player::B]
        .into_iter()
        .find(|player| check_win(board, *player))
}
