//! Piece conservation: all twelve pieces, each in exactly one place.

use super::super::piece::PIECE_COUNT;
use super::super::{Game, Player};
use super::Invariant;

/// Invariant: every piece is in exactly one container.
///
/// Each of the twelve ids appears once across both reserves and all
/// board stacks, and a reserve only holds its owner's pieces.
pub struct PieceConservationInvariant;

impl Invariant<Game> for PieceConservationInvariant {
    fn holds(game: &Game) -> bool {
        let mut seen = [0u8; PIECE_COUNT];

        for player in [Player::A, Player::B] {
            for (_, piece) in game.reserve(player).remaining() {
                if piece.owner() != player || piece.id().owner() != player {
                    return false;
                }
                seen[piece.id().index()] += 1;
            }
        }
        for (_, piece) in game.board().pieces() {
            if piece.id().owner() != piece.owner() {
                return false;
            }
            seen[piece.id().index()] += 1;
        }

        seen.iter().all(|count| *count == 1)
    }

    fn description() -> &'static str {
        "Every piece is in exactly one reserve slot or board stack"
    }
}
