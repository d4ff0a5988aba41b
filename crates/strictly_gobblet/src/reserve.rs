//! Per-player pools of pieces not yet on the board.

use super::piece::PIECES_PER_PLAYER;
use super::{Piece, PieceId, Player};
use tracing::instrument;

/// One player's unplaced pieces.
///
/// Slots are fixed: taking a piece leaves a gap rather than shifting
/// the remaining pieces, so presentation positions stay stable.
#[derive(Debug, PartialEq, Eq)]
pub struct Reserve {
    owner: Player,
    slots: [Option<Piece>; PIECES_PER_PLAYER],
}

impl Reserve {
    /// Creates a full reserve for `owner`.
    #[instrument]
    pub fn new(owner: Player) -> Self {
        Self {
            owner,
            slots: Piece::set_for(owner).map(Some),
        }
    }

    /// Returns the owning player.
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Returns the piece in `slot`, if it has not been placed.
    pub fn get(&self, slot: usize) -> Option<&Piece> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Finds the slot holding piece `id`.
    pub fn slot_of(&self, id: PieceId) -> Option<usize> {
        self.remaining()
            .find(|(_, piece)| piece.id() == id)
            .map(|(slot, _)| slot)
    }

    /// Removes and returns the piece in `slot`.
    #[instrument(skip(self), fields(owner = %self.owner))]
    pub fn take(&mut self, slot: usize) -> Option<Piece> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Returns a piece to the slot it was just taken from.
    pub(crate) fn restore(&mut self, slot: usize, piece: Piece) {
        debug_assert!(self.get(slot).is_none());
        self.slots[slot] = Some(piece);
    }

    /// Iterates over unplaced pieces with their slot, in slot order.
    pub fn remaining(&self) -> impl Iterator<Item = (usize, &Piece)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, piece)| piece.as_ref().map(|piece| (slot, piece)))
    }

    /// Number of unplaced pieces.
    pub fn len(&self) -> usize {
        self.remaining().count()
    }

    /// Returns true once every piece has been placed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
