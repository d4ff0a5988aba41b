//! Pieces and their identities.

use super::{Cell, Player, Size};
use serde::Serialize;

/// Number of pieces each player owns.
pub const PIECES_PER_PLAYER: usize = 6;

/// Total number of pieces in a game.
pub const PIECE_COUNT: usize = 2 * PIECES_PER_PLAYER;

/// Size of the piece starting in each reserve slot.
const SLOT_SIZES: [Size; PIECES_PER_PLAYER] = [
    Size::Small,
    Size::Small,
    Size::Medium,
    Size::Medium,
    Size::Large,
    Size::Large,
];

/// Stable identity of one of the twelve pieces.
///
/// Player A owns ids 0-5 and Player B owns 6-11, each in reserve
/// slot order (small, small, medium, medium, large, large).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_more::Display,
)]
#[display("#{}", _0)]
pub struct PieceId(u8);

impl PieceId {
    /// Returns the id for `index`, or `None` past the last piece.
    pub fn new(index: usize) -> Option<Self> {
        (index < PIECE_COUNT).then_some(Self(index as u8))
    }

    /// Index into a flat piece table (0-11).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The player who owns this piece.
    pub fn owner(self) -> Player {
        if self.index() < PIECES_PER_PLAYER {
            Player::A
        } else {
            Player::B
        }
    }

    /// All twelve ids in order.
    pub fn all() -> impl Iterator<Item = PieceId> {
        (0..PIECE_COUNT as u8).map(PieceId)
    }
}

/// A physical piece.
///
/// Not `Clone`: each piece lives in exactly one container (a reserve
/// slot or a board stack) and is moved between them.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Piece {
    id: PieceId,
    owner: Player,
    size: Size,
}

impl Piece {
    pub(crate) fn new(id: PieceId, owner: Player, size: Size) -> Self {
        Self { id, owner, size }
    }

    /// Returns the piece's identity.
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Returns the owning player.
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Returns the size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns a copyable description of this piece.
    pub fn info(&self) -> PieceInfo {
        PieceInfo {
            id: self.id,
            owner: self.owner,
            size: self.size,
        }
    }

    /// Returns true if this piece may be placed over `other`.
    ///
    /// An absent piece is always coverable; otherwise this piece must be
    /// strictly larger. Ownership of `other` is irrelevant.
    pub fn can_cover(&self, other: Option<&Piece>) -> bool {
        other.is_none_or(|other| self.size.can_cover(other.size))
    }

    /// Builds one player's pieces in reserve slot order.
    pub(crate) fn set_for(owner: Player) -> [Piece; PIECES_PER_PLAYER] {
        let base = owner.index() * PIECES_PER_PLAYER;
        std::array::from_fn(|slot| Piece::new(PieceId((base + slot) as u8), owner, SLOT_SIZES[slot]))
    }
}

/// Copyable snapshot of a piece's identity, for views and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceInfo {
    /// Piece identity.
    pub id: PieceId,
    /// Owning player.
    pub owner: Player,
    /// Piece size.
    pub size: Size,
}

/// Where a piece currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Location {
    /// In its owner's reserve, at the given slot.
    Reserve {
        /// Slot index in presentation order.
        slot: usize,
    },
    /// Somewhere in the stack at the given cell.
    Board(Cell),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_cover_empty() {
        let piece = Piece::new(PieceId(0), Player::A, Size::Small);
        assert!(piece.can_cover(None));
    }

    #[test]
    fn test_can_cover_ignores_owner() {
        let large = Piece::new(PieceId(4), Player::A, Size::Large);
        let own_medium = Piece::new(PieceId(2), Player::A, Size::Medium);
        let their_medium = Piece::new(PieceId(8), Player::B, Size::Medium);
        assert!(large.can_cover(Some(&own_medium)));
        assert!(large.can_cover(Some(&their_medium)));
    }

    #[test]
    fn test_cannot_cover_equal_or_larger() {
        let medium = Piece::new(PieceId(2), Player::A, Size::Medium);
        let their_medium = Piece::new(PieceId(8), Player::B, Size::Medium);
        let their_large = Piece::new(PieceId(10), Player::B, Size::Large);
        assert!(!medium.can_cover(Some(&their_medium)));
        assert!(!medium.can_cover(Some(&their_large)));
    }

    #[test]
    fn test_set_layout() {
        let set = Piece::set_for(Player::B);
        let sizes: Vec<_> = set.iter().map(Piece::size).collect();
        assert_eq!(
            sizes,
            vec![Size::Small, Size::Small, Size::Medium, Size::Medium, Size::Large, Size::Large]
        );
        assert!(set.iter().all(|p| p.owner() == Player::B));
        assert_eq!(set[0].id().index(), 6);
        assert_eq!(set[5].id().index(), 11);
    }
}
