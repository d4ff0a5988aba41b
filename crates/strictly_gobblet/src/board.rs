//! The 3x3 grid of piece stacks.

use super::rules;
use super::{Cell, Piece, PieceInfo, Player};
use tracing::{debug, instrument};

/// A placement the board refused.
///
/// Carries the piece back to the caller so it can be re-homed; a
/// rejected piece never disappears.
#[derive(Debug, PartialEq, Eq)]
pub struct Rejected {
    piece: Piece,
    blocker: Option<PieceInfo>,
}

impl Rejected {
    /// The piece that could not be placed.
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// The top piece that blocked the placement, if any.
    ///
    /// `None` means the coordinates were off the board.
    pub fn blocker(&self) -> Option<PieceInfo> {
        self.blocker
    }

    /// Returns ownership of the rejected piece.
    pub fn into_piece(self) -> Piece {
        self.piece
    }
}

/// Stacking tic-tac-toe board.
///
/// Each cell holds a stack, bottom first. Only the top piece of a cell
/// is visible and counts for wins and fullness.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Board {
    stacks: [Vec<Piece>; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `piece` onto `cell` if it can cover the current top.
    #[instrument(skip(self, piece), fields(piece_id = %piece.id(), size = %piece.size()))]
    pub fn place(&mut self, piece: Piece, cell: Cell) -> Result<(), Rejected> {
        let stack = &mut self.stacks[cell.index()];
        if !piece.can_cover(stack.last()) {
            debug!("Placement blocked by larger or equal piece");
            return Err(Rejected {
                piece,
                blocker: stack.last().map(Piece::info),
            });
        }
        stack.push(piece);
        Ok(())
    }

    /// Coordinate form of [`Board::place`]; off-board coordinates are rejected.
    pub fn place_at(&mut self, piece: Piece, row: usize, col: usize) -> Result<(), Rejected> {
        match Cell::new(row, col) {
            Some(cell) => self.place(piece, cell),
            None => Err(Rejected {
                piece,
                blocker: None,
            }),
        }
    }

    /// Pushes a piece back onto the cell it was just lifted from.
    ///
    /// Skips the covering check: whatever the piece was resting on is
    /// smaller, and nothing else can have reached the cell in between.
    pub(crate) fn restore(&mut self, piece: Piece, cell: Cell) {
        debug_assert!(piece.can_cover(self.top(cell)));
        self.stacks[cell.index()].push(piece);
    }

    /// Pops the top piece of `cell`, exposing whatever lies beneath it.
    #[instrument(skip(self))]
    pub fn remove(&mut self, cell: Cell) -> Option<Piece> {
        self.stacks[cell.index()].pop()
    }

    /// Coordinate form of [`Board::remove`].
    pub fn remove_at(&mut self, row: usize, col: usize) -> Option<Piece> {
        Cell::new(row, col).and_then(|cell| self.remove(cell))
    }

    /// Returns the visible piece at `cell`.
    pub fn top(&self, cell: Cell) -> Option<&Piece> {
        self.stacks[cell.index()].last()
    }

    /// Coordinate form of [`Board::top`].
    pub fn top_at(&self, row: usize, col: usize) -> Option<&Piece> {
        Cell::new(row, col).and_then(|cell| self.top(cell))
    }

    /// Returns the whole stack at `cell`, bottom first.
    pub fn stack(&self, cell: Cell) -> &[Piece] {
        &self.stacks[cell.index()]
    }

    /// Iterates over every piece on the board with its cell.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, &Piece)> {
        Cell::ALL
            .into_iter()
            .flat_map(move |cell| self.stack(cell).iter().map(move |piece| (cell, piece)))
    }

    /// Returns true if `player` tops every cell of some line.
    pub fn check_win(&self, player: Player) -> bool {
        rules::check_win(self, player)
    }

    /// Returns true if every cell holds at least one piece.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Formats the visible pieces as a human-readable grid.
    ///
    /// Player A's pieces are upper-case, Player B's lower-case, empty
    /// cells are `.`.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, cell) in Cell::ALL.iter().enumerate() {
            let symbol = match self.top(*cell) {
                None => '.',
                Some(piece) => match piece.owner() {
                    Player::A => piece.size().glyph().to_ascii_uppercase(),
                    Player::B => piece.size().glyph().to_ascii_lowercase(),
                },
            };
            result.push(symbol);
            if i % 3 < 2 {
                result.push('|');
            } else if i < 8 {
                result.push('\n');
            }
        }
        result
    }
}
