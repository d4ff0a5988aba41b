//! Board coordinates.

use serde::Serialize;
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// A cell on the 3x3 board.
///
/// Only constructible through [`Cell::new`] and friends, so a `Cell`
/// is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell, or `None` if either coordinate is outside `[0, 3)`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates a cell from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row (0-2), top to bottom.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0-2), left to right.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::at(0, 0),
        Cell::at(0, 1),
        Cell::at(0, 2),
        Cell::at(1, 0),
        Cell::at(1, 1),
        Cell::at(1, 2),
        Cell::at(2, 0),
        Cell::at(2, 1),
        Cell::at(2, 2),
    ];
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight winning lines: rows, columns, main diagonal, anti-diagonal.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::at(0, 0), Cell::at(0, 1), Cell::at(0, 2)],
    [Cell::at(1, 0), Cell::at(1, 1), Cell::at(1, 2)],
    [Cell::at(2, 0), Cell::at(2, 1), Cell::at(2, 2)],
    // Columns
    [Cell::at(0, 0), Cell::at(1, 0), Cell::at(2, 0)],
    [Cell::at(0, 1), Cell::at(1, 1), Cell::at(2, 1)],
    [Cell::at(0, 2), Cell::at(1, 2), Cell::at(2, 2)],
    // Diagonals
    [Cell::at(0, 0), Cell::at(1, 1), Cell::at(2, 2)],
    [Cell::at(0, 2), Cell::at(1, 1), Cell::at(2, 0)],
];
