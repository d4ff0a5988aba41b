//! Read-only snapshot for presentation layers.

use super::phases::GameStatus;
use super::{Cell, Game, Location, Piece, PieceInfo, Player};
use serde::Serialize;

/// Where a selected piece should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Anchor {
    /// A reserve slot.
    Reserve {
        /// Owner of the reserve.
        player: Player,
        /// Slot index.
        slot: usize,
    },
    /// A board cell.
    Board(Cell),
}

/// The currently selected piece and its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    /// The selected piece.
    pub piece: PieceInfo,
    /// Where it is drawn.
    pub anchor: Anchor,
}

/// What is visible in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// The cell.
    pub cell: Cell,
    /// The top piece, if any.
    pub top: Option<PieceInfo>,
    /// Number of pieces stacked here, including the top.
    pub depth: usize,
}

/// One player's unplaced pieces in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReserveView {
    /// Owner.
    pub player: Player,
    /// `(slot, piece)` pairs in slot order.
    pub pieces: Vec<(usize, PieceInfo)>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Player to move.
    pub turn: Player,
    /// Whether the game is over, and how.
    pub status: GameStatus,
    /// Current selection.
    pub selection: Option<SelectionView>,
    /// All nine cells in row-major order.
    pub cells: Vec<CellView>,
    /// Player A's then Player B's reserve.
    pub reserves: Vec<ReserveView>,
}

impl GameView {
    /// Captures `game`.
    pub fn from_game(game: &Game) -> Self {
        let selection = game.selection().and_then(|selection| {
            let piece = game.piece(selection.piece)?.info();
            let anchor = match selection.origin {
                Location::Reserve { slot } => Anchor::Reserve {
                    player: piece.owner,
                    slot,
                },
                Location::Board(cell) => Anchor::Board(cell),
            };
            Some(SelectionView { piece, anchor })
        });

        let cells = Cell::ALL
            .iter()
            .map(|cell| CellView {
                cell: *cell,
                top: game.board().top(*cell).map(Piece::info),
                depth: game.board().stack(*cell).len(),
            })
            .collect();

        let reserves = [Player::A, Player::B]
            .into_iter()
            .map(|player| ReserveView {
                player,
                pieces: game
                    .reserve(player)
                    .remaining()
                    .map(|(slot, piece)| (slot, piece.info()))
                    .collect(),
            })
            .collect();

        Self {
            turn: game.turn(),
            status: game.status(),
            selection,
            cells,
            reserves,
        }
    }

    /// Headline text: whose turn it is, or how the game ended.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn", self.turn),
            GameStatus::Won(player) => format!("{} wins!", player),
            GameStatus::Draw => "Game ends in a draw!".to_string(),
        }
    }

    /// The view of `cell`.
    pub fn cell(&self, cell: Cell) -> &CellView {
        &self.cells[cell.index()]
    }

    /// The reserve view for `player`.
    pub fn reserve(&self, player: Player) -> &ReserveView {
        &self.reserves[player.index()]
    }
}
