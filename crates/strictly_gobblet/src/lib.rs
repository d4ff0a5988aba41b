//! Strictly Gobblet - stacking tic-tac-toe game engine
//!
//! Two players place pieces of three sizes on a 3x3 board, or move a
//! piece they already placed. A piece may cover any strictly smaller
//! piece, whoever owns it. Three visible pieces of one colour in a row,
//! column or diagonal win.
//!
//! # Architecture
//!
//! - **Pieces**: twelve non-`Clone` values, each living in exactly one
//!   reserve slot or board stack
//! - **Board**: nine stacks with placement, removal and win/full checks
//! - **Game**: the turn and selection controller; the only mutator
//! - **InputMapper**: turns activation points into targets
//! - **GameView**: what a renderer reads between activations
//!
//! # Example
//!
//! ```
//! use strictly_gobblet::{Activation, Cell, Game, PieceId, Target};
//!
//! let mut game = Game::new();
//! let small = PieceId::new(0).unwrap();
//! game.activate(Target::Piece(small)).unwrap();
//! let result = game.activate(Target::Cell(Cell::new(1, 1).unwrap()));
//! assert!(matches!(result, Ok(Activation::Placed { .. })));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod cell;
mod contracts;
mod game;
mod geometry;
mod phases;
mod piece;
mod reserve;
mod types;
mod view;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use cell::{BOARD_SIZE, Cell, LINES};
pub use piece::{Location, PIECE_COUNT, PIECES_PER_PLAYER, Piece, PieceId, PieceInfo};
pub use types::{Player, Size};

// Crate-level exports - Containers
pub use board::{Board, Rejected};
pub use reserve::Reserve;

// Crate-level exports - Controller
pub use action::{Activation, MoveError, SelectionRefusal, Target};
pub use contracts::{
    Contract, Exposed, LegalSelection, OwnedByMover, PlaceContract, SelectContract,
    assert_invariants,
};
pub use game::Game;
pub use phases::{GameStatus, Outcome, Phase, Selection};

// Crate-level exports - Presentation surface
pub use geometry::{Geometry, InputMapper, Point, Radii};
pub use view::{Anchor, CellView, GameView, ReserveView, SelectionView};
