//! Screen geometry and pointer hit-testing.
//!
//! The engine never sees raw pointer motion, only activation points.
//! [`InputMapper`] turns such a point into a [`Target`] using the same
//! layout the presentation layer draws with.

use super::action::Target;
use super::cell::BOARD_SIZE;
use super::{Cell, Game, Location, PieceId, Player, Size};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A point in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset, growing rightwards.
    pub x: f32,
    /// Vertical offset, growing downwards.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Hit radius of each piece size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Radii {
    /// Radius of small pieces.
    pub small: f32,
    /// Radius of medium pieces.
    pub medium: f32,
    /// Radius of large pieces.
    pub large: f32,
}

impl Default for Radii {
    fn default() -> Self {
        Self {
            small: 25.0,
            medium: 40.0,
            large: 55.0,
        }
    }
}

/// Where everything is drawn.
///
/// The defaults describe an 800x1000 window: 150-unit squares with the
/// board centred horizontally 200 units from the top, Player A's reserve
/// along the top and Player B's along the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Top-left corner of the board.
    pub board_origin: Point,
    /// Side length of one cell.
    pub square_size: f32,
    /// Centre line of Player A's reserve row.
    pub reserve_y_a: f32,
    /// Centre line of Player B's reserve row.
    pub reserve_y_b: f32,
    /// Centre of reserve slot 0.
    pub reserve_x_start: f32,
    /// Distance between reserve slot centres.
    pub reserve_spacing: f32,
    /// Piece radii.
    pub radii: Radii,
}

impl Default for Geometry {
    fn default() -> Self {
        let square_size = 150.0;
        Self {
            board_origin: Point::new((800.0 - BOARD_SIZE as f32 * square_size) / 2.0, 200.0),
            square_size,
            reserve_y_a: 120.0,
            reserve_y_b: 1000.0 - 120.0,
            reserve_x_start: 100.0,
            reserve_spacing: 80.0,
            radii: Radii::default(),
        }
    }
}

impl Geometry {
    /// Hit radius for `size`.
    pub fn radius(&self, size: Size) -> f32 {
        match size {
            Size::Small => self.radii.small,
            Size::Medium => self.radii.medium,
            Size::Large => self.radii.large,
        }
    }

    /// Total width (and height) of the board.
    pub fn board_extent(&self) -> f32 {
        BOARD_SIZE as f32 * self.square_size
    }

    /// Centre of `cell`.
    pub fn cell_center(&self, cell: Cell) -> Point {
        let half = self.square_size / 2.0;
        Point::new(
            self.board_origin.x + cell.col() as f32 * self.square_size + half,
            self.board_origin.y + cell.row() as f32 * self.square_size + half,
        )
    }

    /// Centre of reserve slot `slot` for `player`.
    pub fn reserve_center(&self, player: Player, slot: usize) -> Point {
        let y = match player {
            Player::A => self.reserve_y_a,
            Player::B => self.reserve_y_b,
        };
        Point::new(self.reserve_x_start + slot as f32 * self.reserve_spacing, y)
    }

    /// The cell containing `point`, if it is on the board.
    ///
    /// Cells are half-open: a point on the right or bottom edge of the
    /// board is off it.
    pub fn cell_at(&self, point: Point) -> Option<Cell> {
        let dx = point.x - self.board_origin.x;
        let dy = point.y - self.board_origin.y;
        let extent = self.board_extent();
        if !(0.0..extent).contains(&dx) || !(0.0..extent).contains(&dy) {
            return None;
        }
        Cell::new(
            (dy / self.square_size) as usize,
            (dx / self.square_size) as usize,
        )
    }

    /// Where piece `id` is drawn in `game`.
    pub fn anchor(&self, game: &Game, id: PieceId) -> Option<Point> {
        Some(match game.locate(id)? {
            Location::Reserve { slot } => self.reserve_center(id.owner(), slot),
            Location::Board(cell) => self.cell_center(cell),
        })
    }
}

/// Resolves activation points to targets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputMapper {
    geometry: Geometry,
}

impl InputMapper {
    /// Creates a mapper for `geometry`.
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }

    /// Returns the layout in use.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Resolves `point` against the current state of `game`.
    ///
    /// Checked in priority order:
    /// 1. the mover's unplaced reserve pieces (within piece radius),
    /// 2. the mover's pieces on top of a cell (within piece radius),
    /// 3. any board cell containing the point.
    ///
    /// Opponent pieces are never resolved as pieces; clicking one lands
    /// on its cell instead.
    #[instrument(skip(self, game), fields(turn = %game.turn()))]
    pub fn resolve(&self, point: Point, game: &Game) -> Target {
        let player = game.turn();
        let geometry = &self.geometry;

        let reserve_hit = game.reserve(player).remaining().find(|(slot, piece)| {
            point.distance(geometry.reserve_center(player, *slot)) <= geometry.radius(piece.size())
        });
        if let Some((_, piece)) = reserve_hit {
            return Target::Piece(piece.id());
        }

        let board_hit = Cell::ALL.iter().find_map(|cell| {
            let top = game.board().top(*cell)?;
            (top.owner() == player
                && point.distance(geometry.cell_center(*cell)) <= geometry.radius(top.size()))
            .then(|| top.id())
        });
        if let Some(id) = board_hit {
            return Target::Piece(id);
        }

        geometry.cell_at(point).map_or(Target::None, Target::Cell)
    }
}
