//! Application state and logic.

use strictly_gobblet::{Activation, Game, Geometry, InputMapper, MoveError, Point};
use tracing::{debug, warn};

const RESTART_HINT: &str = "Press 'r' to restart or 'q' to quit.";

/// Converts a terminal cell to an engine point.
///
/// Terminal rows are roughly twice as tall as columns are wide, so a row
/// spans two engine units.
pub fn to_point(column: u16, row: u16) -> Point {
    Point::new(f32::from(column), f32::from(row) * 2.0)
}

/// Main application state.
pub struct App {
    game: Game,
    mapper: InputMapper,
    status_message: String,
}

impl App {
    /// Creates a new application drawn with `geometry`.
    pub fn new(geometry: Geometry) -> Self {
        let game = Game::new();
        let status_message = prompt(&game);
        Self {
            game,
            mapper: InputMapper::new(geometry),
            status_message,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the layout everything is drawn with.
    pub fn geometry(&self) -> &Geometry {
        self.mapper.geometry()
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a left click on terminal cell `(column, row)`.
    pub fn click(&mut self, column: u16, row: u16) {
        let point = to_point(column, row);
        debug!(column, row, "Click");

        self.status_message = match self.game.click(&self.mapper, point) {
            Ok(Activation::Selected { piece, .. }) => {
                format!("{}: piece {} picked up. Click a square.", self.game.turn(), piece)
            }
            Ok(Activation::Placed { .. }) => prompt(&self.game),
            Ok(Activation::Won { .. } | Activation::Drawn { .. }) => {
                format!("{} {}", self.game.view().status_line(), RESTART_HINT)
            }
            Err(MoveError::NoTarget) => return,
            Err(MoveError::GameOver) => {
                format!("{} {}", self.game.view().status_line(), RESTART_HINT)
            }
            Err(MoveError::InvariantViolation(reason)) => {
                warn!(%reason, "Engine refused a move");
                format!("Internal error: {}", reason)
            }
            Err(e) => format!("Invalid move: {}. Try again.", e),
        };
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.status_message = prompt(&self.game);
    }
}

fn prompt(game: &Game) -> String {
    format!("{}. Click one of your pieces.", game.view().status_line())
}
