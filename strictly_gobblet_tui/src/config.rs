//! TUI configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_gobblet::{Geometry, Point, Radii};
use tracing::{debug, info, instrument};

/// Layout tuned for a terminal: one engine unit per column, two per row.
///
/// Squares are 12 columns by 6 rows. Player A's reserve sits two rows
/// below the status line, the board starts on row 4 and Player B's
/// reserve is on row 24.
pub fn terminal_geometry() -> Geometry {
    Geometry {
        board_origin: Point::new(4.0, 8.0),
        square_size: 12.0,
        reserve_y_a: 4.0,
        reserve_y_b: 48.0,
        reserve_x_start: 7.0,
        reserve_spacing: 6.0,
        radii: Radii {
            small: 1.0,
            medium: 2.0,
            large: 3.0,
        },
    }
}

/// Optional replacements for individual [`Geometry`] fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryOverrides {
    /// Top-left corner of the board.
    board_origin: Option<Point>,
    /// Side length of one square.
    square_size: Option<f32>,
    /// Centre line of Player A's reserve.
    reserve_y_a: Option<f32>,
    /// Centre line of Player B's reserve.
    reserve_y_b: Option<f32>,
    /// Centre of reserve slot 0.
    reserve_x_start: Option<f32>,
    /// Distance between reserve slots.
    reserve_spacing: Option<f32>,
    /// Piece hit radii.
    radii: Option<Radii>,
}

impl GeometryOverrides {
    /// Applies the overrides on top of `base`.
    pub fn apply(&self, base: Geometry) -> Geometry {
        Geometry {
            board_origin: self.board_origin.unwrap_or(base.board_origin),
            square_size: self.square_size.unwrap_or(base.square_size),
            reserve_y_a: self.reserve_y_a.unwrap_or(base.reserve_y_a),
            reserve_y_b: self.reserve_y_b.unwrap_or(base.reserve_y_b),
            reserve_x_start: self.reserve_x_start.unwrap_or(base.reserve_x_start),
            reserve_spacing: self.reserve_spacing.unwrap_or(base.reserve_spacing),
            radii: self.radii.unwrap_or(base.radii),
        }
    }
}

/// Configuration for the terminal client.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Geometry overrides, applied to [`terminal_geometry`].
    #[serde(default)]
    geometry: GeometryOverrides,

    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geometry: GeometryOverrides::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// The effective layout.
    pub fn layout(&self) -> Geometry {
        self.geometry.apply(terminal_geometry())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
