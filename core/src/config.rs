//! Board configuration consumed when a world is constructed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::GridDimensions;

/// Construction parameters for a catch-the-cat board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns (`W`).
    pub columns: u32,
    /// Number of rows (`H`).
    pub rows: u32,
    /// Width of a single hexagon in world units. Only the layout helpers use it.
    pub cell_size: f32,
}

impl GridConfig {
    /// Smallest accepted board edge. Anything smaller puts the spawn on the edge.
    pub const MIN_DIMENSION: u32 = 3;

    /// Largest accepted board edge.
    pub const MAX_DIMENSION: u32 = 1024;

    /// Creates a configuration with the default cell size.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    /// Overrides the cell size.
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Board dimensions described by the configuration.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.columns, self.rows)
    }

    /// Checks that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("columns", self.columns), ("rows", self.rows)] {
            if value < Self::MIN_DIMENSION {
                return Err(ConfigError::TooSmall {
                    axis,
                    value,
                    min: Self::MIN_DIMENSION,
                });
            }
            if value > Self::MAX_DIMENSION {
                return Err(ConfigError::TooLarge {
                    axis,
                    value,
                    max: Self::MAX_DIMENSION,
                });
            }
        }

        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize {
                cell_size: self.cell_size,
            });
        }

        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 11,
            rows: 11,
            cell_size: 48.0,
        }
    }
}

/// Reasons a [`GridConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A board edge is too short to host the cat away from the edge.
    #[error("{axis} must be at least {min} (received {value})")]
    TooSmall {
        /// Name of the offending axis.
        axis: &'static str,
        /// Provided value.
        value: u32,
        /// Smallest accepted value.
        min: u32,
    },
    /// A board edge exceeds the supported size.
    #[error("{axis} must be at most {max} (received {value})")]
    TooLarge {
        /// Name of the offending axis.
        axis: &'static str,
        /// Provided value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// The cell size is zero, negative or not a number.
    #[error("cell_size must be a positive finite number (received {cell_size})")]
    InvalidCellSize {
        /// Provided cell size.
        cell_size: f32,
    },
}
