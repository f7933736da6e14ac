#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for catch-the-cat adapters.

use anyhow::Result as AnyResult;
use catch_the_cat_core::{CellCoord, GameState, GridConfig, GridDimensions, GridView, Status};
use glam::Vec2;
use std::{error::Error, fmt};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Converts the color channels back to bytes, ignoring alpha.
    #[must_use]
    pub fn to_rgb_u8(self) -> [u8; 3] {
        [
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
        ]
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Colors assigned to each kind of cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Cells the cat may walk on.
    pub open: Color,
    /// Cells the player blocked.
    pub wall: Color,
    /// Cell holding the cat.
    pub cat: Color,
}

impl Palette {
    /// Color used for the provided cell kind.
    #[must_use]
    pub const fn color_for(&self, kind: CellKind) -> Color {
        match kind {
            CellKind::Open => self.open,
            CellKind::Wall => self.wall,
            CellKind::Cat => self.cat,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            open: Color::from_rgb_u8(179, 214, 101),
            wall: Color::from_rgb_u8(98, 80, 61),
            cat: Color::from_rgb_u8(236, 163, 68),
        }
    }
}

/// Converts between board cells and world-space positions.
///
/// Cells are pointy-top hexagons `cell_size` wide. Odd rows are shifted right
/// by half a cell and consecutive rows are `cell_size · √3/2` apart, so the
/// layout matches the neighbour table of [`CellCoord::neighbors`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    dimensions: GridDimensions,
    cell_size: f32,
}

impl HexLayout {
    /// Creates a layout for the provided board.
    ///
    /// Returns an error when the board has no cells or `cell_size` is not a
    /// positive finite number.
    pub fn new(dimensions: GridDimensions, cell_size: f32) -> Result<Self, RenderingError> {
        if dimensions.columns() == 0 || dimensions.rows() == 0 {
            return Err(RenderingError::EmptyGrid {
                columns: dimensions.columns(),
                rows: dimensions.rows(),
            });
        }

        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(RenderingError::InvalidCellSize { cell_size });
        }

        Ok(Self {
            dimensions,
            cell_size,
        })
    }

    /// Creates a layout from a board configuration.
    pub fn from_config(config: &GridConfig) -> Result<Self, RenderingError> {
        Self::new(config.dimensions(), config.cell_size)
    }

    /// Board the layout describes.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Width of a single cell in world units.
    #[must_use]
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Distance from a cell centre to its corners.
    #[must_use]
    pub fn circumradius(&self) -> f32 {
        self.cell_size / 3.0_f32.sqrt()
    }

    /// Vertical distance between the centres of consecutive rows.
    #[must_use]
    pub fn row_pitch(&self) -> f32 {
        self.cell_size * 3.0_f32.sqrt() * 0.5
    }

    /// Total width covered by the board.
    #[must_use]
    pub fn width(&self) -> f32 {
        (self.dimensions.columns() as f32 + 0.5) * self.cell_size
    }

    /// Total height covered by the board.
    #[must_use]
    pub fn height(&self) -> f32 {
        2.0 * self.circumradius() + (self.dimensions.rows() as f32 - 1.0) * self.row_pitch()
    }

    /// World-space centre of the provided cell.
    ///
    /// Off-board coordinates are extrapolated from the same lattice.
    #[must_use]
    pub fn cell_center(&self, cell: CellCoord) -> Vec2 {
        let shift = if cell.is_odd_row() { 0.5 } else { 0.0 };
        Vec2::new(
            (cell.column() as f32 + 0.5 + shift) * self.cell_size,
            self.circumradius() + cell.row() as f32 * self.row_pitch(),
        )
    }

    /// Hit-tests a world-space point.
    ///
    /// Returns the on-board cell whose centre is closest to `point`, or `None`
    /// when that centre lies further away than the circumradius.
    #[must_use]
    pub fn cell_at(&self, point: Vec2) -> Option<CellCoord> {
        if !point.is_finite() {
            return None;
        }

        let row_guess = ((point.y - self.circumradius()) / self.row_pitch()).round() as i32;
        let mut best: Option<(CellCoord, f32)> = None;

        for row in row_guess.saturating_sub(1)..=row_guess.saturating_add(1) {
            let shift = if row.rem_euclid(2) == 1 { 0.5 } else { 0.0 };
            let column_guess = (point.x / self.cell_size - 0.5 - shift).round() as i32;

            for column in column_guess.saturating_sub(1)..=column_guess.saturating_add(1) {
                let candidate = CellCoord::new(column, row);
                if !self.dimensions.contains(candidate) {
                    continue;
                }

                let distance = self.cell_center(candidate).distance_squared(point);
                if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                    best = Some((candidate, distance));
                }
            }
        }

        let radius = self.circumradius();
        best.filter(|(_, distance)| *distance <= radius * radius)
            .map(|(cell, _)| cell)
    }
}

/// What occupies a rendered cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Walkable cell.
    Open,
    /// Player-placed wall.
    Wall,
    /// Cell holding the cat.
    Cat,
}

/// Immutable snapshot of a single cell within the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCell {
    /// Board coordinate of the cell.
    pub coord: CellCoord,
    /// World-space centre of the cell.
    pub center: Vec2,
    /// Occupant of the cell.
    pub kind: CellKind,
}

/// Scene description combining the board and the round state.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Layout used to position the cells.
    pub layout: HexLayout,
    /// Every cell of the board in row-major order.
    pub cells: Vec<SceneCell>,
    /// Current round state.
    pub state: GameState,
    /// Most recent status message, if any.
    pub status: Option<Status>,
}

impl Scene {
    /// Captures the board as seen through `grid` with the cat at `cat`.
    #[must_use]
    pub fn capture(
        layout: HexLayout,
        grid: &GridView<'_>,
        cat: CellCoord,
        state: GameState,
        status: Option<Status>,
    ) -> Self {
        let cells = layout
            .dimensions()
            .cells()
            .map(|coord| {
                let kind = if coord == cat {
                    CellKind::Cat
                } else if grid.cell(coord).map_or(false, |cell| cell.is_wall) {
                    CellKind::Wall
                } else {
                    CellKind::Open
                };
                SceneCell {
                    coord,
                    center: layout.cell_center(coord),
                    kind,
                }
            })
            .collect();

        Self {
            layout,
            cells,
            state,
            status,
        }
    }

    /// Looks up a cell of the scene.
    #[must_use]
    pub fn cell(&self, coord: CellCoord) -> Option<&SceneCell> {
        self.layout
            .dimensions()
            .index(coord)
            .and_then(|index| self.cells.get(index))
    }

    /// Iterates over the scene one board row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[SceneCell]> {
        let columns = usize::try_from(self.layout.dimensions().columns()).unwrap_or(usize::MAX);
        self.cells.chunks(columns.max(1))
    }
}

/// Frontend capable of presenting catch-the-cat scenes.
pub trait FramePresenter {
    /// Draws the provided scene.
    fn present(&mut self, scene: &Scene) -> AnyResult<()>;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// The board must contain at least one cell.
    EmptyGrid {
        /// Provided column count.
        columns: u32,
        /// Provided row count.
        rows: u32,
    },
    /// Cells must have a positive finite size.
    InvalidCellSize {
        /// Provided size that failed validation.
        cell_size: f32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { columns, rows } => {
                write!(f, "board must contain cells (received {columns}x{rows})")
            }
            Self::InvalidCellSize { cell_size } => {
                write!(
                    f,
                    "cell_size must be positive and finite (received {cell_size})"
                )
            }
        }
    }
}

impl Error for RenderingError {}
