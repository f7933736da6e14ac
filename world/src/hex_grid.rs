//! Dense wall storage for the hexagonal board.

use catch_the_cat_core::{Cell, CellCoord, GridDimensions, GridView};

/// Row-major wall flags for every cell on the board.
#[derive(Clone, Debug)]
pub(crate) struct HexGrid {
    dimensions: GridDimensions,
    walls: Vec<bool>,
}

impl HexGrid {
    /// Creates a grid where every cell is open.
    pub(crate) fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            walls: vec![false; dimensions.cell_count()],
        }
    }

    pub(crate) fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Looks up a cell; off-board coordinates are a miss, not an error.
    pub(crate) fn cell(&self, coord: CellCoord) -> Option<Cell> {
        self.view().cell(coord)
    }

    /// Marks the cell as a wall, returning whether anything changed.
    ///
    /// Callers validate the target first; off-board coordinates are ignored.
    pub(crate) fn set_wall(&mut self, coord: CellCoord) -> bool {
        let Some(slot) = self
            .dimensions
            .index(coord)
            .and_then(|index| self.walls.get_mut(index))
        else {
            return false;
        };

        let changed = !*slot;
        *slot = true;
        changed
    }

    /// Opens every cell, returning the cells that were walls in row-major order.
    pub(crate) fn clear(&mut self) -> Vec<CellCoord> {
        let cleared: Vec<CellCoord> = self.view().walls().collect();
        self.walls.fill(false);
        cleared
    }

    pub(crate) fn wall_count(&self) -> usize {
        self.view().wall_count()
    }

    pub(crate) fn view(&self) -> GridView<'_> {
        GridView::new(&self.walls, self.dimensions)
    }
}
