//! Offset-coordinate hexagonal topology shared by every crate.
//!
//! Cells are addressed by `(column, row)`. Odd rows are shifted half a cell to
//! the right, so the six neighbours of a cell depend on the parity of its row.
//! Both parities are served by a single table lookup in [`CellCoord::neighbor`].

use serde::{Deserialize, Serialize};

/// Neighbour offsets for even rows, indexed by [`HexDirection::index`].
const EVEN_ROW_OFFSETS: [(i32, i32); 6] = [(-1, 0), (-1, -1), (0, -1), (1, 0), (0, 1), (-1, 1)];

/// Neighbour offsets for odd rows, indexed by [`HexDirection::index`].
const ODD_ROW_OFFSETS: [(i32, i32); 6] = [(-1, 0), (0, -1), (1, -1), (1, 0), (1, 1), (0, 1)];

/// The six directions leading out of a hexagonal cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexDirection {
    /// Same row, previous column.
    Left,
    /// Previous row, towards the left.
    TopLeft,
    /// Previous row, towards the right.
    TopRight,
    /// Same row, next column.
    Right,
    /// Next row, towards the right.
    BottomRight,
    /// Next row, towards the left.
    BottomLeft,
}

impl HexDirection {
    /// All directions in canonical enumeration order.
    ///
    /// The order is significant: the cat breaks ties between equally good
    /// moves by picking the direction that appears first.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::Left,
        HexDirection::TopLeft,
        HexDirection::TopRight,
        HexDirection::Right,
        HexDirection::BottomRight,
        HexDirection::BottomLeft,
    ];

    /// Position of the direction within [`HexDirection::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::TopLeft => 1,
            Self::TopRight => 2,
            Self::Right => 3,
            Self::BottomRight => 4,
            Self::BottomLeft => 5,
        }
    }

    /// Direction pointing back towards the origin of a step.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::Right => Self::Left,
            Self::BottomRight => Self::TopLeft,
            Self::BottomLeft => Self::TopRight,
        }
    }
}

/// Location of a single hexagonal cell expressed as column and row.
///
/// Coordinates are signed so neighbour arithmetic can describe positions just
/// outside the grid; bounds are checked against [`GridDimensions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: i32,
    row: i32,
}

impl CellCoord {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index (`i`) of the cell.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Zero-based row index (`j`) of the cell.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Reports whether the cell sits on an odd, right-shifted row.
    #[must_use]
    pub const fn is_odd_row(&self) -> bool {
        self.row.rem_euclid(2) == 1
    }

    /// Cell adjacent to `self` in the provided direction.
    ///
    /// Coordinates saturate at the `i32` limits.
    #[must_use]
    pub const fn neighbor(self, direction: HexDirection) -> Self {
        let offsets = if self.is_odd_row() {
            &ODD_ROW_OFFSETS
        } else {
            &EVEN_ROW_OFFSETS
        };
        let (dc, dr) = offsets[direction.index()];
        Self::new(self.column.saturating_add(dc), self.row.saturating_add(dr))
    }

    /// All six neighbours in [`HexDirection::ALL`] order.
    ///
    /// Neighbours are not bounds checked.
    #[must_use]
    pub fn neighbors(self) -> [CellCoord; 6] {
        HexDirection::ALL.map(|direction| self.neighbor(direction))
    }

    /// Direction leading from `self` to an adjacent cell, if they touch.
    #[must_use]
    pub fn direction_to(self, other: CellCoord) -> Option<HexDirection> {
        HexDirection::ALL
            .into_iter()
            .find(|direction| self.neighbor(*direction) == other)
    }
}

/// Size of the rectangular board measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    columns: u32,
    rows: u32,
}

impl GridDimensions {
    /// Creates a new dimension descriptor.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns (`W`).
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows (`H`).
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let count = u64::from(self.columns) * u64::from(self.rows);
        usize::try_from(count).unwrap_or(0)
    }

    /// Reports whether the cell lies on the board.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        u32::try_from(cell.column()).map_or(false, |column| column < self.columns)
            && u32::try_from(cell.row()).map_or(false, |row| row < self.rows)
    }

    /// Reports whether the cell is an in-bounds cell on the outer edge.
    ///
    /// Every boundary cell has at least one neighbour outside the board.
    #[must_use]
    pub fn is_boundary(&self, cell: CellCoord) -> bool {
        if !self.contains(cell) {
            return false;
        }

        let last_column = i64::from(self.columns) - 1;
        let last_row = i64::from(self.rows) - 1;
        cell.column() == 0
            || cell.row() == 0
            || i64::from(cell.column()) == last_column
            || i64::from(cell.row()) == last_row
    }

    /// Row-major index of the cell, or `None` when it lies off the board.
    #[must_use]
    pub fn index(&self, cell: CellCoord) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }

        let column = usize::try_from(cell.column()).ok()?;
        let row = usize::try_from(cell.row()).ok()?;
        let width = usize::try_from(self.columns).ok()?;
        row.checked_mul(width)?.checked_add(column)
    }

    /// Cell stored at the provided row-major index.
    #[must_use]
    pub fn cell_at_index(&self, index: usize) -> Option<CellCoord> {
        if index >= self.cell_count() || self.columns == 0 {
            return None;
        }

        let width = usize::try_from(self.columns).ok()?;
        let column = i32::try_from(index % width).ok()?;
        let row = i32::try_from(index / width).ok()?;
        Some(CellCoord::new(column, row))
    }

    /// Iterates every cell on the board in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let dimensions = *self;
        (0..self.cell_count()).filter_map(move |index| dimensions.cell_at_index(index))
    }

    /// Centre cell used as the cat's spawn point.
    #[must_use]
    pub fn center(&self) -> CellCoord {
        let column = i32::try_from(self.columns / 2).unwrap_or(i32::MAX);
        let row = i32::try_from(self.rows / 2).unwrap_or(i32::MAX);
        CellCoord::new(column, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_row_neighbors_follow_canonical_order() {
        let cell = CellCoord::new(2, 2);

        assert_eq!(
            cell.neighbors(),
            [
                CellCoord::new(1, 2),
                CellCoord::new(1, 1),
                CellCoord::new(2, 1),
                CellCoord::new(3, 2),
                CellCoord::new(2, 3),
                CellCoord::new(1, 3),
            ]
        );
    }

    #[test]
    fn odd_row_neighbors_follow_canonical_order() {
        let cell = CellCoord::new(2, 3);

        assert_eq!(
            cell.neighbors(),
            [
                CellCoord::new(1, 3),
                CellCoord::new(2, 2),
                CellCoord::new(3, 2),
                CellCoord::new(3, 3),
                CellCoord::new(3, 4),
                CellCoord::new(2, 4),
            ]
        );
    }

    #[test]
    fn neighbors_of_origin_may_leave_the_board() {
        let neighbors = CellCoord::new(0, 0).neighbors();

        assert_eq!(neighbors[0], CellCoord::new(-1, 0));
        assert_eq!(neighbors[1], CellCoord::new(-1, -1));
        assert_eq!(neighbors[2], CellCoord::new(0, -1));
    }

    #[test]
    fn neighbors_saturate_at_coordinate_limits() {
        let high = CellCoord::new(i32::MAX, i32::MAX);
        let low = CellCoord::new(i32::MIN, i32::MIN);

        assert_eq!(
            high.neighbor(HexDirection::BottomRight),
            CellCoord::new(i32::MAX, i32::MAX)
        );
        assert_eq!(
            high.neighbor(HexDirection::Left),
            CellCoord::new(i32::MAX - 1, i32::MAX)
        );
        assert_eq!(
            low.neighbor(HexDirection::TopLeft),
            CellCoord::new(i32::MIN, i32::MIN)
        );
        assert_eq!(low.direction_to(CellCoord::new(0, 0)), None);
    }

    #[test]
    fn neighbor_relation_is_symmetric_and_distinct() {
        let dimensions = GridDimensions::new(7, 6);

        for cell in dimensions.cells() {
            let neighbors = cell.neighbors();
            assert_eq!(neighbors.len(), 6);

            for (index, neighbor) in neighbors.iter().enumerate() {
                assert_ne!(*neighbor, cell, "{cell:?} must not neighbour itself");
                assert!(
                    !neighbors[index + 1..].contains(neighbor),
                    "{cell:?} lists {neighbor:?} twice"
                );
                assert!(
                    neighbor.neighbors().contains(&cell),
                    "{neighbor:?} does not list {cell:?} as a neighbour"
                );
            }
        }
    }

    #[test]
    fn opposite_direction_steps_back() {
        for cell in [CellCoord::new(3, 4), CellCoord::new(3, 5)] {
            for direction in HexDirection::ALL {
                let there = cell.neighbor(direction);
                assert_eq!(there.neighbor(direction.opposite()), cell);
                assert_eq!(cell.direction_to(there), Some(direction));
            }
        }
    }

    #[test]
    fn negative_rows_use_euclidean_parity() {
        assert!(CellCoord::new(0, -1).is_odd_row());
        assert!(!CellCoord::new(0, -2).is_odd_row());
    }

    #[test]
    fn boundary_detection_covers_all_edges() {
        let dimensions = GridDimensions::new(5, 4);

        assert!(dimensions.is_boundary(CellCoord::new(0, 2)));
        assert!(dimensions.is_boundary(CellCoord::new(4, 2)));
        assert!(dimensions.is_boundary(CellCoord::new(2, 0)));
        assert!(dimensions.is_boundary(CellCoord::new(2, 3)));
        assert!(!dimensions.is_boundary(CellCoord::new(2, 2)));
        assert!(!dimensions.is_boundary(CellCoord::new(5, 2)));
    }

    #[test]
    fn every_boundary_cell_has_an_off_board_neighbor() {
        let dimensions = GridDimensions::new(6, 5);

        for cell in dimensions.cells().filter(|cell| dimensions.is_boundary(*cell)) {
            assert!(
                cell.neighbors()
                    .iter()
                    .any(|neighbor| !dimensions.contains(*neighbor)),
                "{cell:?} should touch the outside"
            );
        }
    }

    #[test]
    fn index_round_trips_through_cell_at_index() {
        let dimensions = GridDimensions::new(4, 3);

        for (expected, cell) in dimensions.cells().enumerate() {
            assert_eq!(dimensions.index(cell), Some(expected));
        }
        assert_eq!(dimensions.index(CellCoord::new(-1, 0)), None);
        assert_eq!(dimensions.index(CellCoord::new(4, 0)), None);
        assert_eq!(dimensions.cell_at_index(12), None);
    }

    #[test]
    fn center_of_five_by_five_is_two_two() {
        assert_eq!(GridDimensions::new(5, 5).center(), CellCoord::new(2, 2));
        assert_eq!(GridDimensions::new(11, 11).center(), CellCoord::new(5, 5));
    }
}
