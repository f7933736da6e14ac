//! Breadth-first reachability over open cells.
//!
//! Both the enclosure check and the cat's escape distances are derived from
//! [`DistanceField::from_sources`], a multi-source breadth-first search that
//! marks cells as they are enqueued and therefore visits each cell once.

use std::collections::VecDeque;

use catch_the_cat_core::{CellCoord, GridDimensions, GridView};

/// Hop distances from a set of source cells through open cells.
///
/// Cells that the search never reached carry no distance at all, so callers
/// must treat a missing entry as blocked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    dimensions: GridDimensions,
    distances: Vec<Option<u32>>,
    reached: usize,
}

impl DistanceField {
    /// Runs a breadth-first search seeded by every open source cell.
    ///
    /// Sources that are walls, off the board or listed twice are skipped.
    #[must_use]
    pub fn from_sources<I>(view: &GridView<'_>, sources: I) -> Self
    where
        I: IntoIterator<Item = CellCoord>,
    {
        let dimensions = view.dimensions();
        let mut field = Self {
            dimensions,
            distances: vec![None; dimensions.cell_count()],
            reached: 0,
        };
        let mut queue = VecDeque::new();

        for source in sources {
            if view.is_open(source) && field.mark(source, 0) {
                queue.push_back(source);
            }
        }

        while let Some(cell) = queue.pop_front() {
            let Some(distance) = field.distance(cell) else {
                continue;
            };
            let next_distance = distance.saturating_add(1);

            for neighbor in cell.neighbors() {
                if view.is_open(neighbor) && field.mark(neighbor, next_distance) {
                    queue.push_back(neighbor);
                }
            }
        }

        field
    }

    /// Distance recorded for the cell, or `None` when it was not reached.
    #[must_use]
    pub fn distance(&self, cell: CellCoord) -> Option<u32> {
        self.dimensions
            .index(cell)
            .and_then(|index| self.distances.get(index).copied().flatten())
    }

    /// Reports whether the search reached the cell.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        self.distance(cell).is_some()
    }

    /// Number of cells the search reached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reached
    }

    /// Reports whether the search reached nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reached == 0
    }

    /// Iterates reached cells with their distances in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, u32)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(index, distance)| {
                let distance = (*distance)?;
                let cell = self.dimensions.cell_at_index(index)?;
                Some((cell, distance))
            })
    }

    fn mark(&mut self, cell: CellCoord, distance: u32) -> bool {
        let Some(slot) = self
            .dimensions
            .index(cell)
            .and_then(|index| self.distances.get_mut(index))
        else {
            return false;
        };

        if slot.is_some() {
            return false;
        }

        *slot = Some(distance);
        self.reached += 1;
        true
    }
}

/// Hop distances from `start` to every cell reachable through open cells.
///
/// A `start` that is a wall or off the board yields an empty field.
#[must_use]
pub fn reachable_from(view: &GridView<'_>, start: CellCoord) -> DistanceField {
    DistanceField::from_sources(view, [start])
}

/// Reports whether no open path leads from `start` to a boundary cell.
///
/// A `start` with nowhere to stand counts as enclosed.
#[must_use]
pub fn is_enclosed(view: &GridView<'_>, start: CellCoord) -> bool {
    let dimensions = view.dimensions();
    !reachable_from(view, start)
        .iter()
        .any(|(cell, _)| dimensions.is_boundary(cell))
}

/// Shortest hop count from each cell reachable from `start` to the board edge.
///
/// The search is seeded by the boundary cells of `start`'s open component, so
/// cells outside that component, and the whole component when it never
/// touches the edge, are absent from the result.
#[must_use]
pub fn distance_to_boundary(view: &GridView<'_>, start: CellCoord) -> DistanceField {
    let dimensions = view.dimensions();
    let component = reachable_from(view, start);
    let exits = component
        .iter()
        .map(|(cell, _)| cell)
        .filter(|cell| dimensions.is_boundary(*cell));
    DistanceField::from_sources(view, exits)
}
