#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic cat system that answers each cat turn with a step.
//!
//! The cat walks greedily towards the nearest edge: among its open neighbours
//! it picks the one with the smallest escape distance, breaking ties by the
//! canonical [`HexDirection::ALL`] order. This is a heuristic, not an
//! adversarial search.

use catch_the_cat_core::{CellCoord, Command, Event, GridView, HexDirection};
use catch_the_cat_world::reachability;

/// What the cat does with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatDecision {
    /// Step to the neighbour in the given direction.
    Move(HexDirection),
    /// No neighbour leads to the edge; the player wins.
    Concede,
}

impl CatDecision {
    /// Command that carries the decision to the world.
    #[must_use]
    pub const fn into_command(self) -> Command {
        match self {
            Self::Move(direction) => Command::StepCat { direction },
            Self::Concede => Command::ConcedeCat,
        }
    }
}

/// Pure system that reacts to cat turns and emits movement commands.
#[derive(Debug, Default)]
pub struct Cat;

impl Cat {
    /// Creates a new cat system.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Consumes world events and the grid view to emit cat commands.
    ///
    /// One command is emitted for every [`Event::CatTurnStarted`] observed.
    pub fn handle(&self, events: &[Event], grid: &GridView<'_>, out: &mut Vec<Command>) {
        for event in events {
            if let Event::CatTurnStarted { cell } = event {
                let decision = self.step(grid, *cell);
                log::debug!("cat at {cell:?} decided {decision:?}");
                out.push(decision.into_command());
            }
        }
    }

    /// Chooses the cat's move from `from`.
    ///
    /// Only the six neighbours are candidates, never `from` itself. A
    /// neighbour qualifies when it is open and has a recorded escape
    /// distance; the smallest distance wins and the first direction in
    /// canonical order wins ties. A cat placed off the board concedes.
    #[must_use]
    pub fn step(&self, grid: &GridView<'_>, from: CellCoord) -> CatDecision {
        if !grid.dimensions().contains(from) {
            return CatDecision::Concede;
        }

        let distances = reachability::distance_to_boundary(grid, from);

        let mut best: Option<(HexDirection, u32)> = None;
        for direction in HexDirection::ALL {
            let candidate = from.neighbor(direction);
            if !grid.is_open(candidate) {
                continue;
            }

            let Some(distance) = distances.distance(candidate) else {
                continue;
            };

            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((direction, distance));
            }
        }

        best.map_or(CatDecision::Concede, |(direction, _)| {
            CatDecision::Move(direction)
        })
    }
}

#[cfg(test)]
mod tests {
    use catch_the_cat_core::GridDimensions;

    use super::*;

    fn walls_for(dimensions: GridDimensions, walled: &[CellCoord]) -> Vec<bool> {
        let mut walls = vec![false; dimensions.cell_count()];
        for cell in walled {
            if let Some(index) = dimensions.index(*cell) {
                walls[index] = true;
            }
        }
        walls
    }

    #[test]
    fn open_board_tie_breaks_towards_the_left() {
        let dimensions = GridDimensions::new(7, 7);
        let walls = walls_for(dimensions, &[]);
        let view = GridView::new(&walls, dimensions);

        assert_eq!(
            Cat::new().step(&view, CellCoord::new(3, 3)),
            CatDecision::Move(HexDirection::Left)
        );
    }

    #[test]
    fn closer_exit_beats_enumeration_order() {
        let dimensions = GridDimensions::new(9, 7);
        let walls = walls_for(dimensions, &[]);
        let view = GridView::new(&walls, dimensions);

        assert_eq!(
            Cat::new().step(&view, CellCoord::new(6, 3)),
            CatDecision::Move(HexDirection::TopRight)
        );
    }

    #[test]
    fn walled_neighbor_is_skipped() {
        let dimensions = GridDimensions::new(7, 7);
        let from = CellCoord::new(3, 3);
        let walls = walls_for(dimensions, &[from.neighbor(HexDirection::Left)]);
        let view = GridView::new(&walls, dimensions);

        assert_eq!(
            Cat::new().step(&view, from),
            CatDecision::Move(HexDirection::TopLeft)
        );
    }

    #[test]
    fn surrounded_cat_concedes() {
        let dimensions = GridDimensions::new(5, 5);
        let from = CellCoord::new(2, 2);
        let walls = walls_for(dimensions, &from.neighbors());
        let view = GridView::new(&walls, dimensions);

        assert_eq!(Cat::new().step(&view, from), CatDecision::Concede);
    }

    #[test]
    fn off_board_start_concedes() {
        let dimensions = GridDimensions::new(5, 5);
        let walls = walls_for(dimensions, &[]);
        let view = GridView::new(&walls, dimensions);

        for from in [
            CellCoord::new(i32::MAX, i32::MAX),
            CellCoord::new(i32::MIN, i32::MIN),
            CellCoord::new(-1, 2),
            CellCoord::new(5, 0),
        ] {
            assert_eq!(Cat::new().step(&view, from), CatDecision::Concede);
        }
    }

    #[test]
    fn handle_answers_each_cat_turn() {
        let dimensions = GridDimensions::new(7, 7);
        let walls = walls_for(dimensions, &[]);
        let view = GridView::new(&walls, dimensions);
        let mut commands = Vec::new();

        Cat::new().handle(
            &[
                Event::CellChanged {
                    cell: CellCoord::new(0, 0),
                    is_wall: true,
                },
                Event::CatTurnStarted {
                    cell: CellCoord::new(3, 3),
                },
            ],
            &view,
            &mut commands,
        );

        assert_eq!(
            commands,
            vec![Command::StepCat {
                direction: HexDirection::Left,
            }]
        );
    }

    #[test]
    fn handle_ignores_unrelated_events() {
        let dimensions = GridDimensions::new(7, 7);
        let walls = walls_for(dimensions, &[]);
        let view = GridView::new(&walls, dimensions);
        let mut commands = Vec::new();

        Cat::new().handle(
            &[Event::CatMoved {
                from: CellCoord::new(3, 3),
                to: CellCoord::new(2, 3),
            }],
            &view,
            &mut commands,
        );

        assert!(commands.is_empty());
    }
}
