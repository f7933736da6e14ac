#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the catch-the-cat engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! views such as [`GridView`], and respond exclusively with new commands.

use serde::{Deserialize, Serialize};

mod config;
mod hex;

pub use config::{ConfigError, GridConfig};
pub use hex::{CellCoord, GridDimensions, HexDirection};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Catch the cat! Surround it before it reaches the edge.";

/// Outcome of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// The round is in progress.
    Playing,
    /// The player trapped the cat.
    Win,
    /// The cat reached the edge of the board.
    Lose,
}

impl GameState {
    /// Reports whether the round has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Whose move the world is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// The world accepts wall placements.
    Player,
    /// The world waits for the cat to step or concede.
    Cat,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Requests that the player turn the provided cell into a wall.
    BlockCell {
        /// Cell the player clicked.
        cell: CellCoord,
    },
    /// Requests that the cat advance a single step in the specified direction.
    StepCat {
        /// Direction of travel for the attempted step.
        direction: HexDirection,
    },
    /// Signals that the cat has no legal move left.
    ConcedeCat,
    /// Clears every wall, returns the cat to its spawn and restarts the round.
    Reset,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A cell switched between open and wall.
    CellChanged {
        /// Cell whose state changed.
        cell: CellCoord,
        /// Whether the cell is now a wall.
        is_wall: bool,
    },
    /// Reports that a wall placement request was rejected.
    BlockRejected {
        /// Cell provided in the placement request.
        cell: CellCoord,
        /// Specific reason the placement failed.
        reason: MoveRejection,
    },
    /// Announces that the world awaits the cat's move.
    CatTurnStarted {
        /// Cell currently occupied by the cat.
        cell: CellCoord,
    },
    /// Confirms that the cat moved between two cells.
    CatMoved {
        /// Cell the cat occupied before moving.
        from: CellCoord,
        /// Cell the cat occupies after moving.
        to: CellCoord,
    },
    /// Reports that a cat step request was rejected.
    CatStepRejected {
        /// Direction provided in the step request.
        direction: HexDirection,
        /// Specific reason the step failed.
        reason: StepRejection,
    },
    /// Announces that the round entered a new state.
    StateChanged {
        /// State that became active.
        state: GameState,
    },
    /// Carries a user-facing status update.
    StatusChanged {
        /// Status to display.
        status: Status,
    },
}

/// Reasons a wall placement may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    /// The round is over; the click restarts the game instead.
    GameOver,
    /// The world is waiting for the cat.
    NotPlayerTurn,
    /// The cell lies outside the board.
    OutOfBounds,
    /// The cell is already a wall.
    AlreadyWall,
    /// The cat occupies the cell.
    OccupiedByCat,
}

/// Reasons a cat step may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepRejection {
    /// The world is not waiting for the cat.
    NotCatTurn,
    /// The destination is a wall or off the board.
    Blocked,
}

/// User-facing status updates emitted alongside world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// A fresh round has started.
    NewRound,
    /// A wall placement was refused.
    Rejected {
        /// Why the placement was refused.
        reason: MoveRejection,
    },
    /// The cat is fully enclosed.
    CatTrapped,
    /// The cat has no move left that leads to the edge.
    CatConceded,
    /// The cat reached the edge of the board.
    CatEscaped,
}

impl Status {
    /// Default English text for the status.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NewRound => "New round. Click a cell to place a wall.",
            Self::Rejected { reason } => match reason {
                MoveRejection::GameOver => "The round is over. Starting a new one.",
                MoveRejection::NotPlayerTurn => "Wait for the cat to move.",
                MoveRejection::OutOfBounds => "That cell is not on the board.",
                MoveRejection::AlreadyWall => "That cell is already a wall.",
                MoveRejection::OccupiedByCat => "The cat is sitting there.",
            },
            Self::CatTrapped => "You trapped the cat!",
            Self::CatConceded => "The cat gives up. You win!",
            Self::CatEscaped => "The cat escaped.",
        }
    }
}

/// Snapshot of a single cell returned by grid lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Location of the cell.
    pub coord: CellCoord,
    /// Whether the player walled the cell.
    pub is_wall: bool,
}

/// Read-only view into the dense wall grid.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    walls: &'a [bool],
    dimensions: GridDimensions,
}

impl<'a> GridView<'a> {
    /// Captures a new grid view backed by the provided row-major wall slice.
    #[must_use]
    pub fn new(walls: &'a [bool], dimensions: GridDimensions) -> Self {
        Self { walls, dimensions }
    }

    /// Dimensions of the underlying grid.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Looks up a cell, returning `None` when it lies off the board.
    #[must_use]
    pub fn cell(&self, coord: CellCoord) -> Option<Cell> {
        let index = self.dimensions.index(coord)?;
        let is_wall = self.walls.get(index).copied()?;
        Some(Cell { coord, is_wall })
    }

    /// Reports whether the cell is on the board and not a wall.
    #[must_use]
    pub fn is_open(&self, coord: CellCoord) -> bool {
        self.cell(coord).map_or(false, |cell| !cell.is_wall)
    }

    /// Number of walled cells.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|is_wall| **is_wall).count()
    }

    /// Iterates every walled cell in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = CellCoord> + 'a {
        let dimensions = self.dimensions;
        let walls: &'a [bool] = self.walls;
        walls
            .iter()
            .enumerate()
            .filter(|(_, is_wall)| **is_wall)
            .filter_map(move |(index, _)| dimensions.cell_at_index(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn events_round_trip_through_bincode() {
        assert_round_trip(&Event::CatMoved {
            from: CellCoord::new(5, 5),
            to: CellCoord::new(4, 5),
        });
        assert_round_trip(&Event::BlockRejected {
            cell: CellCoord::new(-1, 3),
            reason: MoveRejection::OutOfBounds,
        });
    }

    #[test]
    fn grid_view_reports_missing_cells_as_none() {
        let walls = [false, true, false, false];
        let view = GridView::new(&walls, GridDimensions::new(2, 2));

        assert_eq!(
            view.cell(CellCoord::new(1, 0)),
            Some(Cell {
                coord: CellCoord::new(1, 0),
                is_wall: true,
            })
        );
        assert_eq!(view.cell(CellCoord::new(2, 0)), None);
        assert_eq!(view.cell(CellCoord::new(0, -1)), None);
        assert!(!view.is_open(CellCoord::new(1, 0)));
        assert!(!view.is_open(CellCoord::new(5, 5)));
        assert!(view.is_open(CellCoord::new(0, 1)));
    }

    #[test]
    fn grid_view_enumerates_walls() {
        let walls = [true, false, false, true];
        let view = GridView::new(&walls, GridDimensions::new(2, 2));

        assert_eq!(view.wall_count(), 2);
        assert_eq!(
            view.walls().collect::<Vec<_>>(),
            vec![CellCoord::new(0, 0), CellCoord::new(1, 1)]
        );
    }

    #[test]
    fn every_status_has_a_message() {
        let statuses = [
            Status::NewRound,
            Status::CatTrapped,
            Status::CatConceded,
            Status::CatEscaped,
            Status::Rejected {
                reason: MoveRejection::AlreadyWall,
            },
        ];

        for status in statuses {
            assert!(!status.message().is_empty());
        }
    }

    #[test]
    fn only_playing_is_not_over() {
        assert!(!GameState::Playing.is_over());
        assert!(GameState::Win.is_over());
        assert!(GameState::Lose.is_over());
    }
}
