#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for catch-the-cat.
//!
//! The world owns the wall grid, the cat's position and the round state. It
//! only changes through [`apply`], which validates each [`Command`] and reports
//! every mutation as an [`Event`].

mod hex_grid;
pub mod reachability;

use catch_the_cat_core::{
    CellCoord, Command, ConfigError, Event, GameState, GridConfig, HexDirection, MoveRejection,
    Status, StepRejection, Turn, WELCOME_BANNER,
};

use self::hex_grid::HexGrid;

/// Represents the authoritative catch-the-cat world state.
#[derive(Clone, Debug)]
pub struct World {
    banner: &'static str,
    config: GridConfig,
    grid: HexGrid,
    cat: CellCoord,
    cat_start: CellCoord,
    state: GameState,
    turn: Turn,
}

impl World {
    /// Creates a world on the default 11×11 board.
    #[must_use]
    pub fn new() -> Self {
        Self::from_validated(GridConfig::default())
    }

    /// Creates a world from a custom configuration.
    pub fn with_config(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: GridConfig) -> Self {
        let dimensions = config.dimensions();
        let cat_start = dimensions.center();
        Self {
            banner: WELCOME_BANNER,
            config,
            grid: HexGrid::new(dimensions),
            cat: cat_start,
            cat_start,
            state: GameState::Playing,
            turn: Turn::Player,
        }
    }

    fn block_cell(&mut self, cell: CellCoord, out_events: &mut Vec<Event>) {
        if self.state.is_over() {
            reject_block(cell, MoveRejection::GameOver, out_events);
            self.reset(out_events);
            return;
        }

        if self.turn != Turn::Player {
            reject_block(cell, MoveRejection::NotPlayerTurn, out_events);
            return;
        }

        let Some(target) = self.grid.cell(cell) else {
            reject_block(cell, MoveRejection::OutOfBounds, out_events);
            return;
        };

        if target.is_wall {
            reject_block(cell, MoveRejection::AlreadyWall, out_events);
            return;
        }

        if cell == self.cat {
            reject_block(cell, MoveRejection::OccupiedByCat, out_events);
            return;
        }

        let _ = self.grid.set_wall(cell);
        out_events.push(Event::CellChanged {
            cell,
            is_wall: true,
        });

        if reachability::is_enclosed(&self.grid.view(), self.cat) {
            self.finish_round(GameState::Win, Status::CatTrapped, out_events);
            return;
        }

        self.turn = Turn::Cat;
        out_events.push(Event::CatTurnStarted { cell: self.cat });
    }

    fn step_cat(&mut self, direction: HexDirection, out_events: &mut Vec<Event>) {
        if self.state.is_over() || self.turn != Turn::Cat {
            log::warn!("cat step {direction:?} arrived outside the cat's turn");
            out_events.push(Event::CatStepRejected {
                direction,
                reason: StepRejection::NotCatTurn,
            });
            return;
        }

        let destination = self.cat.neighbor(direction);
        if !self.grid.view().is_open(destination) {
            log::warn!("cat step {direction:?} from {:?} is blocked", self.cat);
            out_events.push(Event::CatStepRejected {
                direction,
                reason: StepRejection::Blocked,
            });
            return;
        }

        let from = self.cat;
        self.cat = destination;
        self.turn = Turn::Player;
        out_events.push(Event::CatMoved {
            from,
            to: destination,
        });

        if self.grid.dimensions().is_boundary(destination) {
            self.finish_round(GameState::Lose, Status::CatEscaped, out_events);
        }
    }

    fn concede_cat(&mut self, out_events: &mut Vec<Event>) {
        if self.state.is_over() || self.turn != Turn::Cat {
            log::warn!("ignoring cat concession outside the cat's turn");
            return;
        }

        self.finish_round(GameState::Win, Status::CatConceded, out_events);
    }

    fn finish_round(&mut self, state: GameState, status: Status, out_events: &mut Vec<Event>) {
        log::info!("round finished as {state:?} with the cat at {:?}", self.cat);
        self.state = state;
        self.turn = Turn::Player;
        out_events.push(Event::StateChanged { state });
        out_events.push(Event::StatusChanged { status });
    }

    fn reset(&mut self, out_events: &mut Vec<Event>) {
        for cell in self.grid.clear() {
            out_events.push(Event::CellChanged {
                cell,
                is_wall: false,
            });
        }

        if self.cat != self.cat_start {
            let from = self.cat;
            self.cat = self.cat_start;
            out_events.push(Event::CatMoved {
                from,
                to: self.cat_start,
            });
        }

        self.turn = Turn::Player;
        if self.state != GameState::Playing {
            self.state = GameState::Playing;
            out_events.push(Event::StateChanged {
                state: GameState::Playing,
            });
        }

        out_events.push(Event::StatusChanged {
            status: Status::NewRound,
        });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn reject_block(cell: CellCoord, reason: MoveRejection, out_events: &mut Vec<Event>) {
    log::debug!("rejected wall at {cell:?}: {reason:?}");
    out_events.push(Event::BlockRejected { cell, reason });
    out_events.push(Event::StatusChanged {
        status: Status::Rejected { reason },
    });
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    log::debug!("applying {command:?}");
    match command {
        Command::BlockCell { cell } => world.block_cell(cell, out_events),
        Command::StepCat { direction } => world.step_cat(direction, out_events),
        Command::ConcedeCat => world.concede_cat(out_events),
        Command::Reset => world.reset(out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use catch_the_cat_core::{
        Cell, CellCoord, GameState, GridConfig, GridDimensions, GridView, Turn,
    };

    use super::{reachability, World};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Configuration the world was built from.
    #[must_use]
    pub fn config(world: &World) -> &GridConfig {
        &world.config
    }

    /// Dimensions of the board.
    #[must_use]
    pub fn dimensions(world: &World) -> GridDimensions {
        world.grid.dimensions()
    }

    /// Exposes a read-only view of the wall grid.
    #[must_use]
    pub fn grid_view(world: &World) -> GridView<'_> {
        world.grid.view()
    }

    /// Looks up a cell; `None` when the coordinate lies off the board.
    #[must_use]
    pub fn cell(world: &World, coord: CellCoord) -> Option<Cell> {
        world.grid.cell(coord)
    }

    /// Number of walls currently on the board.
    #[must_use]
    pub fn wall_count(world: &World) -> usize {
        world.grid.wall_count()
    }

    /// Cell currently occupied by the cat.
    #[must_use]
    pub fn cat_cell(world: &World) -> CellCoord {
        world.cat
    }

    /// Cell the cat returns to when the round resets.
    #[must_use]
    pub fn cat_start(world: &World) -> CellCoord {
        world.cat_start
    }

    /// Current round state.
    #[must_use]
    pub fn game_state(world: &World) -> GameState {
        world.state
    }

    /// Whose move the world is waiting for.
    #[must_use]
    pub fn turn(world: &World) -> Turn {
        world.turn
    }

    /// Reports whether the cat has no open path to the edge of the board.
    #[must_use]
    pub fn is_cat_enclosed(world: &World) -> bool {
        reachability::is_enclosed(&world.grid.view(), world.cat)
    }
}

/// Helpers that arrange boards directly, bypassing turn validation.
#[cfg(feature = "wall_scaffolding")]
pub mod scaffolding {
    use catch_the_cat_core::CellCoord;

    use super::World;

    /// Places a wall without running a turn.
    ///
    /// Returns `false` when the cell is off the board, already a wall, or
    /// holds the cat.
    pub fn place_wall(world: &mut World, cell: CellCoord) -> bool {
        if cell == world.cat {
            return false;
        }
        world.grid.set_wall(cell)
    }

    /// Moves the cat to an open cell without running a turn.
    ///
    /// Returns `false` when the cell is off the board or a wall.
    pub fn place_cat(world: &mut World, cell: CellCoord) -> bool {
        if !world.grid.view().is_open(cell) {
            return false;
        }
        world.cat = cell;
        true
    }
}
