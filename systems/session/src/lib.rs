#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Turn driver that exposes catch-the-cat to presentation layers.
//!
//! A [`Session`] owns the world and the cat system. Each external stimulus,
//! a click or a reset, is processed to completion before the call returns:
//! the player's command is applied, the cat answers its turn, and every
//! resulting [`Event`] is forwarded to a [`Notifications`] sink in mutation
//! order.

use catch_the_cat_core::{
    CellCoord, Command, ConfigError, Event, GameState, GridConfig, Status, Turn,
};
use catch_the_cat_system_cat::Cat;
use catch_the_cat_world::{self as world, query, World};

/// Callbacks fired synchronously while a session mutates the world.
///
/// Every method defaults to a no-op so adapters only implement what they draw.
pub trait Notifications {
    /// Receives every raw event before the typed callbacks run.
    fn event(&mut self, _event: &Event) {}

    /// A user-facing status message changed.
    fn status_changed(&mut self, _status: Status) {}

    /// The round entered a new state.
    fn state_changed(&mut self, _state: GameState) {}

    /// The cat now stands on the provided cell.
    fn cat_moved(&mut self, _cell: CellCoord) {}

    /// A cell switched between open and wall.
    fn cell_changed(&mut self, _cell: CellCoord, _is_wall: bool) {}
}

impl Notifications for () {}

impl Notifications for Vec<Event> {
    fn event(&mut self, event: &Event) {
        self.push(*event);
    }
}

/// Forwards events to the typed callbacks of a notification sink.
pub fn dispatch<N>(events: &[Event], notifications: &mut N)
where
    N: Notifications + ?Sized,
{
    for event in events {
        notifications.event(event);
        match *event {
            Event::CellChanged { cell, is_wall } => notifications.cell_changed(cell, is_wall),
            Event::CatMoved { to, .. } => notifications.cat_moved(to),
            Event::StateChanged { state } => notifications.state_changed(state),
            Event::StatusChanged { status } => notifications.status_changed(status),
            Event::BlockRejected { .. }
            | Event::CatTurnStarted { .. }
            | Event::CatStepRejected { .. } => {}
        }
    }
}

/// Result of a player click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Whether the wall was placed and the cat moved in response.
    pub accepted: bool,
    /// Round state after the click was processed.
    pub state: GameState,
}

/// Single owned aggregate holding the world and the cat.
#[derive(Debug)]
pub struct Session {
    world: World,
    cat: Cat,
}

impl Session {
    /// Creates a session on the default board.
    #[must_use]
    pub fn new() -> Self {
        Self::from_world(World::new())
    }

    /// Creates a session on a custom board.
    pub fn with_config(config: GridConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_world(World::with_config(config)?))
    }

    /// Wraps an already constructed world.
    #[must_use]
    pub fn from_world(world: World) -> Self {
        Self {
            world,
            cat: Cat::new(),
        }
    }

    /// Read-only access to the world for queries and rendering.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Current round state.
    #[must_use]
    pub fn state(&self) -> GameState {
        query::game_state(&self.world)
    }

    /// Reports whether the cat has no open path to the edge.
    #[must_use]
    pub fn is_cat_caught(&self) -> bool {
        query::is_cat_enclosed(&self.world)
    }

    /// Handles a click on `cell`.
    ///
    /// The click is accepted only when the wall is placed and the cat moves in
    /// response. Clicks after the round ended restart the game and are
    /// reported as not accepted, as are clicks that trap the cat. A cat turn
    /// still pending afterwards is forfeited.
    pub fn on_player_click<N>(&mut self, cell: CellCoord, notifications: &mut N) -> ClickOutcome
    where
        N: Notifications + ?Sized,
    {
        let mut events = Vec::new();
        world::apply(&mut self.world, Command::BlockCell { cell }, &mut events);
        dispatch(&events, notifications);

        let rejected = events
            .iter()
            .any(|event| matches!(event, Event::BlockRejected { .. }));
        let accepted = !rejected && self.resolve_cat_turn(events, notifications);
        self.settle_stalled_cat_turn(notifications);

        let outcome = ClickOutcome {
            accepted,
            state: self.state(),
        };
        log::debug!("click at {cell:?} resolved to {outcome:?}");
        outcome
    }

    /// Clears every wall, returns the cat to its spawn and restarts the round.
    pub fn on_reset<N>(&mut self, notifications: &mut N)
    where
        N: Notifications + ?Sized,
    {
        let mut events = Vec::new();
        world::apply(&mut self.world, Command::Reset, &mut events);
        dispatch(&events, notifications);
        log::info!("round reset");
    }

    fn resolve_cat_turn<N>(&mut self, pending_events: Vec<Event>, notifications: &mut N) -> bool
    where
        N: Notifications + ?Sized,
    {
        let mut events = pending_events;
        let mut cat_moved = false;

        loop {
            let mut commands = Vec::new();
            self.cat
                .handle(&events, &query::grid_view(&self.world), &mut commands);
            if commands.is_empty() {
                break;
            }

            events.clear();
            for command in commands {
                let mut generated = Vec::new();
                world::apply(&mut self.world, command, &mut generated);
                cat_moved |= generated
                    .iter()
                    .any(|event| matches!(event, Event::CatMoved { .. }));
                dispatch(&generated, notifications);
                events.extend(generated);
            }
        }

        cat_moved
    }

    /// Forfeits a cat turn that no system answered, handing control back to the player.
    fn settle_stalled_cat_turn<N>(&mut self, notifications: &mut N)
    where
        N: Notifications + ?Sized,
    {
        if query::turn(&self.world) != Turn::Cat {
            return;
        }

        log::error!(
            "cat turn left unresolved at {:?}; conceding",
            query::cat_cell(&self.world)
        );
        let mut events = Vec::new();
        world::apply(&mut self.world, Command::ConcedeCat, &mut events);
        dispatch(&events, notifications);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
