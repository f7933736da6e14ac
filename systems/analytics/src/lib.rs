#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic analytics system that tallies session statistics from world events.

mod metrics;

use std::fmt;

use catch_the_cat_core::{Event, GameState, Status};

pub use metrics::{mean_walls_per_finished_round, win_rate_bps};

/// Snapshot of the counters accumulated over a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SessionStats {
    /// Rounds begun, including the one running when the session opened.
    pub rounds_started: u32,
    /// Rounds that ended with the cat caught.
    pub wins: u32,
    /// Rounds that ended with the cat on the edge.
    pub losses: u32,
    /// Walls placed across every round.
    pub walls_placed: u32,
    /// Steps the cat took during its turns.
    pub cat_moves: u32,
    /// Clicks the world refused.
    pub rejected_clicks: u32,
    /// Walls standing in the round currently being played.
    pub current_round_walls: u32,
}

impl SessionStats {
    /// Number of rounds that reached a verdict.
    #[must_use]
    pub const fn finished_rounds(&self) -> u32 {
        self.wins + self.losses
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rounds {} (won {}, lost {}), walls {}, cat moves {}, rejected clicks {}",
            self.rounds_started,
            self.wins,
            self.losses,
            self.walls_placed,
            self.cat_moves,
            self.rejected_clicks
        )
    }
}

/// Pure analytics system that folds world events into [`SessionStats`].
#[derive(Debug)]
pub struct Analytics {
    stats: SessionStats,
    cat_turn_pending: bool,
}

impl Analytics {
    /// Creates an analytics system for a session whose first round is underway.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: SessionStats {
                rounds_started: 1,
                ..SessionStats::default()
            },
            cat_turn_pending: false,
        }
    }

    /// Returns the counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Consumes world events in the order the world emitted them.
    ///
    /// Events may arrive in several batches; cat steps are only counted when
    /// they answer a previously observed [`Event::CatTurnStarted`], so the cat
    /// returning to its spawn on reset is not counted as a move.
    pub fn handle(&mut self, events: &[Event]) {
        for event in events {
            match *event {
                Event::CellChanged { is_wall: true, .. } => {
                    self.stats.walls_placed += 1;
                    self.stats.current_round_walls += 1;
                }
                Event::BlockRejected { .. } => self.stats.rejected_clicks += 1,
                Event::CatTurnStarted { .. } => self.cat_turn_pending = true,
                Event::CatMoved { .. } if self.cat_turn_pending => {
                    self.cat_turn_pending = false;
                    self.stats.cat_moves += 1;
                }
                Event::StateChanged { state } => {
                    self.cat_turn_pending = false;
                    match state {
                        GameState::Win => self.stats.wins += 1,
                        GameState::Lose => self.stats.losses += 1,
                        GameState::Playing => {}
                    }
                }
                Event::StatusChanged {
                    status: Status::NewRound,
                } => {
                    self.cat_turn_pending = false;
                    self.stats.rounds_started += 1;
                    self.stats.current_round_walls = 0;
                }
                _ => {}
            }
        }
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use catch_the_cat_core::{CellCoord, MoveRejection};

    use super::*;

    #[test]
    fn first_round_is_counted_on_creation() {
        let analytics = Analytics::new();

        assert_eq!(analytics.stats().rounds_started, 1);
        assert_eq!(analytics.stats().finished_rounds(), 0);
    }

    #[test]
    fn cat_moves_count_only_inside_cat_turns() {
        let mut analytics = Analytics::new();
        let moved = Event::CatMoved {
            from: CellCoord::new(3, 3),
            to: CellCoord::new(2, 3),
        };

        analytics.handle(&[
            Event::CatTurnStarted {
                cell: CellCoord::new(3, 3),
            },
            moved,
        ]);
        analytics.handle(&[moved]);

        assert_eq!(analytics.stats().cat_moves, 1);
    }

    #[test]
    fn new_round_clears_the_current_wall_tally() {
        let mut analytics = Analytics::new();
        analytics.handle(&[
            Event::CellChanged {
                cell: CellCoord::new(0, 0),
                is_wall: true,
            },
            Event::BlockRejected {
                cell: CellCoord::new(0, 0),
                reason: MoveRejection::AlreadyWall,
            },
            Event::CellChanged {
                cell: CellCoord::new(0, 0),
                is_wall: false,
            },
            Event::StatusChanged {
                status: Status::NewRound,
            },
        ]);

        let stats = analytics.stats();
        assert_eq!(stats.walls_placed, 1);
        assert_eq!(stats.current_round_walls, 0);
        assert_eq!(stats.rejected_clicks, 1);
        assert_eq!(stats.rounds_started, 2);
    }

    #[test]
    fn display_summarises_counters() {
        let stats = SessionStats {
            rounds_started: 3,
            wins: 1,
            losses: 1,
            walls_placed: 12,
            cat_moves: 9,
            rejected_clicks: 2,
            current_round_walls: 0,
        };

        assert_eq!(
            stats.to_string(),
            "rounds 3 (won 1, lost 1), walls 12, cat moves 9, rejected clicks 2"
        );
    }
}
