use crate::SessionStats;

/// Share of finished rounds the player won, in basis points.
///
/// Returns `None` until at least one round has finished.
#[must_use]
pub fn win_rate_bps(stats: &SessionStats) -> Option<u32> {
    let finished = u64::from(stats.finished_rounds());
    if finished == 0 {
        return None;
    }

    let scaled = u64::from(stats.wins) * 10_000 / finished;
    u32::try_from(scaled).ok()
}

/// Average number of walls the player needed per finished round.
///
/// Walls of the round still in progress are excluded.
#[must_use]
pub fn mean_walls_per_finished_round(stats: &SessionStats) -> Option<f32> {
    let finished = stats.finished_rounds();
    if finished == 0 {
        return None;
    }

    let settled = stats.walls_placed.saturating_sub(stats.current_round_walls);
    Some(settled as f32 / finished as f32)
}
