use std::io::Write;

use anyhow::{Context, Result};
use catch_the_cat_core::{Event, Status};
use catch_the_cat_rendering::{CellKind, Color, FramePresenter, Palette, Scene};
use catch_the_cat_system_analytics::{mean_walls_per_finished_round, win_rate_bps, Analytics};
use catch_the_cat_system_session::Notifications;

/// Share of white mixed into open cells once the round has a verdict.
const FINISHED_ROUND_FADE: f32 = 0.5;

/// Draws scenes as offset ASCII rows and reports statuses as text.
#[derive(Debug)]
pub(crate) struct TerminalPresenter<W> {
    out: W,
    palette: Option<Palette>,
    analytics: Analytics,
    last_status: Option<Status>,
    pending_statuses: Vec<Status>,
}

impl<W: Write> TerminalPresenter<W> {
    /// Creates a presenter that writes to `out`, using ANSI colors when a palette is given.
    pub(crate) fn new(out: W, palette: Option<Palette>) -> Self {
        Self {
            out,
            palette,
            analytics: Analytics::new(),
            last_status: None,
            pending_statuses: Vec::new(),
        }
    }

    /// Most recent status announced by the session.
    pub(crate) fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    /// Writes a free-form line.
    pub(crate) fn note(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}").context("failed to write to terminal")
    }

    /// Prints the statistics gathered over the session.
    pub(crate) fn write_summary(&mut self) -> Result<()> {
        let stats = self.analytics.stats();
        writeln!(self.out, "{stats}").context("failed to write session summary")?;
        if let Some(rate) = win_rate_bps(&stats) {
            writeln!(self.out, "win rate {}.{:02}%", rate / 100, rate % 100)
                .context("failed to write session summary")?;
        }
        if let Some(mean) = mean_walls_per_finished_round(&stats) {
            writeln!(self.out, "walls per finished round {mean:.1}")
                .context("failed to write session summary")?;
        }
        Ok(())
    }

    /// Gives back the underlying writer.
    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn glyph(&self, kind: CellKind, round_over: bool) -> String {
        let symbol = match kind {
            CellKind::Open => '.',
            CellKind::Wall => '#',
            CellKind::Cat => 'C',
        };
        let Some(palette) = self.palette else {
            return symbol.to_string();
        };

        let color = palette.color_for(kind);
        if round_over && kind == CellKind::Open {
            paint(symbol, color.lighten(FINISHED_ROUND_FADE))
        } else {
            paint(symbol, color)
        }
    }
}

fn paint(symbol: char, color: Color) -> String {
    let [red, green, blue] = color.to_rgb_u8();
    format!("\x1b[38;2;{red};{green};{blue}m{symbol}\x1b[0m")
}

impl<W: Write> Notifications for TerminalPresenter<W> {
    fn event(&mut self, event: &Event) {
        self.analytics.handle(std::slice::from_ref(event));
    }

    fn status_changed(&mut self, status: Status) {
        self.last_status = Some(status);
        self.pending_statuses.push(status);
    }
}

impl<W: Write> FramePresenter for TerminalPresenter<W> {
    fn present(&mut self, scene: &Scene) -> Result<()> {
        for status in std::mem::take(&mut self.pending_statuses) {
            writeln!(self.out, "{}", status.message()).context("failed to write status")?;
        }

        let round_over = scene.state.is_over();
        for row in scene.rows() {
            let indent = row
                .first()
                .map_or(false, |cell| cell.coord.is_odd_row());
            let glyphs: Vec<String> = row
                .iter()
                .map(|cell| self.glyph(cell.kind, round_over))
                .collect();
            let prefix = if indent { " " } else { "" };
            writeln!(self.out, "{prefix}{}", glyphs.join(" ")).context("failed to draw board")?;
        }

        writeln!(self.out, "state: {:?}", scene.state).context("failed to draw board")?;
        self.out.flush().context("failed to flush terminal")
    }
}
