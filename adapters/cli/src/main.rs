#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays catch-the-cat in the terminal.

mod config;
mod input;
mod terminal;

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use catch_the_cat_rendering::{FramePresenter, HexLayout, Palette, Scene};
use catch_the_cat_system_session::Session;
use catch_the_cat_world::query;
use clap::Parser;

use crate::{
    config::GridOverrides,
    input::{parse_line, InputCommand},
    terminal::TerminalPresenter,
};

#[derive(Debug, Parser)]
#[command(name = "catch-the-cat", version)]
#[command(about = "Surround the cat with walls before it reaches the edge of the board")]
struct Args {
    /// TOML settings file with a `[grid]` table
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of columns, overriding the settings file
    #[arg(long)]
    columns: Option<u32>,

    /// Number of rows, overriding the settings file
    #[arg(long)]
    rows: Option<u32>,

    /// Hexagon width in world units, used by `px` clicks
    #[arg(long)]
    cell_size: Option<f32>,

    /// Read moves from a file instead of stdin
    #[arg(long)]
    moves: Option<PathBuf>,

    /// Color the board with ANSI escape codes
    #[arg(long)]
    color: bool,
}

/// Entry point for the catch-the-cat command-line interface.
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let file_config = config::load(args.config.as_deref())?;
    let grid_config = config::resolve(
        file_config,
        GridOverrides {
            columns: args.columns,
            rows: args.rows,
            cell_size: args.cell_size,
        },
    )?;
    log::info!(
        "starting a {}x{} board",
        grid_config.columns,
        grid_config.rows
    );

    let mut session = Session::with_config(grid_config).context("failed to create the board")?;
    let layout = HexLayout::from_config(&grid_config).context("failed to lay out the board")?;
    let palette = args.color.then(Palette::default);
    let mut presenter = TerminalPresenter::new(io::stdout().lock(), palette);

    let reader: Box<dyn BufRead> = match &args.moves {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("failed to open moves file at {}", path.display())
        })?)),
        None => Box::new(io::stdin().lock()),
    };

    play(&mut session, layout, reader, &mut presenter)?;
    presenter.write_summary()
}

fn play<R, W>(
    session: &mut Session,
    layout: HexLayout,
    input: R,
    presenter: &mut TerminalPresenter<W>,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    presenter.note(query::welcome_banner(session.world()))?;
    present(session, layout, presenter)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                log::warn!("ignoring input {line:?}: {error:#}");
                presenter.note(&format!("{error:#}"))?;
                continue;
            }
        };

        match command {
            InputCommand::Cell(cell) => {
                let _ = session.on_player_click(cell, presenter);
            }
            InputCommand::Pixel(point) => match layout.cell_at(point) {
                Some(cell) => {
                    let _ = session.on_player_click(cell, presenter);
                }
                None => {
                    presenter.note(&format!("no cell at ({}, {})", point.x, point.y))?;
                    continue;
                }
            },
            InputCommand::Reset => session.on_reset(presenter),
            InputCommand::Quit => break,
        }

        present(session, layout, presenter)?;
    }

    Ok(())
}

fn present<W: Write>(
    session: &Session,
    layout: HexLayout,
    presenter: &mut TerminalPresenter<W>,
) -> Result<()> {
    let world = session.world();
    let scene = Scene::capture(
        layout,
        &query::grid_view(world),
        query::cat_cell(world),
        session.state(),
        presenter.last_status(),
    );
    presenter.present(&scene)
}
