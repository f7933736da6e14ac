use anyhow::{bail, Context, Result};
use catch_the_cat_core::CellCoord;
use glam::Vec2;

/// Single instruction read from the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum InputCommand {
    /// Place a wall on the given cell.
    Cell(CellCoord),
    /// Place a wall on whatever cell lies under the world-space point.
    Pixel(Vec2),
    /// Restart the round.
    Reset,
    /// Leave the game.
    Quit,
}

/// Parses one line of player input.
///
/// Blank lines and lines starting with `#` yield `Ok(None)`.
pub(crate) fn parse_line(line: &str) -> Result<Option<InputCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };

    let command = match first.to_ascii_lowercase().as_str() {
        "reset" | "r" => InputCommand::Reset,
        "quit" | "q" | "exit" => InputCommand::Quit,
        "px" => {
            let x = parse_number::<f32>(words.next(), "x")?;
            let y = parse_number::<f32>(words.next(), "y")?;
            InputCommand::Pixel(Vec2::new(x, y))
        }
        _ => {
            let column = parse_number::<i32>(Some(first), "column")?;
            let row = parse_number::<i32>(words.next(), "row")?;
            InputCommand::Cell(CellCoord::new(column, row))
        }
    };

    if let Some(extra) = words.next() {
        bail!("unexpected trailing input `{extra}`");
    }

    Ok(Some(command))
}

fn parse_number<T>(word: Option<&str>, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(word) = word else {
        bail!("missing {name}");
    };
    word.parse()
        .with_context(|| format!("`{word}` is not a valid {name}"))
}
