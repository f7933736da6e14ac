use std::{fs, path::Path};

use anyhow::{Context, Result};
use catch_the_cat_core::GridConfig;
use serde::Deserialize;

/// Contents of an optional TOML settings file.
///
/// ```toml
/// [grid]
/// columns = 9
/// rows = 9
/// cell_size = 40.0
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    grid: GridConfig,
}

/// Command-line values that take precedence over the settings file.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct GridOverrides {
    pub(crate) columns: Option<u32>,
    pub(crate) rows: Option<u32>,
    pub(crate) cell_size: Option<f32>,
}

/// Reads the board configuration from `path`, or the defaults when absent.
pub(crate) fn load(path: Option<&Path>) -> Result<GridConfig> {
    let Some(path) = path else {
        return Ok(GridConfig::default());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file at {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid settings file at {}", path.display()))
}

fn parse(contents: &str) -> Result<GridConfig> {
    let settings: SettingsFile =
        toml::from_str(contents).context("failed to parse settings toml contents")?;
    Ok(settings.grid)
}

/// Applies overrides and validates the final configuration.
pub(crate) fn resolve(mut config: GridConfig, overrides: GridOverrides) -> Result<GridConfig> {
    if let Some(columns) = overrides.columns {
        config.columns = columns;
    }
    if let Some(rows) = overrides.rows {
        config.rows = rows;
    }
    if let Some(cell_size) = overrides.cell_size {
        config.cell_size = cell_size;
    }

    config.validate().context("board configuration rejected")?;
    Ok(config)
}
