// Grid configuration loading
// Reads GridConfig from a TOML file, falling back to defaults

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::GridConfig;

const CONFIG_FILE_NAME: &str = "grid.toml";

/// `<config dir>/grid.toml`, or `grid.toml` in the working directory when
/// no home directory can be resolved.
pub fn default_config_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "Muscheduler", "Muscheduler") {
        dirs.config_dir().join(CONFIG_FILE_NAME)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for config");
        PathBuf::from(CONFIG_FILE_NAME)
    }
}

/// Parse and validate a TOML grid configuration.
pub fn parse_config(text: &str) -> Result<GridConfig> {
    let config: GridConfig = toml::from_str(text).context("Failed to parse grid config")?;
    config
        .validate()
        .map_err(|e| anyhow!("Invalid grid config: {}", e))?;
    Ok(config)
}

/// Load the grid configuration at `path`; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<GridConfig> {
    if !path.exists() {
        log::info!("No grid config at {}; using defaults", path.display());
        return Ok(GridConfig::default());
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read grid config {}", path.display()))?;
    let config = parse_config(&text)?;
    log::info!("Loaded grid config from {}", path.display());
    Ok(config)
}
