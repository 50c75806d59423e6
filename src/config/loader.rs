use std::path::Path;

use crate::error::{Result, TestgapError};

use super::Config;
use super::model::CONFIG_VERSION;

/// Config filename looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = ".testgap.toml";

/// Load configuration.
///
/// An explicit path must exist; otherwise `.testgap.toml` in the working
/// directory is used when present, and the defaults apply when it is not.
/// `no_config` skips file loading entirely.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or declares an
/// unsupported version.
pub fn load_config(explicit: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    if let Some(path) = explicit {
        return load_from_path(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_NAME);
    if default_path.exists() {
        return load_from_path(default_path);
    }

    Ok(Config::default())
}

/// Load and validate a config file from a specific path.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or declares an
/// unsupported version.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| TestgapError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = toml::from_str(&content)?;
    validate_version(&config)?;
    Ok(config)
}

fn validate_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(TestgapError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
