//! Configuration file loading for the CLI
//!
//! Finds and loads a TOML configuration file from an explicit path, the
//! local project directory, or the platform config directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use simpledraw::{SimpleDrawError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for SimpleDrawError {
    fn from(err: ConfigError) -> Self {
        SimpleDrawError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (simpledraw/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or holds invalid values
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SimpleDrawError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("simpledraw/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "simpledraw", "simpledraw") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, SimpleDrawError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;

    Ok(config)
}

/// Rejects values the renderer cannot use.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let canvas = config.canvas();
    if canvas.default_paper_size() <= 0 {
        return Err(ConfigError::Validation(format!(
            "default_paper_size must be positive, got {}",
            canvas.default_paper_size()
        )));
    }
    if canvas.default_pen_width() < 0 {
        return Err(ConfigError::Validation(format!(
            "default_pen_width must not be negative, got {}",
            canvas.default_pen_width()
        )));
    }

    let style = config.style();
    style.background_color().map_err(ConfigError::Validation)?;
    style.stroke_color().map_err(ConfigError::Validation)?;
    Ok(())
}
