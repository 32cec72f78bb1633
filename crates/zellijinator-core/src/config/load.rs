//! Settings loading from file and environment
//!
//! All operations return new instances rather than mutating in place.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{defaults::default_projects_dir, types::Settings};
use crate::{project::expand_path, Error, Result};

/// Load settings from all sources.
///
/// `explicit` is a `--config` path; it must exist. Without it the global
/// settings file is read when present.
///
/// # Errors
///
/// Returns error if:
/// - The settings file is unreadable or malformed TOML
/// - An environment override cannot be parsed
/// - Values fail validation
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let settings = match explicit {
        Some(path) if !path.exists() => {
            return Err(Error::invalid_config(format!(
                "Settings file not found: {}",
                path.display()
            )));
        }
        Some(path) => load_toml_file(path)?,
        None => match global_settings_path() {
            Some(path) if path.is_file() => load_toml_file(&path)?,
            _ => Settings::default(),
        },
    };

    let settings = settings.apply_env_vars()?.expand_dirs();
    settings.validate()?;

    debug!(
        projects_dir = %settings.projects_dir.display(),
        layout_dir = %settings.layout_dir.display(),
        "settings loaded"
    );
    Ok(settings)
}

/// `~/.zellijinator/config.toml`
pub fn global_settings_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|_| default_projects_dir().join("config.toml"))
}

/// Parse a settings file. Missing keys keep their defaults.
///
/// # Errors
///
/// Returns error if the path is a directory, cannot be read, or is not valid TOML
pub fn load_toml_file(path: &Path) -> Result<Settings> {
    if path.is_dir() {
        return Err(Error::io_error(format!(
            "Settings path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::io_error(format!(
            "Failed to read settings file {}: {e}",
            path.display()
        ))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::parse_error(format!(
            "Failed to parse settings file {}: {e}",
            path.display()
        ))
    })
}

impl Settings {
    /// Apply `ZELLIJINATOR_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns error if an environment value is invalid
    pub fn apply_env_vars(mut self) -> Result<Self> {
        if let Some(value) = non_empty_var("ZELLIJINATOR_PROJECTS_DIR") {
            self.projects_dir = PathBuf::from(value);
        }

        if let Some(value) = non_empty_var("ZELLIJINATOR_LAYOUT_DIR") {
            self.layout_dir = PathBuf::from(value);
        }

        if let Some(value) = non_empty_var("ZELLIJINATOR_LAYOUT_RETENTION_HOURS") {
            self.layout_retention_hours = value.trim().parse().map_err(|e| {
                Error::invalid_config(format!(
                    "Invalid ZELLIJINATOR_LAYOUT_RETENTION_HOURS value '{value}': {e}"
                ))
            })?;
        }

        if let Some(value) = non_empty_var("ZELLIJINATOR_SHELL") {
            self.shell = Some(value);
        }

        Ok(self)
    }

    /// Expand `~` and `$VAR` in directory settings.
    #[must_use]
    pub fn expand_dirs(mut self) -> Self {
        self.projects_dir = expand_dir(&self.projects_dir);
        self.layout_dir = expand_dir(&self.layout_dir);
        self
    }
}

fn expand_dir(dir: &Path) -> PathBuf {
    dir.to_str()
        .map_or_else(|| dir.to_path_buf(), |raw| PathBuf::from(expand_path(raw)))
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
