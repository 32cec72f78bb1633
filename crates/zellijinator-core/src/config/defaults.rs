//! Default settings values

use std::path::PathBuf;

use super::types::Settings;

pub(super) const DEFAULT_RETENTION_HOURS: u64 = 24;

impl Default for Settings {
    fn default() -> Self {
        Self {
            projects_dir: default_projects_dir(),
            layout_dir: std::env::temp_dir().join("zellijinator"),
            layout_retention_hours: DEFAULT_RETENTION_HOURS,
            shell: None,
            editor: None,
        }
    }
}

/// `~/.zellijinator`, or a relative `.zellijinator` without a home directory.
pub(super) fn default_projects_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".zellijinator"))
        .unwrap_or_else(|| PathBuf::from(".zellijinator"))
}
