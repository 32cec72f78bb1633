//! Settings type definitions

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::zellij::CompileOptions;

/// User settings for the CLI around the layout compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `<project>.yaml` files
    pub projects_dir: PathBuf,
    /// Directory for generated layout files
    pub layout_dir: PathBuf,
    /// Generated layouts older than this are removed
    pub layout_retention_hours: u64,
    /// Interactive shell exec'd at the end of every pane
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
    /// Editor for `new` and `edit`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl Settings {
    pub const fn layout_retention(&self) -> Duration {
        Duration::from_secs(self.layout_retention_hours.saturating_mul(60 * 60))
    }

    /// Compiler options for these settings.
    ///
    /// The shell comes from the settings, then `$SHELL`, then `/bin/bash`.
    pub fn compile_options(&self) -> CompileOptions {
        self.shell
            .as_deref()
            .filter(|shell| !shell.trim().is_empty())
            .map_or_else(CompileOptions::from_env, CompileOptions::new)
    }
}
