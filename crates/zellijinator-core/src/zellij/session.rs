//! Talking to the zellij binary - Imperative Shell
//!
//! Everything that spawns `zellij` lives here. The decisions about what to
//! spawn (`LaunchPlan`, `parse_session_list`, `launch_args`) are pure.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::debug;

use crate::{model::ProjectSpec, Error, Result};

const ZELLIJ: &str = "zellij";

/// Whether this process runs inside a zellij session.
pub fn is_inside_zellij() -> bool {
    std::env::var_os("ZELLIJ").is_some()
}

/// Refuse to nest sessions.
///
/// # Errors
///
/// Returns a validation error when `ZELLIJ` is set
pub fn check_not_inside_zellij() -> Result<()> {
    if is_inside_zellij() {
        return Err(Error::validation_error(
            "Already inside a Zellij session. Exit it first (Ctrl+q) before starting another.",
        ));
    }
    Ok(())
}

/// Session names from `zellij list-sessions -n` output.
pub fn parse_session_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Names of the sessions zellij currently knows about.
///
/// # Errors
///
/// Returns error if zellij cannot be executed or exits non-zero
pub async fn list_sessions() -> Result<Vec<String>> {
    let output = Command::new(ZELLIJ)
        .args(["list-sessions", "-n"])
        .output()
        .await
        .map_err(|e| Error::command_error(format!("Failed to execute zellij: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::command_error(format!(
            "zellij list-sessions failed: {}",
            stderr.trim()
        )));
    }

    Ok(parse_session_list(&String::from_utf8_lossy(&output.stdout)))
}

/// Whether `name` is an existing session. False when zellij cannot be asked.
pub async fn session_is_active(name: &str) -> bool {
    list_sessions()
        .await
        .is_ok_and(|sessions| sessions.iter().any(|session| session == name))
}

/// Attach the terminal to an existing session.
///
/// # Errors
///
/// Returns error if zellij cannot be executed or exits non-zero
pub async fn attach(name: &str) -> Result<()> {
    debug!(session = name, "attaching");
    let mut command = Command::new(ZELLIJ);
    command.args(["attach", name]);
    run_interactive(&mut command, "attach").await
}

/// Kill a running session.
///
/// # Errors
///
/// Returns error if zellij cannot be executed or exits non-zero
pub async fn kill_session(name: &str) -> Result<()> {
    debug!(session = name, "killing session");
    let output = Command::new(ZELLIJ)
        .args(["kill-session", name])
        .output()
        .await
        .map_err(|e| Error::command_error(format!("Failed to execute zellij: {e}")))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(Error::command_error(format!(
            "zellij kill-session failed: {}",
            stderr.trim()
        )))
    }
}

/// Start a new session from a layout file.
///
/// Runs in `cwd` (when non-empty) with `env` added to the inherited
/// environment.
///
/// # Errors
///
/// Returns error if zellij cannot be executed or exits non-zero
pub async fn launch(layout_path: &Path, cwd: &str, env: &BTreeMap<String, String>) -> Result<()> {
    debug!(layout = %layout_path.display(), cwd, "launching zellij");

    let mut command = Command::new(ZELLIJ);
    command.args(launch_args(layout_path)).envs(env);
    if !cwd.is_empty() {
        command.current_dir(cwd);
    }

    run_interactive(&mut command, "launch").await
}

async fn run_interactive(command: &mut Command, action: &str) -> Result<()> {
    let status = command
        .status()
        .await
        .map_err(|e| Error::command_error(format!("Failed to execute zellij: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::command_error(format!("zellij {action} failed: {status}")))
    }
}

/// Arguments for starting a session from a layout file.
pub fn launch_args(layout_path: &Path) -> Vec<OsString> {
    vec![OsString::from("--layout"), layout_path.as_os_str().to_owned()]
}

/// Where a new session's layout comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    /// The project's own `.kdl` file
    Custom(PathBuf),
    /// Compiled from the project's tabs
    Generated,
}

/// What `start` should do for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    Attach { session: String },
    Create { session: String, layout: LayoutSource },
}

impl LaunchPlan {
    /// Attach when the session is among `active`, else create it (pure).
    pub fn for_project(project: &ProjectSpec, active: &[String]) -> Self {
        let session = project.effective_session_name().to_string();

        if active.contains(&session) {
            return Self::Attach { session };
        }

        let layout = project
            .layout_file
            .as_deref()
            .filter(|path| !path.is_empty())
            .map_or(LayoutSource::Generated, |path| {
                LayoutSource::Custom(PathBuf::from(path))
            });

        Self::Create { session, layout }
    }

    pub fn session(&self) -> &str {
        match self {
            Self::Attach { session } | Self::Create { session, .. } => session,
        }
    }
}
