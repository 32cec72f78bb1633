//! Opening project files in the user's editor

use std::path::Path;

use anyhow::{Context as _, Result};
use tokio::process::Command;
use zellijinator_core::Settings;

/// Tried in order when no editor is configured.
const FALLBACK_EDITORS: [&str; 5] = ["vim", "vi", "nano", "emacs", "code"];

/// Pick an editor: `$EDITOR`, `$VISUAL`, the settings value, then the first
/// installed fallback.
pub fn resolve_editor(settings: &Settings) -> Option<String> {
    resolve_editor_with(
        |key| std::env::var(key).ok(),
        settings.editor.as_deref(),
        |program| which::which(program).is_ok(),
    )
}

pub fn resolve_editor_with(
    lookup: impl Fn(&str) -> Option<String>,
    configured: Option<&str>,
    installed: impl Fn(&str) -> bool,
) -> Option<String> {
    ["EDITOR", "VISUAL"]
        .into_iter()
        .filter_map(&lookup)
        .chain(configured.map(String::from))
        .find(|editor| !editor.trim().is_empty())
        .or_else(|| {
            FALLBACK_EDITORS
                .into_iter()
                .find(|program| installed(program))
                .map(String::from)
        })
}

/// Open `path` in the resolved editor.
///
/// A missing or failing editor is reported but not treated as an error; the
/// file is already in place and can be edited by hand.
pub async fn open_in_editor(settings: &Settings, path: &Path) -> Result<()> {
    let Some(editor) = resolve_editor(settings) else {
        println!("No editor found. Please set the EDITOR environment variable.");
        println!("You can manually edit: {}", path.display());
        return Ok(());
    };

    println!("Opening in {editor}...");
    if let Err(e) = run_editor(&editor, path).await {
        eprintln!("Error opening editor: {e:#}");
        println!("You can manually edit: {}", path.display());
    }
    Ok(())
}

async fn run_editor(editor: &str, path: &Path) -> Result<()> {
    let mut words = editor.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| anyhow::anyhow!("Editor command is empty"))?;

    let status = Command::new(program)
        .args(words)
        .arg(path)
        .status()
        .await
        .with_context(|| format!("Failed to run {program}"))?;

    if status.success() {
        Ok(())
    } else {
        anyhow::bail!("{program} exited with {status}")
    }
}
