//! Delete a project file

use std::io::{self, Write};

use anyhow::{bail, Result};
use zellijinator_core::{
    project::validate_project_name,
    zellij::{cleanup_old_layouts, session},
    Error,
};

use super::Context;
use crate::cli::is_stdin_tty;

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteOptions {
    /// Skip the confirmation prompt
    pub force: bool,
    /// Kill the project's running session
    pub kill: bool,
}

pub async fn run(ctx: &Context, name: &str, options: DeleteOptions) -> Result<()> {
    validate_project_name(name)?;
    if !ctx.store.exists(name) {
        return Err(Error::not_found(format!("Project '{name}' not found")).into());
    }

    // An unparsable file can still be deleted; fall back to the file name.
    let session_name = ctx
        .store
        .load_raw(name)
        .map_or_else(|_| name.to_string(), |p| p.effective_session_name().to_string());
    let running = session::session_is_active(&session_name).await;

    if !options.force && !confirm_deletion(name)? {
        println!("Deletion cancelled.");
        return Ok(());
    }

    if running && options.kill {
        match session::kill_session(&session_name).await {
            Ok(()) => println!("Killed Zellij session '{session_name}'."),
            Err(e) => eprintln!("Warning: failed to kill session: {e}"),
        }
    } else if running {
        println!("Zellij session '{session_name}' is still running. Use -k to kill it.");
    }

    ctx.store.delete(name)?;
    println!("Project '{name}' deleted successfully.");

    cleanup_old_layouts(&ctx.settings.layout_dir, ctx.settings.layout_retention());
    Ok(())
}

/// Ask before deleting. Refuses to guess when stdin is not a terminal.
fn confirm_deletion(name: &str) -> Result<bool> {
    if !is_stdin_tty() {
        bail!(
            "Cannot prompt for confirmation: stdin is not a TTY\n\
             \n\
             To delete without confirmation, use --force:\n\
             zellijinator delete {name} --force"
        );
    }

    print!("Are you sure you want to delete project '{name}'? (y/N): ");
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;

    Ok(is_yes(&response))
}

fn is_yes(response: &str) -> bool {
    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}
