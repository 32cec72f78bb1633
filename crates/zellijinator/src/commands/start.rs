//! Start or attach to a project's session

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing::debug;
use zellijinator_core::{
    model::ProjectSpec,
    zellij::{
        cleanup_old_layouts, compile_layout,
        session::{self, LaunchPlan, LayoutSource},
        write_layout,
    },
};

use super::Context;
use crate::cli::setup::debug_layouts_enabled;

pub async fn run(ctx: &Context, name: &str) -> Result<()> {
    let project = ctx.store.load(name)?;
    session::check_not_inside_zellij()?;

    let active = session::list_sessions().await.unwrap_or_else(|e| {
        debug!(error = %e, "could not list sessions");
        Vec::new()
    });

    match LaunchPlan::for_project(&project, &active) {
        LaunchPlan::Attach { session } => {
            println!("Attaching to existing session {session}...");
            session::attach(&session).await?;
            Ok(())
        }
        LaunchPlan::Create { session, layout } => {
            println!("Creating new session {session}...");
            let layout_path = match layout {
                LayoutSource::Custom(path) => path,
                LayoutSource::Generated => generate_layout(ctx, &project, &session)?,
            };
            create_session(&project, &session, layout_path).await
        }
    }
}

fn generate_layout(ctx: &Context, project: &ProjectSpec, session: &str) -> Result<PathBuf> {
    let kdl = compile_layout(project, &ctx.settings.compile_options());
    let layout = write_layout(&ctx.settings.layout_dir, session, kdl)?;

    cleanup_old_layouts(&ctx.settings.layout_dir, ctx.settings.layout_retention());

    if debug_layouts_enabled() {
        println!("Generated layout file: {}", layout.file_path.display());
        println!("Layout content:");
        println!("{}", layout.kdl_content);
    }

    Ok(layout.file_path)
}

/// Launch a new session; if that fails the session may already exist, so
/// try attaching before giving up.
async fn create_session(project: &ProjectSpec, session: &str, layout_path: PathBuf) -> Result<()> {
    let Err(launch_err) = session::launch(&layout_path, &project.root, &project.env).await else {
        return Ok(());
    };
    debug!(error = %launch_err, "launch failed, trying attach");

    let Err(attach_err) = session::attach(session).await else {
        return Ok(());
    };

    Err(launch_err).with_context(|| {
        format!(
            "Could not start session {session} (attach also failed: {attach_err})\n\
             \n\
             Debug info:\n\
             - Command: zellij --layout {layout}\n\
             - Layout file: {layout}\n\
             - Working directory: {root}",
            layout = layout_path.display(),
            root = project.root,
        )
    })
}
