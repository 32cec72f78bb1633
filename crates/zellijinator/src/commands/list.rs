//! List stored projects

use anyhow::Result;
use serde::Serialize;
use tracing::debug;
use zellijinator_core::{zellij::session, OutputFormat, ProjectStore};

use super::Context;

/// One row of `list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    pub tabs: Vec<String>,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn run(ctx: &Context, active_only: bool, format: OutputFormat) -> Result<()> {
    let active = session::list_sessions().await.unwrap_or_else(|e| {
        debug!(error = %e, "could not list sessions");
        Vec::new()
    });

    let summaries: Vec<ProjectSummary> = summarize(&ctx.store, &active)?
        .into_iter()
        .filter(|summary| !active_only || summary.active)
        .collect();

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print_human(&summaries, active_only);
    }
    Ok(())
}

/// Summaries of every stored project; unreadable files are reported, not fatal.
pub fn summarize(store: &ProjectStore, active: &[String]) -> zellijinator_core::Result<Vec<ProjectSummary>> {
    Ok(store
        .list()?
        .into_iter()
        .map(|name| match store.load_raw(&name) {
            Ok(project) => {
                let session_name = project.effective_session_name().to_string();
                ProjectSummary {
                    active: active.contains(&session_name),
                    session_name: Some(session_name),
                    root: Some(project.root.clone()).filter(|root| !root.is_empty()),
                    tabs: project.tab_names().into_iter().map(String::from).collect(),
                    error: None,
                    name,
                }
            }
            Err(e) => ProjectSummary {
                name,
                session_name: None,
                root: None,
                tabs: Vec::new(),
                active: false,
                error: Some(e.to_string()),
            },
        })
        .collect())
}

fn print_human(summaries: &[ProjectSummary], active_only: bool) {
    if summaries.is_empty() {
        if active_only {
            println!("No projects with a running session.");
        } else {
            println!("No projects found.");
            println!("Create a new project with: zellijinator new <project-name>");
        }
        return;
    }

    println!("Zellijinator Projects");
    println!();

    for summary in summaries {
        match (&summary.error, summary.active) {
            (Some(_), _) => println!("  {} (error reading config)", summary.name),
            (None, true) => println!("  {} ACTIVE", summary.name),
            (None, false) => println!("  {}", summary.name),
        }
        if let Some(root) = &summary.root {
            println!("    Root: {root}");
        }
        if !summary.tabs.is_empty() {
            println!("    Tabs: {}", summary.tabs.join(", "));
        }
        println!();
    }
}
