//! CLI command handlers that bridge between `clap` and the commands

use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use zellijinator_core::OutputFormat;

use super::{build_cli, setup};
use crate::commands::{delete, edit, layout, list, new, select, start, version, Context};

/// Format an error for user display (no stack traces)
pub fn format_error(err: &anyhow::Error) -> String {
    err.chain()
        .map(ToString::to_string)
        .reduce(|msg, cause| {
            if msg.contains(&cause) {
                msg
            } else {
                format!("{msg}\nCause: {cause}")
            }
        })
        .unwrap_or_default()
}

/// Parse arguments, set up logging and run the selected command.
pub async fn run_cli() -> Result<()> {
    let matches = build_cli().get_matches();
    setup::init_tracing(matches.get_flag("verbose"))?;
    dispatch(&matches).await
}

pub async fn dispatch(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("start", sub_m)) => handle_start(matches, sub_m).await,
        Some(("layout", sub_m)) => handle_layout(matches, sub_m).await,
        Some(("new", sub_m)) => handle_new(matches, sub_m).await,
        Some(("edit", sub_m)) => handle_edit(matches, sub_m).await,
        Some(("delete", sub_m)) => handle_delete(matches, sub_m).await,
        Some(("list", sub_m)) => handle_list(matches, sub_m).await,
        Some(("version", sub_m)) => version::run(json_format(sub_m)),
        Some((other, _)) => anyhow::bail!("Unknown command '{other}'. Run 'zellijinator --help' for usage."),
        None => handle_root(matches).await,
    }
}

fn load_context(matches: &ArgMatches) -> Result<Context> {
    let config = matches.get_one::<String>("config").map(PathBuf::from);
    Ok(Context::load(config.as_deref())?)
}

fn project_name(sub_m: &ArgMatches) -> Option<String> {
    sub_m.get_one::<String>("project").cloned()
}

fn json_format(sub_m: &ArgMatches) -> OutputFormat {
    OutputFormat::from_json_flag(sub_m.get_flag("json"))
}

async fn handle_root(matches: &ArgMatches) -> Result<()> {
    let ctx = load_context(matches)?;

    if let Some(name) = project_name(matches) {
        return start::run(&ctx, &name).await;
    }

    match select::select_project(&ctx.store, "Select a project to start:") {
        Ok(name) => start::run(&ctx, &name).await,
        Err(e) => {
            tracing::debug!(error = %e, "no project selected");
            build_cli().print_help()?;
            Ok(())
        }
    }
}

async fn handle_start(matches: &ArgMatches, sub_m: &ArgMatches) -> Result<()> {
    let ctx = load_context(matches)?;
    let name = match project_name(sub_m) {
        Some(name) => name,
        None => select::select_project(&ctx.store, "Select a project to start:")?,
    };
    start::run(&ctx, &name).await
}

async fn handle_layout(matches: &ArgMatches, sub_m: &ArgMatches) -> Result<()> {
    let ctx = load_context(matches)?;
    let name = project_name(sub_m).ok_or_else(|| anyhow::anyhow!("Project is required"))?;
    layout::run(&ctx, &name, sub_m.get_flag("check"))
}

async fn handle_new(matches: &ArgMatches, sub_m: &ArgMatches) -> Result<()> {
    let ctx = load_context(matches)?;
    let name = project_name(sub_m).ok_or_else(|| anyhow::anyhow!("Project is required"))?;
    new::run(&ctx, &name, !sub_m.get_flag("no-edit")).await
}

async fn handle_edit(matches: &ArgMatches, sub_m: &ArgMatches) -> Result<()> {
    let ctx = load_context(matches)?;
    let name = match project_name(sub_m) {
        Some(name) => name,
        None => select::select_project(&ctx.store, "Select a project to edit:")?,
    };
    edit::run(&ctx, &name).await
}

async fn handle_delete(matches: &ArgMatches, sub_m: &ArgMatches) -> Result<()> {
    let ctx = load_context(matches)?;
    let name = match project_name(sub_m) {
        Some(name) => name,
        None => select::select_project(&ctx.store, "Select a project to delete:")?,
    };
    let options = delete::DeleteOptions {
        force: sub_m.get_flag("force"),
        kill: sub_m.get_flag("kill"),
    };
    delete::run(&ctx, &name, options).await
}

async fn handle_list(matches: &ArgMatches, sub_m: &ArgMatches) -> Result<()> {
    let ctx = load_context(matches)?;
    list::run(&ctx, sub_m.get_flag("active"), json_format(sub_m)).await
}
