//! Command-line surface

pub mod handlers;
pub mod setup;

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("zellijinator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Start Zellij sessions from declarative project files")
        .long_about(
            "Zellijinator manages Zellij sessions with pre-configured layouts.\n\
             \n\
             Describe tabs, panes and startup commands in ~/.zellijinator/<project>.yaml,\n\
             then `zellijinator <project>` starts or re-attaches the session.",
        )
        .args_conflicts_with_subcommands(true)
        .arg(
            Arg::new("project")
                .help("Project to start (prompts when omitted)")
                .value_name("PROJECT"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .help("Settings file (default: ~/.zellijinator/config.toml)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(cmd_start())
        .subcommand(cmd_layout())
        .subcommand(cmd_new())
        .subcommand(cmd_edit())
        .subcommand(cmd_delete())
        .subcommand(cmd_list())
        .subcommand(cmd_version())
}

fn project_arg(help: &'static str) -> Arg {
    Arg::new("project").value_name("PROJECT").help(help)
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn cmd_start() -> Command {
    Command::new("start")
        .about("Start a project's Zellij session, or attach to it")
        .arg(project_arg("Project to start (prompts when omitted)"))
}

fn cmd_layout() -> Command {
    Command::new("layout")
        .about("Print the layout a project would start with")
        .arg(project_arg("Project to compile").required(true))
        .arg(
            Arg::new("check")
                .long("check")
                .action(ArgAction::SetTrue)
                .help("Validate the layout as KDL"),
        )
}

fn cmd_new() -> Command {
    Command::new("new")
        .about("Create a new project file")
        .arg(project_arg("Name of the new project").required(true))
        .arg(
            Arg::new("no-edit")
                .long("no-edit")
                .action(ArgAction::SetTrue)
                .help("Do not open the new file in an editor"),
        )
}

fn cmd_edit() -> Command {
    Command::new("edit")
        .about("Open a project file in your editor")
        .arg(project_arg("Project to edit (prompts when omitted)"))
}

fn cmd_delete() -> Command {
    Command::new("delete")
        .about("Delete a project file")
        .arg(project_arg("Project to delete (prompts when omitted)"))
        .arg(
            Arg::new("force")
                .short('f')
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Delete without confirmation"),
        )
        .arg(
            Arg::new("kill")
                .short('k')
                .long("kill")
                .action(ArgAction::SetTrue)
                .help("Kill the project's Zellij session if running"),
        )
}

fn cmd_list() -> Command {
    Command::new("list")
        .about("List projects")
        .arg(
            Arg::new("active")
                .short('a')
                .long("active")
                .action(ArgAction::SetTrue)
                .help("Only show projects with a running session"),
        )
        .arg(json_arg())
}

fn cmd_version() -> Command {
    Command::new("version")
        .about("Print version information")
        .arg(json_arg())
}

/// Check if stdin is connected to a terminal.
pub fn is_stdin_tty() -> bool {
    use std::io::IsTerminal;
    std::io::stdin().is_terminal()
}
