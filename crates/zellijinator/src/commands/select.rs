//! Numbered project picker for commands run without a project name

use std::io::{self, Write};

use anyhow::{bail, Result};
use zellijinator_core::ProjectStore;

use crate::cli::is_stdin_tty;

/// Ask the user to pick one of the stored projects.
pub fn select_project(store: &ProjectStore, prompt: &str) -> Result<String> {
    let projects = store.list()?;
    if projects.is_empty() {
        bail!("No projects found. Create one with: zellijinator new <project-name>");
    }
    if !is_stdin_tty() {
        bail!("No project given and stdin is not a TTY to prompt on");
    }

    println!("{prompt}");
    for (index, project) in projects.iter().enumerate() {
        println!("  {}) {project}", index + 1);
    }
    print!("Enter a number or name: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    parse_selection(&input, &projects)
        .ok_or_else(|| anyhow::anyhow!("No project selected"))
}

/// Resolve a 1-based index or an exact project name.
pub fn parse_selection(input: &str, projects: &[String]) -> Option<String> {
    let input = input.trim();
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| projects.get(index))
        .or_else(|| projects.iter().find(|project| *project == input))
        .cloned()
}
