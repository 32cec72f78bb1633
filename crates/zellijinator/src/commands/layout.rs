//! Print (and optionally validate) the layout a project starts with

use anyhow::{Context as _, Result};
use zellijinator_core::{kdl_validation::validate_kdl_syntax, zellij::compile_layout};

use super::Context;

pub fn run(ctx: &Context, name: &str, check: bool) -> Result<()> {
    let project = ctx.store.load(name)?;

    let kdl = match project.layout_file.as_deref().filter(|path| !path.is_empty()) {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file {path}"))?,
        None => compile_layout(&project, &ctx.settings.compile_options()),
    };

    print!("{kdl}");

    if check {
        validate_kdl_syntax(&kdl)?;
        eprintln!("Layout for '{name}' is valid KDL");
    }

    Ok(())
}
