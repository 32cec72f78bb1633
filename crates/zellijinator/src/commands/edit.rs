//! Open an existing project file in the editor

use anyhow::Result;
use zellijinator_core::{project::validate_project_name, Error};

use super::{editor::open_in_editor, Context};

pub async fn run(ctx: &Context, name: &str) -> Result<()> {
    validate_project_name(name)?;

    if !ctx.store.exists(name) {
        return Err(Error::not_found(format!(
            "Project '{name}' not found. Create it with: zellijinator new {name}"
        ))
        .into());
    }

    open_in_editor(&ctx.settings, &ctx.store.path(name)).await
}
