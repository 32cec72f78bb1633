//! Create a project file from the starter template

use anyhow::Result;

use super::{editor::open_in_editor, Context};

pub async fn run(ctx: &Context, name: &str, edit: bool) -> Result<()> {
    let path = ctx.store.create(name)?;

    println!("Created new zellijinator project: {name}");
    println!("Config file: {}", path.display());

    if edit {
        open_in_editor(&ctx.settings, &path).await?;
    }
    Ok(())
}
