//! Subcommand implementations

pub mod delete;
pub mod edit;
pub mod editor;
pub mod layout;
pub mod list;
pub mod new;
pub mod select;
pub mod start;
pub mod version;

use std::path::Path;

use zellijinator_core::{config::load_settings, ProjectStore, Result, Settings};

/// Settings and project store shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    pub store: ProjectStore,
}

impl Context {
    pub fn load(config: Option<&Path>) -> Result<Self> {
        let settings = load_settings(config)?;
        let store = ProjectStore::from_settings(&settings);
        Ok(Self { settings, store })
    }
}
