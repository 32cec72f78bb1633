//! Settings loading and management
//!
//! # Hierarchy
//!
//! Settings are loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Settings file: `~/.zellijinator/config.toml` (or `--config <path>`)
//! 3. Environment variables: `ZELLIJINATOR_*`
//!
//! # Example
//!
//! ```toml
//! projects_dir = "~/dotfiles/zellijinator"
//! layout_retention_hours = 48
//! shell = "/usr/bin/fish"
//! editor = "hx"
//! ```
//!
//! # Module Structure
//!
//! - `types`: the `Settings` struct
//! - `defaults`: default values
//! - `load`: reading the file and environment
//! - `validate`: range checks

mod defaults;
mod load;
mod types;
mod validate;

#[cfg(test)]
mod tests_loading;

pub use load::{global_settings_path, load_settings, load_toml_file};
pub use types::Settings;
