//! Project file storage
//!
//! Project files are YAML documents stored one per project as
//! `<projects_dir>/<name>.yaml`. This module owns reading, listing, creating
//! and deleting them, plus the `~`/`$VAR` expansion applied to paths before a
//! project reaches the layout compiler.
//!
//! # Module Structure
//!
//! - `store`: `ProjectStore` and project name validation
//! - `expand`: home and environment expansion for path fields
//! - `sample`: the commented starter file written by `new`

mod expand;
mod sample;
mod store;

pub use expand::{expand_path, expand_path_with};
pub use sample::sample_project;
pub use store::{validate_project_name, ProjectStore, PROJECT_EXTENSION};
