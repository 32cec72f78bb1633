//! # Zellijinator Core
//!
//! Compiles declarative project files into Zellij layouts, plus the storage,
//! settings and process plumbing around that compiler.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, Error>`. The layout compiler
//! (`zellij::compile_layout`) is total and returns a plain `String`.
//!
//! ## Example
//!
//! ```
//! use zellijinator_core::{model::ProjectSpec, zellij::{compile_layout, CompileOptions}};
//!
//! let project: ProjectSpec = serde_yaml::from_str("name: demo\nroot: /tmp\ntabs:\n  - name: main\n    panes:\n      - commands: [ls]\n").unwrap();
//! let kdl = compile_layout(&project, &CompileOptions::default());
//! assert!(kdl.starts_with("session_name \"demo\""));
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
mod error;
pub mod kdl_validation;
pub mod model;
mod output_format;
pub mod project;
pub mod result;
pub mod zellij;

pub use config::Settings;
pub use error::{Error, ExecutionError, SystemError, ValidationError};
pub use model::{PaneSpec, Percent, ProjectSpec, SplitDirection, TabSpec};
pub use output_format::OutputFormat;
pub use project::ProjectStore;
pub use result::{Result, ResultExt};
