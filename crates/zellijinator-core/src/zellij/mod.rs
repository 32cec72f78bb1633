//! Zellij layout compilation and session plumbing
//!
//! # Architecture
//!
//! - **Functional core** (`config`, `tree`, `command`, `compile`, `kdl`):
//!   pure functions from a `ProjectSpec` to layout text. No I/O, no
//!   environment reads, no errors.
//! - **Imperative shell** (`generate`, `session`): writes layout files and
//!   talks to the `zellij` binary.
//!
//! ```text
//! ProjectSpec ─▶ compile::build_document ─▶ LayoutDocument ─▶ kdl::render ─▶ String
//!                   │                           (tabs with Node trees)
//!                   ├─ tree::pane_tree      (split geometry)
//!                   └─ command::synthesize  (pane startup line)
//! ```

pub mod command;
pub mod compile;
pub mod config;
pub mod generate;
pub mod kdl;
pub mod session;
pub mod tree;

pub use command::{startup_line, synthesize, PaneCommand};
pub use compile::{build_document, compile_layout, focused_tab_index, LayoutDocument, TabNode};
pub use config::{BaseTemplate, CompileOptions, LayoutPattern, PaneMode};
pub use generate::{cleanup_old_layouts, write_layout, Layout};
pub use kdl::{escape_kdl_string, render, KdlWriter};
pub use tree::{pane_tree, Leaf, Node, Slot, Split};
