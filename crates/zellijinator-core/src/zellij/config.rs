//! Configuration types for layout compilation
//!
//! All operations are pure functions with no side effects, except
//! `CompileOptions::from_env`, which is meant to be called once at the
//! program boundary.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Interactive shell used when nothing else is configured.
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Interpreter that runs each pane's startup line.
pub const DEFAULT_INTERPRETER: &str = "sh";

/// Inputs the compiler needs beyond the project itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Shell exec'd after a pane's commands finish
    pub shell: String,
    /// Portable interpreter invoked as `<interpreter> -c <line>`
    pub interpreter: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            shell: DEFAULT_SHELL.to_string(),
            interpreter: DEFAULT_INTERPRETER.to_string(),
        }
    }
}

impl CompileOptions {
    #[must_use]
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Options using `$SHELL`, falling back to `/bin/bash`.
    pub fn from_env() -> Self {
        std::env::var("SHELL")
            .ok()
            .filter(|shell| !shell.trim().is_empty())
            .map_or_else(Self::default, Self::new)
    }
}

/// Named pane arrangements a tab can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum LayoutPattern {
    /// Anchor pane plus horizontal splits of equal size
    EvenHorizontal,
    /// Anchor pane plus vertical splits of equal size
    EvenVertical,
    /// Anchor pane with a 30% vertical stack beside it
    MainVertical,
    /// Anchor pane with a 30% horizontal stack below it
    MainHorizontal,
    /// Grid for up to four panes
    Tiled,
}

/// How a tab's pane list is turned into a split tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneMode {
    /// Each pane carries its own `split` / `size`
    Manual,
    /// A named pattern decides the geometry
    Pattern(LayoutPattern),
}

impl PaneMode {
    /// Mode for a tab's optional pattern name.
    ///
    /// Unrecognized names fall back to manual mode.
    pub fn for_tab(pattern: Option<&str>) -> Self {
        pattern
            .and_then(|name| name.parse().ok())
            .map_or(Self::Manual, Self::Pattern)
    }
}

/// Chrome around every tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BaseTemplate {
    /// Tab bar above, status bar below
    #[default]
    Standard,
    /// Zellij's single compact bar
    Compact,
    /// Any other template name, passed through without chrome
    Named(String),
}

impl BaseTemplate {
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            None | Some("") => Self::Standard,
            Some("compact") => Self::Compact,
            Some(other) => Self::Named(other.to_string()),
        }
    }
}
