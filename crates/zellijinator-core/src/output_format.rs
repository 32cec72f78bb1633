use serde::{Deserialize, Serialize};

/// How commands print their results.
///
/// # Examples
///
/// ```
/// use zellijinator_core::OutputFormat;
///
/// assert!(OutputFormat::from_json_flag(true).is_json());
/// assert!(OutputFormat::default().is_human());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Structured, machine-readable
    Json,
    /// Terminal-friendly
    #[default]
    Human,
}

impl OutputFormat {
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    #[must_use]
    pub const fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Map a `--json` flag to a format.
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Human
        }
    }
}
