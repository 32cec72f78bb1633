//! Project data model
//!
//! The typed form of a project file. A `ProjectSpec` is built once per
//! invocation, handed to the layout compiler by shared reference, and dropped
//! after the layout text has been produced.

use std::collections::BTreeMap;
use std::fmt;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use strum::{AsRefStr, Display, EnumString};

use crate::{project::expand_path, Error, Result};

/// Root of a project file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub name: String,
    /// Working directory for every tab and pane.
    #[serde(default)]
    pub root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_name: Option<String>,
    /// Hand-written layout file; when set the compiler is bypassed.
    #[serde(default, rename = "layout", skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<String>,
    /// Named base template (`compact`, ...) the generated layout extends.
    #[serde(
        default,
        rename = "default_layout",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_template: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tabs: Vec<TabSpec>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub env: BTreeMap<String, String>,
}

/// One tab of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub focus: bool,
    /// Named pane pattern (`tiled`, `main-vertical`, ...).
    #[serde(default, rename = "layout", skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub panes: Vec<PaneSpec>,
}

/// One pane declaration. Order inside a tab defines split nesting.
///
/// `size` and `split` are lenient: a value that is not a percentage in
/// `1..=100` or not `horizontal`/`vertical` is treated as absent, so the pane
/// falls back to the defaults instead of failing the whole project file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneSpec {
    #[serde(default, skip_serializing_if = "is_false")]
    pub focus: bool,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub commands: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Percent>,
    #[serde(
        default,
        deserialize_with = "lenient_split",
        skip_serializing_if = "Option::is_none"
    )]
    pub split: Option<SplitDirection>,
}

/// Orientation of a split container.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SplitDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl SplitDirection {
    /// The other orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A size percentage in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    pub const HALF: Self = Self(50);
    pub const THIRTY: Self = Self(30);

    /// Build a percentage, rejecting 0 and anything above 100.
    pub fn new(value: u8) -> Result<Self> {
        if (1..=100).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::validation_error(format!(
                "size must be a percentage between 1 and 100, got {value}"
            )))
        }
    }

    /// Integer share of 100 split `count` ways.
    ///
    /// `None` when there is nothing to share or the share truncates to zero;
    /// the container is then emitted without a size.
    pub fn share(count: usize) -> Option<Self> {
        100_usize
            .checked_div(count)
            .and_then(|share| u8::try_from(share).ok())
            .and_then(|share| Self::new(share).ok())
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u64> for Percent {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| {
                Error::validation_error(format!(
                    "size must be a percentage between 1 and 100, got {value}"
                ))
            })
            .and_then(Self::new)
    }
}

impl std::str::FromStr for Percent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_end_matches('%').trim_end();
        digits
            .parse::<u64>()
            .map_err(|_| {
                Error::validation_error(format!("invalid size '{s}': expected a percentage"))
            })
            .and_then(Self::try_from)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// A size as written in YAML, before range checking.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSize {
    Number(u64),
    Text(String),
}

impl RawSize {
    fn into_percent(self) -> Result<Percent> {
        match self {
            Self::Number(n) => Percent::try_from(n),
            Self::Text(s) => s.parse(),
        }
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        RawSize::deserialize(deserializer)?
            .into_percent()
            .map_err(D::Error::custom)
    }
}

impl ProjectSpec {
    /// Session name, falling back to the project name.
    pub fn effective_session_name(&self) -> &str {
        self.session_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }

    /// Expand `~` and `$VAR` in `root` and `layout`.
    #[must_use]
    pub fn expand_paths(mut self) -> Self {
        self.root = expand_path(&self.root);
        self.layout_file = self.layout_file.map(|path| expand_path(&path));
        self
    }

    /// Names of all tabs in declaration order.
    pub fn tab_names(&self) -> Vec<&str> {
        self.tabs.iter().map(|tab| tab.name.as_str()).collect()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn lenient_size<'de, D>(deserializer: D) -> std::result::Result<Option<Percent>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawSize>::deserialize(deserializer)
        .map(|raw| raw.and_then(|size| size.into_percent().ok()))
}

fn lenient_split<'de, D>(deserializer: D) -> std::result::Result<Option<SplitDirection>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .map(|raw| raw.and_then(|split| split.parse().ok()))
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}
