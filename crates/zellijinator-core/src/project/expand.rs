//! Home directory and environment variable expansion for project paths

/// Expand a leading `~` and any `$VAR` / `${VAR}` references.
///
/// Variables that are not set are left in place rather than replaced with an
/// empty string, so a typo stays visible in the resulting path.
pub fn expand_path(input: &str) -> String {
    expand_path_with(input, home_dir, |name| std::env::var(name).ok())
}

/// Expansion with explicit home directory and variable lookup.
pub fn expand_path_with<H, L>(input: &str, home: H, lookup: L) -> String
where
    H: FnOnce() -> Option<String>,
    L: FnMut(&str) -> Option<String>,
{
    shellexpand::full_with_context_no_errors(input, home, lookup).into_owned()
}

fn home_dir() -> Option<String> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_string_lossy().into_owned())
}
