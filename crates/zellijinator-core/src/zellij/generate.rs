//! Layout files on disk - Imperative Shell
//!
//! Generated layouts are written to a shared directory and kept after the
//! process exits, because zellij reads them after we hand over. Stale ones
//! are removed on later runs.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{Error, Result, ResultExt};

/// Generated layout information
#[derive(Debug, Clone)]
pub struct Layout {
    /// Generated KDL content
    pub kdl_content: String,
    /// Path where layout file is written
    pub file_path: PathBuf,
}

/// Write `kdl_content` to a new `<session>-<random>.kdl` file in `dir`.
///
/// # Errors
///
/// Returns error if:
/// - Unable to create the layout directory
/// - Unable to create or write the layout file
pub fn write_layout(dir: &Path, session_name: &str, kdl_content: String) -> Result<Layout> {
    fs::create_dir_all(dir).context(format!(
        "Failed to create layout directory {}",
        dir.display()
    ))?;

    let prefix = format!("{}-", session_name.replace(['/', '\\'], "_"));
    let mut file = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".kdl")
        .tempfile_in(dir)
        .context("Failed to create layout file")?;

    file.write_all(kdl_content.as_bytes())
        .context("Failed to write layout file")?;

    let (_, file_path) = file
        .keep()
        .map_err(|e| Error::io_error(format!("Failed to keep layout file: {e}")))?;

    debug!(path = %file_path.display(), "wrote layout file");
    Ok(Layout {
        kdl_content,
        file_path,
    })
}

/// Remove `*.kdl` files directly inside `dir` last modified more than
/// `max_age` ago. Failures are logged and skipped.
///
/// Returns the number of files removed.
pub fn cleanup_old_layouts(dir: &Path, max_age: Duration) -> usize {
    let Some(cutoff) = SystemTime::now().checked_sub(max_age) else {
        return 0;
    };

    let removed = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "kdl"))
        .filter(|entry| {
            entry
                .metadata()
                .ok()
                .and_then(|meta| meta.modified().ok())
                .is_some_and(|modified| modified < cutoff)
        })
        .filter(|entry| match fs::remove_file(entry.path()) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "failed to remove stale layout");
                false
            }
        })
        .count();

    debug!(dir = %dir.display(), removed, "cleaned up stale layouts");
    removed
}
