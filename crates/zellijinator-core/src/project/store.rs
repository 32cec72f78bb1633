//! Reading and writing project files on disk

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::sample::sample_project;
use crate::{config::Settings, model::ProjectSpec, Error, Result, ResultExt};

/// File extension of project files.
pub const PROJECT_EXTENSION: &str = "yaml";

/// Directory of `<name>.yaml` project files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStore {
    dir: PathBuf,
}

impl ProjectStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.projects_dir.clone())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the projects directory if it is missing.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).context(format!(
            "Failed to create projects directory {}",
            self.dir.display()
        ))
    }

    /// Location of a project file, whether or not it exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{PROJECT_EXTENSION}"))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    /// Read and parse a project file without expanding its paths.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The name is invalid
    /// - The project file does not exist (`not_found`)
    /// - The file is not a valid project document
    pub fn load_raw(&self, name: &str) -> Result<ProjectSpec> {
        validate_project_name(name)?;
        let path = self.path(name);

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::not_found(format!(
                "Project '{name}' not found. Create it with: zellijinator new {name}"
            )),
            _ => Error::io_error(format!(
                "Failed to read project file {}: {e}",
                path.display()
            )),
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            Error::parse_error(format!(
                "Failed to parse project file {}: {e}",
                path.display()
            ))
        })
    }

    /// Read a project file and expand `~` / `$VAR` in its paths.
    pub fn load(&self, name: &str) -> Result<ProjectSpec> {
        self.load_raw(name).map(ProjectSpec::expand_paths)
    }

    /// Names of all stored projects, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        self.ensure_dir()?;

        let names = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == PROJECT_EXTENSION)
            })
            .filter_map(|entry| {
                entry
                    .path()
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(String::from)
            })
            .collect();

        Ok(names)
    }

    /// Write the starter file for a new project.
    ///
    /// # Errors
    ///
    /// Returns `already_exists` if a project with this name is present.
    pub fn create(&self, name: &str) -> Result<PathBuf> {
        validate_project_name(name)?;
        self.ensure_dir()?;
        let path = self.path(name);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => Error::already_exists(format!(
                    "Project '{name}' already exists ({})",
                    path.display()
                )),
                _ => Error::io_error(format!(
                    "Failed to create project file {}: {e}",
                    path.display()
                )),
            })?;

        file.write_all(sample_project(name).as_bytes())
            .context(format!("Failed to write project file {}", path.display()))?;

        debug!(project = name, path = %path.display(), "created project file");
        Ok(path)
    }

    /// Remove a project file, returning the path that was removed.
    pub fn delete(&self, name: &str) -> Result<PathBuf> {
        validate_project_name(name)?;
        let path = self.path(name);

        fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::not_found(format!("Project '{name}' not found")),
            _ => Error::io_error(format!(
                "Failed to delete project file {}: {e}",
                path.display()
            )),
        })?;

        debug!(project = name, path = %path.display(), "deleted project file");
        Ok(path)
    }
}

/// Validate a project name before it is turned into a file path.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::validation_error("project name cannot be empty"));
    }

    if name.len() > 255 {
        return Err(Error::validation_error(
            "project name cannot exceed 255 characters",
        ));
    }

    if name.starts_with('.') {
        return Err(Error::validation_error(format!(
            "project name '{name}' cannot start with '.'"
        )));
    }

    if name.contains(['/', '\\']) {
        return Err(Error::validation_error(format!(
            "project name '{name}' cannot contain path separators"
        )));
    }

    Ok(())
}
