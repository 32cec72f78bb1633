//! Settings validation

use super::types::Settings;
use crate::{Error, Result};

const MAX_RETENTION_HOURS: u64 = 24 * 365;

impl Settings {
    /// Validate settings values
    ///
    /// # Errors
    ///
    /// Returns error if any values are out of range or empty
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_RETENTION_HOURS).contains(&self.layout_retention_hours) {
            return Err(Error::validation_error(format!(
                "layout_retention_hours must be 1-{MAX_RETENTION_HOURS}, got {}",
                self.layout_retention_hours
            )));
        }

        if self.projects_dir.as_os_str().is_empty() {
            return Err(Error::validation_error("projects_dir cannot be empty"));
        }

        if self.layout_dir.as_os_str().is_empty() {
            return Err(Error::validation_error("layout_dir cannot be empty"));
        }

        Ok(())
    }
}
