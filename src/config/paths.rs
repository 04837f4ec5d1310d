//! Path management for tally
//!
//! Resolves where the settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `TALLY_CLI_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/tally-cli` on Unix,
//!    `%APPDATA%\tally-cli` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TallyError;

/// Manages all paths used by tally
#[derive(Debug, Clone)]
pub struct TallyPaths {
    base_dir: PathBuf,
}

impl TallyPaths {
    /// Create a new TallyPaths instance.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TallyError> {
        let base_dir = if let Ok(custom) = std::env::var("TALLY_CLI_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "tally-cli").ok_or_else(|| {
                TallyError::Config("could not determine a config directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create TallyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), TallyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TallyError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let paths = TallyPaths::with_base_dir(PathBuf::from("/tmp/tally-test"));
        assert_eq!(paths.config_dir(), &PathBuf::from("/tmp/tally-test"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/tally-test/config.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp.path().join("nested").join("config"));

        paths.ensure_directories().unwrap();
        assert!(paths.config_dir().exists());
    }
}
