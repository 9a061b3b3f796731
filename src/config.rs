use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const LOG_FILE_NAME: &str = "stagebook.log";

/// Runtime configuration and filesystem paths used throughout the application.
#[derive(Clone, Debug)]
pub struct AppConfig {
    data_dir: PathBuf,
    log_path: PathBuf,
    roster_path: Option<PathBuf>,
    initial_budget: Option<u32>,
    currency: String,
}

impl AppConfig {
    pub fn new(
        data_dir: PathBuf,
        roster_path: Option<PathBuf>,
        initial_budget: Option<u32>,
        currency: String,
    ) -> Self {
        let log_path = data_dir.join(LOG_FILE_NAME);
        Self {
            data_dir,
            log_path,
            roster_path,
            initial_budget,
            currency,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// External roster file; `None` means the bundled roster.
    pub fn roster_path(&self) -> Option<&Path> {
        self.roster_path.as_deref()
    }

    pub fn initial_budget(&self) -> Option<u32> {
        self.initial_budget
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Ensures the data directory exists so the log file can be opened.
    pub fn ensure_filesystem(&self) -> Result<()> {
        fs::create_dir_all(self.data_dir()).with_context(|| {
            format!("Failed to create directory: {}", self.data_dir().display())
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_in_data_dir() {
        let config = AppConfig::new(PathBuf::from("/tmp/sb"), None, Some(5000), "€".into());
        assert_eq!(config.log_path(), Path::new("/tmp/sb/stagebook.log"));
        assert_eq!(config.initial_budget(), Some(5000));
        assert_eq!(config.currency(), "€");
        assert!(config.roster_path().is_none());
    }

    #[test]
    fn ensure_filesystem_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let config = AppConfig::new(nested.clone(), None, None, "$".into());
        config.ensure_filesystem().unwrap();
        assert!(nested.is_dir());
    }
}
