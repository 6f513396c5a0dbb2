//! Where Cashly keeps its files
//!
//! ```text
//! <base>/config.json          settings
//! <base>/state/<store>.json   one file per client store
//! ```
//!
//! `<base>` is `$CASHLY_DATA_DIR` when set and non-empty, otherwise `cashly`
//! under the platform config directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{CashlyError, CashlyResult};

/// Environment variable that relocates all Cashly data
pub const DATA_DIR_ENV: &str = "CASHLY_DATA_DIR";

const SETTINGS_FILE: &str = "config.json";
const STATE_DIR: &str = "state";

#[derive(Debug, Clone)]
pub struct CashlyPaths {
    base_dir: PathBuf,
}

impl CashlyPaths {
    /// Resolve the base directory from the environment
    pub fn new() -> CashlyResult<Self> {
        Self::resolve(std::env::var_os(DATA_DIR_ENV))
    }

    /// Use an explicit base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn resolve(override_dir: Option<OsString>) -> CashlyResult<Self> {
        match override_dir.filter(|dir| !dir.is_empty()) {
            Some(dir) => Ok(Self::with_base_dir(PathBuf::from(dir))),
            None => {
                let dirs = BaseDirs::new().ok_or_else(|| {
                    CashlyError::Config(format!(
                        "no home directory found; set {} to choose where Cashly keeps its data",
                        DATA_DIR_ENV
                    ))
                })?;
                Ok(Self::with_base_dir(dirs.config_dir().join("cashly")))
            }
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    pub fn state_dir(&self) -> PathBuf {
        self.base_dir.join(STATE_DIR)
    }

    /// Backing file for the store called `name`
    pub fn store_file(&self, name: &str) -> PathBuf {
        self.state_dir().join(format!("{}.json", name))
    }

    /// Create the base and state directories
    pub fn ensure_directories(&self) -> CashlyResult<()> {
        let state_dir = self.state_dir();
        std::fs::create_dir_all(&state_dir).map_err(|e| {
            CashlyError::Io(format!("Failed to create {}: {}", state_dir.display(), e))
        })
    }

    /// Whether settings have ever been saved here
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_dir_wins() {
        let paths = CashlyPaths::resolve(Some(OsString::from("/tmp/cashly-data"))).unwrap();
        assert_eq!(paths.base_dir(), Path::new("/tmp/cashly-data"));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        // Falls through to the platform directory, which always ends in "cashly".
        if let Ok(paths) = CashlyPaths::resolve(Some(OsString::new())) {
            assert!(paths.base_dir().ends_with("cashly"));
        }
    }

    #[test]
    fn test_layout() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        let paths = CashlyPaths::with_base_dir(base.to_path_buf());

        assert_eq!(paths.settings_file(), base.join("config.json"));
        assert_eq!(paths.store_file("session"), base.join("state").join("session.json"));
        assert_eq!(paths.store_file("layout"), base.join("state").join("layout.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashlyPaths::with_base_dir(temp_dir.path().join("cashly"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.state_dir().is_dir());
    }
}
