//! JSON state files
//!
//! Every persisted piece of client state (settings and each store) is one
//! pretty-printed JSON file. Writes go to a sibling `.json.tmp` file that is
//! synced and renamed over the target, so a crash leaves either the old state
//! or the new one on disk.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{CashlyError, CashlyResult};

/// One JSON file holding a named piece of state
///
/// The label shows up in error messages so a broken file can be traced to
/// the store that owns it.
#[derive(Debug, Clone)]
pub struct JsonFile {
    label: &'static str,
    path: PathBuf,
}

impl JsonFile {
    pub fn new(label: &'static str, path: impl Into<PathBuf>) -> Self {
        Self {
            label,
            path: path.into(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the state, or `None` when nothing has been saved yet
    pub fn load<T: DeserializeOwned>(&self) -> CashlyResult<Option<T>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.error("read", e)),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| self.error("parse", e))
    }

    /// Replace the file's contents with `state`
    pub fn save<T: Serialize>(&self, state: &T) -> CashlyResult<()> {
        // Serialize first so a bad value never leaves a temp file behind.
        let bytes = serde_json::to_vec_pretty(state).map_err(|e| self.error("serialize", e))?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.error("create the directory for", e))?;
        }

        let temp_path = self.temp_path();
        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(self.error("write", e));
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            self.error("replace", e)
        })
    }

    /// Delete the file; a file that was never written counts as removed
    pub fn remove(&self) -> CashlyResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.error("remove", e)),
        }
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn error(&self, action: &str, err: impl std::fmt::Display) -> CashlyError {
        CashlyError::Storage(format!(
            "Failed to {} {} state at {}: {}",
            action,
            self.label,
            self.path.display(),
            err
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        mode: String,
        widgets: Vec<String>,
    }

    fn prefs() -> Prefs {
        Prefs {
            mode: "dark".into(),
            widgets: vec!["net_worth".into(), "goals".into()],
        }
    }

    #[test]
    fn test_load_unsaved_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let file = JsonFile::new("theme", temp_dir.path().join("theme.json"));

        assert_eq!(file.load::<Prefs>().unwrap(), None);
    }

    #[test]
    fn test_save_creates_state_dir_and_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state").join("theme.json");
        let file = JsonFile::new("theme", &path);

        file.save(&prefs()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("state").join("theme.json.tmp").exists());
        assert_eq!(file.load::<Prefs>().unwrap(), Some(prefs()));
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let temp_dir = TempDir::new().unwrap();
        let file = JsonFile::new("theme", temp_dir.path().join("theme.json"));

        file.save(&prefs()).unwrap();
        let light = Prefs {
            mode: "light".into(),
            widgets: vec![],
        };
        file.save(&light).unwrap();

        assert_eq!(file.load::<Prefs>().unwrap(), Some(light));
    }

    #[test]
    fn test_broken_file_error_names_the_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("layout.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFile::new("layout", &path).load::<Prefs>().unwrap_err();
        assert!(matches!(err, CashlyError::Storage(_)));
        let text = err.to_string();
        assert!(text.contains("parse layout state"), "{}", text);
        assert!(text.contains("layout.json"), "{}", text);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let file = JsonFile::new("session", temp_dir.path().join("session.json"));

        file.remove().unwrap();
        file.save(&prefs()).unwrap();
        file.remove().unwrap();
        assert!(!file.path().exists());
    }
}
