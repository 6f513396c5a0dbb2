//! JSON-file-backed state store
//!
//! A store loads its state once when opened and writes it back after every
//! mutation. Callers own their stores and pass them where needed.

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::CashlyResult;
use crate::storage::JsonFile;

/// State that can live in a [`Store`]
pub trait StoreState: Serialize + DeserializeOwned + Default {
    /// Short name used in logs
    const NAME: &'static str;

    /// Repair state read from an older file
    fn after_load(&mut self) {}
}

/// A persisted piece of client state
#[derive(Debug)]
pub struct Store<T: StoreState> {
    file: JsonFile,
    state: T,
}

impl<T: StoreState> Store<T> {
    /// Open a store, loading its file or falling back to the default state
    pub fn open(path: impl Into<PathBuf>) -> CashlyResult<Self> {
        let file = JsonFile::new(T::NAME, path);
        let mut state: T = file.load()?.unwrap_or_default();
        state.after_load();
        debug!(store = T::NAME, path = %file.path().display(), "store loaded");
        Ok(Self { file, state })
    }

    /// Current state
    pub fn get(&self) -> &T {
        &self.state
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Mutate the state and persist it
    ///
    /// The closure's result is returned once the write has succeeded.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> CashlyResult<R> {
        let result = f(&mut self.state);
        self.save()?;
        Ok(result)
    }

    /// Mutate the state and persist it, for mutations that can fail
    ///
    /// Nothing is written when the closure returns an error, but changes it
    /// made before failing stay in memory.
    pub fn try_update<R>(&mut self, f: impl FnOnce(&mut T) -> CashlyResult<R>) -> CashlyResult<R> {
        let result = f(&mut self.state)?;
        self.save()?;
        Ok(result)
    }

    /// Drop back to the default state and delete the backing file
    pub fn reset(&mut self) -> CashlyResult<()> {
        self.state = T::default();
        self.file.remove()?;
        debug!(store = T::NAME, "store reset");
        Ok(())
    }

    fn save(&self) -> CashlyResult<()> {
        self.file.save(&self.state)?;
        debug!(store = T::NAME, path = %self.file.path().display(), "store saved");
        Ok(())
    }
}
