//! Theme preference

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::store::StoreState;

/// Color scheme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system
    #[default]
    System,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        };
        f.write_str(name)
    }
}

/// The persisted theme preference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    #[serde(default)]
    pub mode: ThemeMode,
}

impl ThemePreference {
    /// Switch between light and dark; from system, go dark
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = match self.mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light | ThemeMode::System => ThemeMode::Dark,
        };
        self.mode
    }

    /// Choose a mode explicitly
    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }
}

impl StoreState for ThemePreference {
    const NAME: &'static str = "theme";
}
