//! Configuration module for Cashly
//!
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CashlyPaths;
pub use settings::Settings;
