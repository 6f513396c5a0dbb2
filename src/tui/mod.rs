//! Terminal User Interface module
//!
//! An interactive currency field built on ratatui, used by `cashly amount`.

pub mod app;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod view;
pub mod widgets;

pub use app::{App, EntryOutcome};
pub use terminal::run_amount_entry;
