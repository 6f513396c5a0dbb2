//! CLI command handlers
//!
//! Bridges clap argument parsing with the library modules.

pub mod currency;
pub mod listen;
pub mod normalize;
pub mod state;

pub use currency::{handle_format, handle_set, handle_type};
pub use listen::handle_listen;
pub use normalize::handle_normalize;
pub use state::{
    handle_layout_command, handle_session_command, handle_theme_command, LayoutCommands,
    SessionCommands, ThemeCommands,
};
