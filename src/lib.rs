//! Cashly - client core for the Cashly personal-finance app
//!
//! This library holds the parts of the Cashly client that do not depend on a
//! UI toolkit: calculator-style currency entry, normalization of the backend's
//! JSON responses, persisted client state, and the reconnecting notification
//! socket.
//!
//! # Architecture
//!
//! - `input`: currency digit buffer and field session
//! - `models`: the cents-based `Money` type
//! - `api`: envelope unwrapping and snake_case to camelCase conversion
//! - `stores`: session, theme and dashboard layout stores
//! - `notifications`: notification socket client
//! - `config`: paths and settings
//! - `storage`: atomic JSON file helpers
//! - `error`: custom error types
//! - `logging`: tracing subscriber setup
//! - `cli`, `tui`: the `cashly` binary's front end
//!
//! # Example
//!
//! ```
//! use cashly::input::DigitBuffer;
//!
//! let mut buffer = DigitBuffer::new();
//! let snapshot = buffer.append_or_replace("$1a2b3");
//! assert_eq!(snapshot.display, "$1.23");
//! assert_eq!(snapshot.value, 1.23);
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod notifications;
pub mod storage;
pub mod stores;
pub mod tui;

pub use error::{CashlyError, CashlyResult};
