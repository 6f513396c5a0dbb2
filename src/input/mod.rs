//! Form input primitives
//!
//! Toolkit-independent state behind the client's input fields.

pub mod currency;

pub use currency::{CurrencyField, DigitBuffer, Snapshot};
