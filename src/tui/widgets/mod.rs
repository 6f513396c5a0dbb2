//! Custom widgets for the TUI

pub mod currency_input;

pub use currency_input::CurrencyInput;
