//! Core data models for Cashly

pub mod money;

pub use money::{group_thousands, Money};
