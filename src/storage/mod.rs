//! Storage helpers
//!
//! JSON files written atomically, shared by settings and the client stores.

pub mod file_io;

pub use file_io::JsonFile;
