//! Bookmark manager library
//!
//! This library saves links with their metadata as JSON records in an object
//! store, one object per url named by the url's SHA-256, and lists them back.

mod bookmark;
mod cli;
mod config;
mod container;
mod errors;
mod helper;
mod storage;
mod types;

// Re-export key components
pub use bookmark::*;
pub use cli::*;
pub use config::*;
pub use container::*;
pub use errors::*;
pub use helper::*;
pub use storage::*;
pub use types::*;
