//! Error types for the cloudmarks application.
//!
//! This module defines the error taxonomy shared by bookmark construction,
//! record encoding, and every container backend.

use std::io;

use thiserror::Error;

use crate::Bookmark;

/// The main error type for the cloudmarks application.
#[derive(Error, Debug)]
pub enum MarkError {
    /// The supplied argument is not a usable link.
    #[error("invalid link '{link}': {message}")]
    InvalidLink { link: String, message: String },

    /// Errors related to serialization/deserialization of bookmark records.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Errors related to local file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The object store rejected or failed a request.
    #[error("{operation} failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    /// An object named by a listing could not be found when read back.
    #[error("Object not found: {name}")]
    ObjectNotFound { name: String },

    /// Object names are flat; anything that would escape the container is refused.
    #[error("Invalid object name: '{name}'")]
    InvalidObjectName { name: String },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Listing stopped at the first failure. `loaded` holds the bookmarks
    /// decoded before it.
    #[error("listing aborted after {} bookmark(s): {source}", .loaded.len())]
    ListAborted {
        loaded: Vec<Bookmark>,
        source: Box<MarkError>,
    },
}

impl MarkError {
    /// True when the error came from turning user input into a bookmark,
    /// before anything touched the container.
    pub fn is_construction_error(&self) -> bool {
        matches!(self, MarkError::InvalidLink { .. })
    }

    pub(crate) fn transport(operation: &'static str, err: impl std::fmt::Display) -> Self {
        MarkError::Transport {
            operation,
            message: err.to_string(),
        }
    }
}
