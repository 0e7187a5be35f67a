//! Shared types for the cloudmarks application.
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::MarkError;

/// A specialized Result type for cloudmarks operations.
pub type Result<T> = std::result::Result<T, MarkError>;

/// Which container implementation bookmarks are written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// An S3-compatible bucket
    #[default]
    S3,
    /// A directory on the local filesystem
    Local,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::S3 => f.write_str("s3"),
            Backend::Local => f.write_str("local"),
        }
    }
}

/// What a single invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Print every stored bookmark's url
    List,
    /// Build a bookmark from `link` and save it
    Save {
        link: String,
        name: Option<String>,
        description: Option<String>,
        tags: Vec<String>,
    },
}
