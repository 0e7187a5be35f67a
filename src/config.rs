use std::{fs, path::Path, path::PathBuf};

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{Backend, Container, LocalContainer, MarkError, Result, S3Container, S3Options};

/// Bucket used when nothing else is configured.
pub const DEFAULT_BUCKET: &str = "bookmark";

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where bookmarks are stored
    pub backend: Backend,

    /// Bucket name for the s3 backend
    pub bucket: String,

    /// Region override for the s3 backend
    pub region: Option<String>,

    /// Endpoint override for S3-compatible services
    pub endpoint: Option<String>,

    /// Use path-style bucket addressing
    pub force_path_style: bool,

    /// Directory for the local backend
    pub local_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            bucket: DEFAULT_BUCKET.to_string(),
            region: None,
            endpoint: None,
            force_path_style: false,
            local_dir: default_local_dir(),
        }
    }
}

impl Config {
    /// Reads a JSON config file. Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| MarkError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        serde_json::from_str(&content).map_err(|e| MarkError::ConfigError {
            message: format!("cannot parse {}: {}", path.display(), e),
        })
    }

    /// Opens the container this configuration points at.
    pub fn open_container(&self) -> Result<Box<dyn Container>> {
        info!("Opening {} backend", self.backend);
        match self.backend {
            Backend::S3 => {
                if self.bucket.is_empty() {
                    return Err(MarkError::ConfigError {
                        message: "bucket name is empty".to_string(),
                    });
                }
                let options = S3Options {
                    region: self.region.clone(),
                    endpoint: self.endpoint.clone(),
                    force_path_style: self.force_path_style,
                };
                Ok(Box::new(S3Container::connect(&self.bucket, &options)?))
            }
            Backend::Local => Ok(Box::new(LocalContainer::open(&self.local_dir)?)),
        }
    }
}

// Falls back to a relative directory when no home directory can be found
fn default_local_dir() -> PathBuf {
    ProjectDirs::from("", "", "cloudmarks")
        .map(|dirs| dirs.data_dir().join("bookmarks"))
        .unwrap_or_else(|| PathBuf::from(".cloudmarks"))
}
