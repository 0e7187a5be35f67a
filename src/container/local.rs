use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, error, info, trace, warn};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::{Container, MarkError, ObjectNames, Result};

/// A container backed by a local directory, one file per object.
pub struct LocalContainer {
    root: PathBuf,
    label: String,
}

impl LocalContainer {
    /// Opens the directory at `root`, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            fs::create_dir_all(&root).map_err(|e| {
                error!("Failed to create directory {}: {}", root.display(), e);
                MarkError::Io(e)
            })?;
            info!("Created bookmark directory: {}", root.display());
        }

        let label = root.display().to_string();
        Ok(Self { root, label })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn object_path(&self, object: &str) -> Result<PathBuf> {
        if object.is_empty()
            || object.starts_with('.')
            || object.contains(['/', '\\'])
        {
            return Err(MarkError::InvalidObjectName {
                name: object.to_string(),
            });
        }
        Ok(self.root.join(object))
    }
}

impl Container for LocalContainer {
    fn name(&self) -> &str {
        &self.label
    }

    /// Writes through a temporary file in the same directory, then renames it
    /// over the target so readers never see a partial object.
    fn put(&self, object: &str, body: Vec<u8>) -> Result<()> {
        let path = self.object_path(object)?;
        debug!("Writing object to {}", path.display());

        let mut temp_file = NamedTempFile::new_in(&self.root).map_err(|e| {
            error!("Failed to create temporary file: {}", e);
            MarkError::Io(e)
        })?;

        temp_file.write_all(&body)?;
        temp_file.flush()?;

        temp_file.persist(&path).map_err(|e| {
            error!("Failed to persist file {}: {}", path.display(), e.error);
            MarkError::Io(e.error)
        })?;

        trace!("Object {} written ({} bytes)", object, body.len());
        Ok(())
    }

    fn get(&self, object: &str) -> Result<Vec<u8>> {
        let path = self.object_path(object)?;
        fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => MarkError::ObjectNotFound {
                name: object.to_string(),
            },
            _ => {
                error!("Failed to read object file {}: {}", path.display(), e);
                MarkError::Io(e)
            }
        })
    }

    fn object_names(&self) -> ObjectNames<'_> {
        let names = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => return Some(Err(MarkError::Io(e.into()))),
                };
                if !entry.file_type().is_file() {
                    return None;
                }
                match entry.file_name().to_str() {
                    // Hidden files are in-flight temporaries
                    Some(name) if name.starts_with('.') => None,
                    Some(name) => Some(Ok(name.to_string())),
                    None => {
                        warn!("Skipping non UTF-8 file name: {}", entry.path().display());
                        None
                    }
                }
            });
        Box::new(names)
    }
}
