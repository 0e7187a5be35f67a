use std::collections::BTreeMap;
use std::sync::RwLock;

use log::trace;

use crate::{Container, MarkError, ObjectNames, Result};

/// In-memory container keyed by object name.
///
/// Intended for tests and embedding. Listing order is lexicographic by name.
pub struct MemoryContainer {
    label: String,
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryContainer {
    /// Create a new empty in-memory container.
    pub fn new() -> Self {
        Self {
            label: "memory".to_string(),
            objects: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the container is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Sorted names of every stored object.
    pub fn object_list(&self) -> Vec<String> {
        self.objects
            .read()
            .expect("lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    /// Raw body of an object, if present.
    pub fn raw(&self, object: &str) -> Option<Vec<u8>> {
        self.objects
            .read()
            .expect("lock poisoned")
            .get(object)
            .cloned()
    }
}

impl Default for MemoryContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Container for MemoryContainer {
    fn name(&self) -> &str {
        &self.label
    }

    fn put(&self, object: &str, body: Vec<u8>) -> Result<()> {
        trace!("memory put {} ({} bytes)", object, body.len());
        self.objects
            .write()
            .expect("lock poisoned")
            .insert(object.to_string(), body);
        Ok(())
    }

    fn get(&self, object: &str) -> Result<Vec<u8>> {
        self.raw(object).ok_or_else(|| MarkError::ObjectNotFound {
            name: object.to_string(),
        })
    }

    fn object_names(&self) -> ObjectNames<'_> {
        // Snapshot so the lock is not held while the caller reads objects
        Box::new(self.object_list().into_iter().map(Ok))
    }
}
