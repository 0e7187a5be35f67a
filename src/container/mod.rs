//! Blob containers the bookmark store writes through.
//!
//! A container is a flat namespace of named objects. Names are opaque to the
//! container; bodies are bytes. Every implementation overwrites on `put`.

mod local;
mod memory;
mod s3;

pub use local::*;
pub use memory::*;
pub use s3::*;

use crate::Result;

/// Lazily produced object names. A failure part way through a listing is
/// yielded in place, after the names already produced.
pub type ObjectNames<'a> = Box<dyn Iterator<Item = Result<String>> + 'a>;

/// A flat, named-blob namespace.
pub trait Container {
    /// Identifier shown in logs (bucket name, directory, ...).
    fn name(&self) -> &str;

    /// Writes `body` under `object`, replacing any existing object.
    fn put(&self, object: &str, body: Vec<u8>) -> Result<()>;

    /// Reads the full body of `object`.
    fn get(&self, object: &str) -> Result<Vec<u8>>;

    /// Enumerates object names in whatever order the backend yields them.
    fn object_names(&self) -> ObjectNames<'_>;
}

impl<C: Container + ?Sized> Container for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn put(&self, object: &str, body: Vec<u8>) -> Result<()> {
        (**self).put(object, body)
    }

    fn get(&self, object: &str) -> Result<Vec<u8>> {
        (**self).get(object)
    }

    fn object_names(&self) -> ObjectNames<'_> {
        (**self).object_names()
    }
}
