//! Bookmark persistence.
//!
//! Each bookmark is stored as one JSON record in a [`Container`], named by the
//! hex SHA-256 of its url. Saving a url that is already stored replaces the
//! earlier record.

use log::{debug, error, info, trace};

use crate::{decode_record, encode_record, Bookmark, Container, MarkError, Result};

/// Save and list operations over a bookmark collection.
pub trait BookmarkStore {
    /// Writes `bookmark` under its storage key, overwriting any previous
    /// record for the same url.
    fn save(&self, bookmark: &Bookmark) -> Result<()>;

    /// Reads back every stored bookmark.
    ///
    /// Stops at the first object that cannot be listed, read or decoded and
    /// returns [`MarkError::ListAborted`] carrying the bookmarks loaded so far.
    fn list(&self) -> Result<Vec<Bookmark>>;

    /// Unimplemented: always returns an empty list, whatever the tag.
    fn list_by_tag(&self, tag: &str) -> Result<Vec<Bookmark>>;
}

/// Stores bookmarks as records in a blob container.
pub struct ContainerStore<C> {
    container: C,
}

impl<C: Container> ContainerStore<C> {
    pub fn new(container: C) -> Self {
        Self { container }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    fn load(&self, object: &str) -> Result<Bookmark> {
        let body = self.container.get(object)?;
        decode_record(object, &body)
    }
}

impl<C: Container> BookmarkStore for ContainerStore<C> {
    fn save(&self, bookmark: &Bookmark) -> Result<()> {
        if bookmark.url.is_empty() {
            return Err(MarkError::InvalidLink {
                link: String::new(),
                message: "bookmark has an empty url".to_string(),
            });
        }

        let key = bookmark.storage_key();
        info!("Saving {} as {}/{}", bookmark.url, self.container.name(), key);

        let body = encode_record(bookmark)?;
        self.container.put(&key, body).map_err(|e| {
            error!("Failed to save {}: {}", bookmark.url, e);
            e
        })?;

        debug!("Bookmark saved: {}", key);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Bookmark>> {
        info!("Listing bookmarks in {}", self.container.name());
        let mut loaded = Vec::new();

        for name in self.container.object_names() {
            let outcome = name.and_then(|name| {
                trace!("Loading object {}", name);
                self.load(&name)
            });

            match outcome {
                Ok(bookmark) => loaded.push(bookmark),
                Err(e) => {
                    error!("Listing aborted after {} bookmark(s): {}", loaded.len(), e);
                    return Err(MarkError::ListAborted {
                        loaded,
                        source: Box::new(e),
                    });
                }
            }
        }

        info!("Loaded {} bookmark(s)", loaded.len());
        Ok(loaded)
    }

    fn list_by_tag(&self, tag: &str) -> Result<Vec<Bookmark>> {
        debug!("Tag filtering is not implemented; ignoring tag '{}'", tag);
        Ok(Vec::new())
    }
}
