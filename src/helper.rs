use log::{debug, error, trace};

use crate::{Bookmark, MarkError, Result};

/// Decodes a stored record into a bookmark
pub fn decode_record(name: &str, body: &[u8]) -> Result<Bookmark> {
    debug!("Decoding record {} ({} bytes)", name, body.len());
    let bookmark: Bookmark = serde_json::from_slice(body).map_err(|e| {
        error!("Failed to decode record {}: {}", name, e);
        MarkError::Serialization(e)
    })?;

    trace!("Successfully decoded bookmark: {}", bookmark.url);
    Ok(bookmark)
}

/// Encodes a bookmark as the JSON record body stored in the container
pub fn encode_record(bookmark: &Bookmark) -> Result<Vec<u8>> {
    serde_json::to_vec(bookmark).map_err(|e| {
        error!("Failed to serialize bookmark {}: {}", bookmark.url, e);
        MarkError::Serialization(e)
    })
}

// Helper method for parsing tags
pub fn parse_tags(tags: Option<String>) -> Vec<String> {
    tags.map(|t| {
        t.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
    .unwrap_or_default()
}
