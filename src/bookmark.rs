//! Core data structure for the cloudmarks application.
//!
//! A `Bookmark` is the only entity: a link plus the metadata saved with it.
//! Its storage key is derived from the link alone, so saving the same link
//! twice overwrites the earlier record.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest, Sha256};
use url::Url;

use crate::{MarkError, Result};

/// Represents a single saved link
///
/// Records from older writers may omit the metadata fields or store `tags`
/// as `null`; both decode as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// User-supplied label, may be empty
    #[serde(default)]
    pub name: String,
    /// The bookmarked resource locator, input to the storage key
    pub url: String,
    /// Free text, may be empty
    #[serde(default)]
    pub description: String,
    /// Tags for organization
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// When the bookmark was created
    pub created_on: DateTime<Utc>,
}

impl Bookmark {
    /// Builds a bookmark from a raw link typed by the user.
    ///
    /// The link must parse as an absolute `http` or `https` URL with a host.
    /// It is stored as given (minus surrounding whitespace), not in the
    /// parser's normalized form, so the key is the hash of what was typed.
    pub fn from_link(link: &str) -> Result<Self> {
        let trimmed = link.trim();
        if trimmed.is_empty() {
            return Err(invalid_link(link, "link is empty"));
        }

        let parsed = Url::parse(trimmed).map_err(|e| invalid_link(link, e))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(invalid_link(
                    link,
                    format!("unsupported scheme '{}'", other),
                ))
            }
        }

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(invalid_link(link, "link has no host"));
        }

        Ok(Bookmark {
            name: String::new(),
            url: trimmed.to_string(),
            description: String::new(),
            tags: Vec::new(),
            created_on: Utc::now(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// The object name this bookmark is stored under.
    pub fn storage_key(&self) -> String {
        storage_key(&self.url)
    }
}

/// Lowercase hex SHA-256 of the url: always 64 characters.
pub fn storage_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn invalid_link(link: &str, message: impl ToString) -> MarkError {
    MarkError::InvalidLink {
        link: link.to_string(),
        message: message.to_string(),
    }
}
