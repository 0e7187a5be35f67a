//! CLI module for the cloudmarks application
//!
//! This module turns a parsed request into store calls and writes the
//! user-facing output.
use std::{io::Write, process::ExitCode};

use log::{info, warn};

use crate::{Bookmark, BookmarkStore, Request, Result};

/// How a save request ended, as far as the exit status is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Bookmark saved or bookmarks listed
    Done,
    /// The link could not be turned into a bookmark
    InvalidLink,
    /// The store rejected the write
    SaveFailed,
}

impl Status {
    /// Only an unusable link fails the process. A failed save has already been
    /// reported on stdout and still exits 0.
    pub fn code(self) -> u8 {
        match self {
            Status::InvalidLink => 1,
            Status::Done | Status::SaveFailed => 0,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// CLI Application handler - processes requests against a bookmark store
pub struct App<S> {
    store: S,
}

impl<S: BookmarkStore> App<S> {
    /// Create a new CLI application with the given storage backend
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one request, writing user output to `out`.
    ///
    /// A listing failure is returned as an error; save failures are printed
    /// and reported through the returned [`Status`].
    pub fn run(&self, request: Request, out: &mut impl Write) -> Result<Status> {
        match request {
            Request::List => {
                self.list_bookmarks(out)?;
                Ok(Status::Done)
            }
            Request::Save {
                link,
                name,
                description,
                tags,
            } => self.save_link(&link, name, description, tags, out),
        }
    }

    fn list_bookmarks(&self, out: &mut impl Write) -> Result<()> {
        let bookmarks = self.store.list()?;
        for bookmark in &bookmarks {
            writeln!(out, "{}", bookmark.url)?;
        }
        Ok(())
    }

    fn save_link(
        &self,
        link: &str,
        name: Option<String>,
        description: Option<String>,
        tags: Vec<String>,
        out: &mut impl Write,
    ) -> Result<Status> {
        let outcome = Bookmark::from_link(link).and_then(|bookmark| {
            let bookmark = bookmark
                .with_name(name.unwrap_or_default())
                .with_description(description.unwrap_or_default())
                .with_tags(tags);
            self.store.save(&bookmark)?;
            Ok(bookmark)
        });

        match outcome {
            Ok(bookmark) => {
                info!("Saved {}", bookmark.url);
                writeln!(out, "OK")?;
                Ok(Status::Done)
            }
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                if e.is_construction_error() {
                    warn!("Rejected link {:?}: {}", link, e);
                    Ok(Status::InvalidLink)
                } else {
                    Ok(Status::SaveFailed)
                }
            }
        }
    }
}
