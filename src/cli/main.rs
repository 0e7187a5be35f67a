use std::path::PathBuf;

use clap::Parser;

use crate::{parse_tags, Backend, Config, Request, Result};

/// Main CLI application arguments
#[derive(Parser, Debug)]
#[clap(
    name = "mark",
    version,
    about = "Save a link as a bookmark, or list saved bookmarks when no link is given"
)]
pub struct Cli {
    /// Link to save
    pub url: Option<String>,

    /// Anything after the link is ignored
    #[clap(hide = true)]
    pub extra: Vec<String>,

    /// Label stored with the bookmark
    #[clap(short, long)]
    pub name: Option<String>,

    /// Free-text description stored with the bookmark
    #[clap(short, long)]
    pub description: Option<String>,

    /// Tags to attach (comma-separated)
    #[clap(short, long)]
    pub tags: Option<String>,

    /// Path to a JSON configuration file
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,

    /// Storage backend
    #[clap(long, value_enum, env = "MARK_BACKEND")]
    pub backend: Option<Backend>,

    /// Bucket holding the bookmarks
    #[clap(long, env = "MARK_BUCKET")]
    pub bucket: Option<String>,

    /// Region override for the s3 backend
    #[clap(long, env = "MARK_REGION")]
    pub region: Option<String>,

    /// Endpoint URL for S3-compatible services
    #[clap(long, env = "MARK_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Use path-style bucket addressing
    #[clap(long)]
    pub force_path_style: bool,

    /// Directory for the local backend
    #[clap(long, env = "MARK_LOCAL_DIR", value_parser)]
    pub local_dir: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolves the effective configuration: file (or defaults), then flags
    /// and environment on top.
    pub fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(bucket) = &self.bucket {
            config.bucket = bucket.clone();
        }
        if self.region.is_some() {
            config.region = self.region.clone();
        }
        if self.endpoint.is_some() {
            config.endpoint = self.endpoint.clone();
        }
        if self.force_path_style {
            config.force_path_style = true;
        }
        if let Some(dir) = &self.local_dir {
            config.local_dir = dir.clone();
        }

        Ok(config)
    }

    pub fn request(&self) -> Request {
        match &self.url {
            None => Request::List,
            Some(link) => Request::Save {
                link: link.clone(),
                name: self.name.clone(),
                description: self.description.clone(),
                tags: parse_tags(self.tags.clone()),
            },
        }
    }
}
