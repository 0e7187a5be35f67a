//! S3-compatible object storage backend.
//!
//! Works against AWS S3 and anything speaking the same API (MinIO, the Google
//! Cloud Storage interoperability endpoint). Credentials come from the SDK's
//! default provider chain. The SDK is async; each call here drives one request
//! to completion on a private current-thread runtime.

use std::collections::VecDeque;

use aws_config::BehaviorVersion;
use aws_sdk_s3::{
    config::Region, error::DisplayErrorContext, primitives::ByteStream, Client,
};
use log::{debug, info, trace};
use tokio::runtime::{Builder, Runtime};

use crate::{Container, MarkError, ObjectNames, Result};

/// Connection settings layered over the SDK's defaults.
#[derive(Debug, Clone, Default)]
pub struct S3Options {
    /// Overrides the region from the environment/profile chain
    pub region: Option<String>,
    /// Custom endpoint URL, for S3-compatible services
    pub endpoint: Option<String>,
    /// Address buckets as `endpoint/bucket` instead of `bucket.endpoint`
    pub force_path_style: bool,
}

pub struct S3Container {
    client: Client,
    bucket: String,
    runtime: Runtime,
}

impl S3Container {
    /// Builds a client for `bucket`. No request is made until the first
    /// operation.
    pub fn connect(bucket: impl Into<String>, options: &S3Options) -> Result<Self> {
        let bucket = bucket.into();
        let runtime = Builder::new_current_thread().enable_all().build()?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &options.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &options.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let shared = runtime.block_on(loader.load());

        let conf = aws_sdk_s3::config::Builder::from(&shared)
            .force_path_style(options.force_path_style)
            .build();

        info!(
            "Using bucket '{}' (endpoint: {})",
            bucket,
            options.endpoint.as_deref().unwrap_or("default")
        );

        Ok(Self {
            client: Client::from_conf(conf),
            bucket,
            runtime,
        })
    }

    /// Fetches one page of a `ListObjectsV2` listing.
    fn list_page(&self, token: Option<String>) -> Result<(Vec<String>, Option<String>)> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .list_objects_v2()
                    .bucket(&self.bucket)
                    .set_continuation_token(token)
                    .send(),
            )
            .map_err(|e| MarkError::transport("ListObjectsV2", DisplayErrorContext(e)))?;

        let names: Vec<String> = output
            .contents()
            .iter()
            .filter_map(|object| object.key().map(str::to_string))
            .collect();
        debug!("Listed {} object(s) from {}", names.len(), self.bucket);

        Ok((names, output.next_continuation_token().map(str::to_string)))
    }
}

impl Container for S3Container {
    fn name(&self) -> &str {
        &self.bucket
    }

    fn put(&self, object: &str, body: Vec<u8>) -> Result<()> {
        trace!("PutObject {}/{} ({} bytes)", self.bucket, object, body.len());
        self.runtime
            .block_on(
                self.client
                    .put_object()
                    .bucket(&self.bucket)
                    .key(object)
                    .content_type("application/json")
                    .body(ByteStream::from(body))
                    .send(),
            )
            .map_err(|e| MarkError::transport("PutObject", DisplayErrorContext(e)))?;
        Ok(())
    }

    fn get(&self, object: &str) -> Result<Vec<u8>> {
        trace!("GetObject {}/{}", self.bucket, object);
        self.runtime.block_on(async {
            let output = self
                .client
                .get_object()
                .bucket(&self.bucket)
                .key(object)
                .send()
                .await
                .map_err(|e| {
                    if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                        MarkError::ObjectNotFound {
                            name: object.to_string(),
                        }
                    } else {
                        MarkError::transport("GetObject", DisplayErrorContext(e))
                    }
                })?;

            let data = output
                .body
                .collect()
                .await
                .map_err(|e| MarkError::transport("GetObject", e))?;
            Ok::<_, MarkError>(data.into_bytes().to_vec())
        })
    }

    fn object_names(&self) -> ObjectNames<'_> {
        Box::new(Pages {
            container: self,
            page: VecDeque::new(),
            token: None,
            finished: false,
        })
    }
}

/// Walks a listing page by page, fetching the next page only once the
/// current one is drained.
struct Pages<'a> {
    container: &'a S3Container,
    page: VecDeque<String>,
    token: Option<String>,
    finished: bool,
}

impl Iterator for Pages<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(name) = self.page.pop_front() {
                return Some(Ok(name));
            }
            if self.finished {
                return None;
            }
            match self.container.list_page(self.token.take()) {
                Ok((names, next)) => {
                    self.page.extend(names);
                    self.finished = next.is_none();
                    self.token = next;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
