//! Remote description resolution.
//!
//! Each project's long-form description is its repository `README.md`,
//! fetched from a raw-content host. Repositories expose content under
//! either of two conventional default branch names, so the [`Resolver`]
//! walks a fixed, configurable branch list and falls back to the
//! project's static summary when every location fails. Failure is an
//! expected outcome here, not an error: nothing on this path propagates
//! to the caller or touches the terminal.
//!
//! The transport lives behind the [`ContentSource`] trait so resolution
//! logic can be exercised against scripted responses in tests.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{DescriptionCache, DescriptionUpdate};
use crate::config::FetchConfig;
use crate::markdown;
use crate::portfolio::Project;

/// Why a single fetch attempt did not produce a body.
///
/// Both variants are handled identically (try the next location); the
/// distinction exists for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The host answered with a non-success status.
    #[error("status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The request never completed (DNS, connect, timeout, decode).
    #[error("transport error: {0}")]
    Transport(String),
}

/// A transport capable of fetching a UTF-8 text resource.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the resource at `url`, returning its body on a success
    /// status.
    async fn fetch(&self, url: &str) -> Result<String, SourceError>;
}

/// The production [`ContentSource`] over a pooled HTTP client.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a new HTTP source with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))
    }
}

/// Outcome of one fetch attempt in the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Attempt {
    /// The location answered with a body.
    Success(String),
    /// The location failed; move on to the next one.
    TryNext,
}

/// Terminal outcome of resolving one project's description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A README was fetched from one of the candidate locations.
    Fetched {
        /// The raw markdown body.
        long_form: String,
        /// The reduced preview.
        short_form: String,
    },

    /// Every location failed; the static summary stands in.
    Fallback {
        /// The project's compiled-in summary.
        short_form: String,
    },
}

impl Resolution {
    /// Convert this outcome into the single cache update it implies.
    #[must_use]
    pub fn into_update(self) -> DescriptionUpdate {
        match self {
            Self::Fetched {
                long_form,
                short_form,
            } => DescriptionUpdate {
                long_form: Some(long_form),
                short_form: Some(short_form),
            },
            Self::Fallback { short_form } => DescriptionUpdate {
                long_form: None,
                short_form: Some(short_form),
            },
        }
    }

    /// Whether a remote README was fetched.
    #[must_use]
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched { .. })
    }
}

/// Resolves project descriptions into the shared cache.
///
/// A lightweight, cloneable handle; clones share the transport and the
/// cache.
#[derive(Clone)]
pub struct Resolver {
    source: Arc<dyn ContentSource>,
    cache: DescriptionCache,
    config: FetchConfig,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("cache", &self.cache)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Resolver {
    /// Create a resolver backed by the production HTTP source.
    #[must_use]
    pub fn new(config: &FetchConfig, cache: DescriptionCache) -> Self {
        Self::with_source(Arc::new(HttpSource::new()), config, cache)
    }

    /// Create a resolver over an arbitrary transport.
    #[must_use]
    pub fn with_source(
        source: Arc<dyn ContentSource>,
        config: &FetchConfig,
        cache: DescriptionCache,
    ) -> Self {
        Self {
            source,
            cache,
            config: config.clone(),
        }
    }

    /// The cache this resolver writes into.
    #[must_use]
    pub fn cache(&self) -> &DescriptionCache {
        &self.cache
    }

    /// The candidate README locations for `identifier`, in priority order.
    #[must_use]
    pub fn candidate_urls(&self, identifier: &str) -> Vec<String> {
        let host = self.config.content_host.trim_end_matches('/');
        self.config
            .branches
            .iter()
            .map(|branch| format!("{host}/{identifier}/{branch}/README.md"))
            .collect()
    }

    /// Resolve one project's description.
    ///
    /// Walks the candidate locations in order and stops at the first
    /// success. Never fails: when every location is exhausted the
    /// project's static summary becomes the short form and the long form
    /// stays absent.
    pub async fn resolve(&self, project: &Project) -> Resolution {
        for url in self.candidate_urls(&project.identifier) {
            match self.attempt(&url).await {
                Attempt::Success(body) => {
                    let short_form = markdown::reduce(&body, self.config.preview_limit);
                    debug!(identifier = %project.identifier, url = %url, "resolved remote description");
                    return Resolution::Fetched {
                        long_form: body,
                        short_form,
                    };
                }
                Attempt::TryNext => {}
            }
        }

        debug!(identifier = %project.identifier, "all locations failed, using static summary");
        Resolution::Fallback {
            short_form: project.summary.clone(),
        }
    }

    async fn attempt(&self, url: &str) -> Attempt {
        match self.source.fetch(url).await {
            Ok(body) => Attempt::Success(body),
            Err(err) => {
                debug!(url = %url, error = %err, "description attempt failed");
                Attempt::TryNext
            }
        }
    }

    /// Spawn one resolution task per project.
    ///
    /// Tasks run concurrently and independently; each ends with exactly
    /// one cache upsert. Callers may await the returned handles or drop
    /// them and observe completion through the cache.
    pub fn spawn_all(&self, projects: &[Project]) -> Vec<JoinHandle<()>> {
        projects
            .iter()
            .cloned()
            .map(|project| {
                let resolver = self.clone();
                tokio::spawn(async move {
                    let resolution = resolver.resolve(&project).await;
                    resolver
                        .cache
                        .upsert(&project.identifier, resolution.into_update());
                })
            })
            .collect()
    }
}
