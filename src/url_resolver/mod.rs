//! URL-backed resolution strategy.
//!
//! Interprets the identifier as an absolute URL and opens it with libcurl.
//! Any failure along the way (parse, connect, transfer, HTTP status) is an
//! expected miss reported as `None`; the cause is only visible through
//! `try_resolve` or the debug/trace logs.

mod fetch;

use tracing::{debug, enabled, trace, Level};
use url::Url;

use crate::error::ResolveError;
use crate::resolver::{ResolutionContext, ResourceResolver};
use crate::stream::ResourceStream;

/// Strategy name reported by [`ResourceResolver::name`].
pub const NAME: &str = "URL";

/// Resolves resource identifiers as URLs.
///
/// Stateless: no caching, no pooling, no retries. Each call opens a fresh
/// transfer and blocks the calling thread until it completes or fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlResourceResolver;

impl UrlResourceResolver {
    pub fn new() -> Self {
        Self
    }

    /// Typed resolution path: same behavior as [`ResourceResolver::resolve`]
    /// but the failure cause is surfaced instead of swallowed.
    pub fn try_resolve(&self, identifier: &str) -> Result<ResourceStream, ResolveError> {
        assert!(!identifier.is_empty(), "resource identifier must not be empty");

        let url = Url::parse(identifier)?;
        let body = fetch::fetch(&url)?;
        Ok(ResourceStream::from_bytes(body))
    }
}

impl ResourceResolver for UrlResourceResolver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn resolve(&self, ctx: &ResolutionContext, identifier: &str) -> Option<ResourceStream> {
        match self.try_resolve(identifier) {
            Ok(stream) => Some(stream),
            Err(err) => {
                // A miss here is often normal: the identifier may be meant
                // for another strategy. Trace carries the full error chain,
                // debug a condensed message.
                if enabled!(Level::TRACE) {
                    trace!(
                        resolver = NAME,
                        context = ctx.label(),
                        identifier,
                        error = ?err,
                        "resource could not be resolved"
                    );
                } else {
                    debug!(
                        resolver = NAME,
                        context = ctx.label(),
                        identifier,
                        error = %err,
                        "resource could not be resolved"
                    );
                }
                None
            }
        }
    }
}
