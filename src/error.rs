//! Error type for resource resolution attempts.
//!
//! A `ResolveError` is an expected miss, not a fault: the URL strategy is
//! meant to be one of several tried in sequence, so callers usually only see
//! it through `try_resolve`. The trait-level `resolve` collapses every
//! variant to `None`.

use thiserror::Error;

/// Why a resource identifier could not be resolved by the URL strategy.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The identifier is not an absolute URL.
    #[error("not a valid URL: {0}")]
    Url(#[from] url::ParseError),
    /// libcurl failed to open the resource (unreachable host, unsupported
    /// scheme, DNS failure, connection reset, ...).
    #[error("transfer failed: {0}")]
    Transfer(#[from] curl::Error),
    /// The server answered with a non-2xx status.
    #[error("HTTP {code}")]
    Http { code: u32 },
}
