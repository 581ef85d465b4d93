//! Resolver interface for turning resource identifiers into byte streams.
//!
//! The template engine only depends on this trait and does not know which
//! strategy (URL or any other) ends up serving a given identifier.

use crate::stream::ResourceStream;

/// Opaque processing context passed along with every resolution call.
///
/// Carries only an optional diagnostic label (typically the name of the
/// template being processed). It never influences the resolution outcome;
/// it exists so log entries can say *on whose behalf* a miss happened.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    label: Option<String>,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context labeled with the processing unit it belongs to.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    /// Diagnostic label, or a placeholder when none was set.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("(unlabeled)")
    }
}

/// A named resolution strategy: given an identifier, produce a stream or
/// nothing. Implementations are stateless and reentrant; a single instance
/// may be shared across threads.
pub trait ResourceResolver: Send + Sync {
    /// Stable name of this strategy, used in diagnostics and configuration.
    fn name(&self) -> &'static str;

    /// Attempts to resolve `identifier` into an open byte stream.
    ///
    /// Returns `None` when this strategy cannot serve the identifier, for
    /// whatever reason. A miss is routine, not an error: callers typically
    /// fall through to another strategy.
    ///
    /// # Panics
    ///
    /// Panics if `identifier` is empty. That is a caller bug, not a miss.
    fn resolve(&self, ctx: &ResolutionContext, identifier: &str) -> Option<ResourceStream>;
}
