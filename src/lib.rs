//! Pluggable resource resolution for template engines: turn a resource
//! identifier string into a readable byte stream, or nothing.

pub mod error;
pub mod logging;
pub mod resolver;
pub mod stream;
pub mod url_resolver;

pub use error::ResolveError;
pub use resolver::{ResolutionContext, ResourceResolver};
pub use stream::ResourceStream;
pub use url_resolver::UrlResourceResolver;
