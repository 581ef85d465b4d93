//! Single-shot transfer: open a URL with libcurl and collect the body.
//!
//! Deliberately bare: no redirect following, no timeouts beyond libcurl
//! defaults, no custom headers. Anything fancier belongs to the caller or
//! to a different strategy.

use std::time::Instant;

use url::Url;

use crate::error::ResolveError;

/// Opens `url` and returns the full response body.
///
/// Non-2xx HTTP statuses are failures. Schemes that carry no status code
/// (`file://` and friends) report 0, which counts as success as long as the
/// transfer itself succeeded. Runs in the current thread; call from a worker
/// if the caller needs a deadline.
pub(crate) fn fetch(url: &Url) -> Result<Vec<u8>, ResolveError> {
    let started = Instant::now();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code != 0 && !(200..300).contains(&code) {
        return Err(ResolveError::Http { code });
    }

    tracing::trace!(
        url = %url,
        bytes = body.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "transfer complete"
    );
    Ok(body)
}
