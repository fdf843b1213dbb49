//! Blocking HTTP GET of the listing document.

use super::FetchOptions;
use crate::error::BrowseError;

/// Performs a GET and returns the whole body.
///
/// Runs in the current thread. Non-2xx statuses are reported as
/// [`BrowseError::HttpStatus`] and the body is discarded.
pub(crate) fn get(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, BrowseError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(opts.follow_redirects)?;
    if opts.follow_redirects {
        easy.max_redirections(opts.max_redirections)?;
    }
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t)?;
    }
    if let Some(t) = opts.timeout {
        easy.timeout(t)?;
    }
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        tracing::warn!("GET {} returned HTTP {}", url, code);
        return Err(BrowseError::HttpStatus {
            url: url.to_string(),
            code,
        });
    }

    Ok(body)
}
