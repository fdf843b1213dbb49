//! URL modeling: bucket base URL, display URLs, and percent-encoded copy URLs.
//!
//! Display URLs are the raw `base + key` concatenation, kept readable. Copy
//! URLs escape the key portion only, so the base (scheme, host, bucket path)
//! is never double-encoded.

mod base;
mod encode;

pub use base::normalize_base_url;
pub use encode::{decode_key, encode_key, percent_decode};

/// Renders one display URL per key, newline-joined, without encoding.
pub fn display_urls<S: AsRef<str>>(base_url: &str, keys: &[S]) -> String {
    keys.iter()
        .map(|k| format!("{}{}", base_url, k.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Re-derives each key from the displayed text and returns encoded absolute URLs.
///
/// Blank lines are skipped. For every other line the base URL prefix (if
/// present) and any leading `/` are stripped before the key is encoded and
/// joined back onto `base_url`.
pub fn encoded_urls(base_url: &str, displayed: &str) -> Vec<String> {
    displayed
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let key = line.strip_prefix(base_url).unwrap_or(line);
            let key = key.trim_start_matches('/');
            format!("{}{}", base_url, encode_key(key))
        })
        .collect()
}
