//! Percent-encoding of object keys.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything but ASCII alphanumerics and `-_.~/` is escaped.
const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

pub fn encode_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Percent-decodes a whole string, replacing invalid UTF-8 sequences.
pub fn percent_decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Recovers the raw key from an encoded URL built on `base_url`.
///
/// Returns `None` if `url` does not start with `base_url` or the decoded bytes are not UTF-8.
pub fn decode_key(base_url: &str, url: &str) -> Option<String> {
    let encoded = url.strip_prefix(base_url)?;
    percent_decode_str(encoded)
        .decode_utf8()
        .ok()
        .map(|k| k.into_owned())
}
