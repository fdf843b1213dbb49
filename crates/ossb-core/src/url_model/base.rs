//! Bucket base URL derivation.

/// Strips the query string and guarantees a trailing `/`.
///
/// - `https://b.example.com/?prefix=logs/&max-keys=100` → `https://b.example.com/`
/// - `https://b.example.com` → `https://b.example.com/`
pub fn normalize_base_url(url: &str) -> String {
    let base = url.split('?').next().unwrap_or_default();
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    }
}
