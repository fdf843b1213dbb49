//! Extension index: distinct lowercase suffixes after the last `.` of each key.

use std::collections::{BTreeMap, BTreeSet};

/// Lowercase text after the last `.` of `key`, or `None` if the key has no `.`.
pub fn extension_of(key: &str) -> Option<String> {
    key.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Distinct extensions of `keys`, alphabetically ordered.
///
/// Keys ending in `.` have an empty extension, which is left out since it
/// cannot select anything narrower than the full listing.
pub fn extension_set<S: AsRef<str>>(keys: &[S]) -> BTreeSet<String> {
    keys.iter()
        .filter_map(|k| extension_of(k.as_ref()))
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Number of keys per extension, alphabetically ordered.
pub fn extension_counts<S: AsRef<str>>(keys: &[S]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for ext in keys
        .iter()
        .filter_map(|k| extension_of(k.as_ref()))
        .filter(|ext| !ext.is_empty())
    {
        *counts.entry(ext).or_insert(0) += 1;
    }
    counts
}
