//! Case-insensitive substring filtering of listing keys.

/// The active filter of a session: free text typed by the user, or an extension selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFilter {
    Text(String),
    Extension(String),
}

impl KeyFilter {
    pub fn predicate(&self) -> &str {
        match self {
            KeyFilter::Text(s) | KeyFilter::Extension(s) => s,
        }
    }
}

/// Keys whose lowercased text contains the lowercased `predicate`, in listing order.
///
/// An empty predicate matches every key.
pub fn filter_keys<'a, S: AsRef<str>>(keys: &'a [S], predicate: &str) -> Vec<&'a str> {
    let needle = predicate.to_lowercase();
    keys.iter()
        .map(|k| k.as_ref())
        .filter(|k| k.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_predicate_is_identity() {
        let keys = ["b.txt", "A.png", "c"];
        assert_eq!(filter_keys(&keys, ""), keys);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(filter_keys(&["A.TXT"], "txt"), vec!["A.TXT"]);
        assert_eq!(filter_keys(&["a.txt"], "TXT"), vec!["a.txt"]);
    }

    #[test]
    fn preserves_order() {
        let keys = ["a.png", "c.txt", "b.PNG"];
        assert_eq!(filter_keys(&keys, "png"), vec!["a.png", "b.PNG"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_keys(&["a.png"], "zip").is_empty());
    }

    #[test]
    fn predicate_of_either_filter() {
        assert_eq!(KeyFilter::Text("logs/".into()).predicate(), "logs/");
        assert_eq!(KeyFilter::Extension("png".into()).predicate(), "png");
    }
}
