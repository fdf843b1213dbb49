/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch and replace the listing from a URL.
    Fetch(String),
    /// Show keys containing the text (case-insensitive); empty shows all.
    Filter(String),
    /// Show keys containing the extension (case-insensitive).
    FilterExtension(String),
    /// Show the URL of the key at this index of the full listing.
    Select(usize),
    /// Copy the shown URLs, percent-encoded, to the clipboard.
    Copy,
}

/// What an action did, for the front end to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Fetched { keys: usize, extensions: usize },
    Filtered { matches: usize },
    Selected { url: String },
    Copied { count: usize },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Fetched { keys, extensions } => {
                write!(f, "fetched {} keys ({} extensions)", keys, extensions)
            }
            Outcome::Filtered { matches } => write!(f, "{} matching keys", matches),
            Outcome::Selected { url } => write!(f, "{}", url),
            Outcome::Copied { count } => write!(f, "copied {} URLs to clipboard", count),
        }
    }
}
