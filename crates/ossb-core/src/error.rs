//! Error types for listing fetch, parse, selection, and copy actions.
//!
//! Every action on a [`Session`](crate::session::Session) returns a
//! [`BrowseError`] on failure. None of them are fatal: the front end reports
//! the message and waits for the next action.

use thiserror::Error;

/// Coarse classification used by front ends to title the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or non-2xx HTTP status.
    Network,
    /// Response body is not well-formed XML.
    Parse,
    /// The action cannot run with the current input or state.
    User,
    /// The system clipboard could not be opened or written.
    Clipboard,
}

impl ErrorKind {
    pub fn title(self) -> &'static str {
        match self {
            ErrorKind::Network => "request error",
            ErrorKind::Parse => "parse error",
            ErrorKind::User => "error",
            ErrorKind::Clipboard => "clipboard error",
        }
    }
}

/// Invalid input or an action issued in the wrong state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("please enter a valid URL")]
    MissingUrl,
    #[error("fetch a bucket listing before copying URLs")]
    NoBaseUrl,
    #[error("no key at index {index} (listing has {len} keys)")]
    SelectionOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("network request failed: {0}")]
    Network(#[from] curl::Error),

    #[error("GET {url} returned HTTP {code}")]
    HttpStatus { url: String, code: u32 },

    #[error("XML parse failed: {0}")]
    Parse(#[from] xmltree::ParseError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl BrowseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BrowseError::Network(_) | BrowseError::HttpStatus { .. } => ErrorKind::Network,
            BrowseError::Parse(_) => ErrorKind::Parse,
            BrowseError::User(_) => ErrorKind::User,
            BrowseError::Clipboard(_) => ErrorKind::Clipboard,
        }
    }
}
