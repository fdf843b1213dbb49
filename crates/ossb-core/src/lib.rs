pub mod config;
pub mod logging;

pub mod clipboard;
pub mod error;
pub mod extensions;
pub mod filter;
pub mod listing;
pub mod session;
pub mod url_model;

pub use error::{BrowseError, ErrorKind, UserError};
