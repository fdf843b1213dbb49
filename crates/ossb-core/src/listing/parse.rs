//! Extract object keys from a bucket listing document.

use crate::error::BrowseError;
use xmltree::{Element, ParserConfig};

const CONTENTS_TAG: &str = "Contents";
const KEY_TAG: &str = "Key";

/// Parses `body` and returns the text of each `Key` child of every `Contents`
/// element below the root, in document order.
///
/// Element names are matched on their local name, so any namespace works.
/// A `Key` with no text yields `None`. Key text is kept verbatim, including
/// whitespace-only and padded keys.
pub fn parse_keys(body: &[u8]) -> Result<Vec<Option<String>>, BrowseError> {
    let config = ParserConfig::new()
        .whitespace_to_characters(true)
        .ignore_comments(false);
    let root = Element::parse_with_config(body, config)?;
    let mut keys = Vec::new();
    collect_keys(&root, &mut keys);
    Ok(keys)
}

fn collect_keys(element: &Element, keys: &mut Vec<Option<String>>) {
    for child in element.children.iter().filter_map(|n| n.as_element()) {
        if child.name == CONTENTS_TAG {
            keys.extend(
                child
                    .children
                    .iter()
                    .filter_map(|n| n.as_element())
                    .filter(|e| e.name == KEY_TAG)
                    .map(|e| e.get_text().map(|t| t.into_owned()).filter(|t| !t.is_empty())),
            );
        }
        collect_keys(child, keys);
    }
}
