//! `ossb exts <url>` – list extensions of a bucket listing.

use anyhow::Result;
use ossb_core::extensions::extension_counts;
use ossb_core::listing::{fetch_listing, ListingSource};

pub fn run_exts(source: &dyn ListingSource, url: &str) -> Result<()> {
    let listing = fetch_listing(source, url)?;
    let counts = extension_counts(listing.keys());
    if counts.is_empty() {
        println!("No file extensions in {} keys.", listing.keys().len());
        return Ok(());
    }
    println!("{:<12} {}", "EXT", "KEYS");
    for (ext, n) in counts {
        println!("{:<12} {}", ext.to_uppercase(), n);
    }
    Ok(())
}
