//! `ossb ls <url>` – fetch a listing, filter it, print (and optionally copy) URLs.

use anyhow::Result;
use ossb_core::clipboard::{ClipboardSink, SystemClipboard};
use ossb_core::listing::ListingSource;
use ossb_core::session::{Action, Session};
use serde::Serialize;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Default)]
pub struct LsArgs {
    pub url: String,
    pub filter: Option<String>,
    pub ext: Option<String>,
    pub copy: bool,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LsJson<'a> {
    base_url: &'a str,
    keys: &'a [String],
    urls: Vec<&'a str>,
    extensions: Vec<&'a str>,
}

pub fn run_ls(source: &dyn ListingSource, args: &LsArgs) -> Result<()> {
    let mut clipboard = SystemClipboard::new();
    let output = render_ls(source, &mut clipboard, args)?;
    println!("{}", output);
    if args.copy {
        // The clipboard is released when `clipboard` drops, so stay alive until the user is done.
        io::stdout().flush()?;
        hold_clipboard(io::stdin().lock(), &mut io::stderr())?;
    }
    Ok(())
}

/// Blocks until a line (or EOF) arrives on `input`.
pub(crate) fn hold_clipboard<R: BufRead, W: Write>(mut input: R, out: &mut W) -> io::Result<()> {
    write!(out, "URLs stay on the clipboard until ossb exits; press Enter to exit ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Runs the `ls` actions against `session` state and returns the text to print.
pub(crate) fn render_ls(
    source: &dyn ListingSource,
    clipboard: &mut dyn ClipboardSink,
    args: &LsArgs,
) -> Result<String> {
    let mut session = Session::new();
    session.apply(Action::Fetch(args.url.clone()), source, clipboard)?;

    let filter = match (&args.filter, &args.ext) {
        (Some(text), _) => Some(Action::Filter(text.clone())),
        (None, Some(ext)) => Some(Action::FilterExtension(ext.clone())),
        (None, None) => None,
    };
    if let Some(action) = filter {
        session.apply(action, source, clipboard)?;
    }

    if args.copy {
        let outcome = session.apply(Action::Copy, source, clipboard)?;
        eprintln!("{}", outcome);
    }

    if args.json {
        let doc = LsJson {
            base_url: session.base_url().unwrap_or_default(),
            keys: session.view(),
            urls: session.displayed().lines().collect(),
            extensions: session.extensions().iter().map(String::as_str).collect(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    } else {
        Ok(session.displayed().to_string())
    }
}
