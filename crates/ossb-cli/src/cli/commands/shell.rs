//! `ossb shell [url]` – interactive session over stdin.
//!
//! Each input line is one action. Action errors are reported and the loop
//! keeps going; only I/O errors on the terminal itself end the session.

use anyhow::Result;
use ossb_core::clipboard::{ClipboardSink, SystemClipboard};
use ossb_core::listing::ListingSource;
use ossb_core::session::{Action, Outcome, Session};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  fetch <url>     fetch a bucket listing (replaces the current one)
  filter [text]   show keys containing text (no text shows all)
  ext <ext>       show keys with the given extension
  select <n>      show the URL of key n (see `keys`)
  keys            list keys with their numbers
  exts            list extension selectors
  show            print the URL pane
  copy            copy the URL pane, percent-encoded, to the clipboard
  help            this text
  quit            leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Act(Action),
    Keys,
    Exts,
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub(crate) fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };
    let parsed = match cmd.to_lowercase().as_str() {
        "fetch" | "f" => ShellCommand::Act(Action::Fetch(rest.to_string())),
        "filter" | "search" | "s" => ShellCommand::Act(Action::Filter(rest.to_string())),
        "ext" | "e" => {
            if rest.is_empty() {
                return Err("usage: ext <ext>".to_string());
            }
            ShellCommand::Act(Action::FilterExtension(
                rest.trim_start_matches('.').to_lowercase(),
            ))
        }
        "select" | "sel" => {
            let n: usize = rest
                .parse()
                .map_err(|_| "usage: select <n> (n from `keys`)".to_string())?;
            if n == 0 {
                return Err("key numbers start at 1".to_string());
            }
            ShellCommand::Act(Action::Select(n - 1))
        }
        "copy" | "c" => ShellCommand::Act(Action::Copy),
        "keys" | "ls" => ShellCommand::Keys,
        "exts" => ShellCommand::Exts,
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command `{}` (try `help`)", other)),
    };
    Ok(Some(parsed))
}

pub fn run_shell(source: &dyn ListingSource, url: Option<&str>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut clipboard = SystemClipboard::new();
    run_shell_with(
        source,
        &mut clipboard,
        url,
        stdin.lock(),
        &mut stdout.lock(),
    )
}

pub(crate) fn run_shell_with<R: BufRead, W: Write>(
    source: &dyn ListingSource,
    clipboard: &mut dyn ClipboardSink,
    url: Option<&str>,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut session = Session::new();
    writeln!(out, "ossb shell; type `help` for commands")?;

    if let Some(url) = url {
        dispatch(&mut session, source, clipboard, Action::Fetch(url.to_string()), out)?;
    }

    prompt(out)?;
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(ShellCommand::Act(action))) => {
                dispatch(&mut session, source, clipboard, action, out)?
            }
            Ok(Some(ShellCommand::Keys)) => print_keys(&session, out)?,
            Ok(Some(ShellCommand::Exts)) => print_exts(&session, out)?,
            Ok(Some(ShellCommand::Show)) => writeln!(out, "{}", session.displayed())?,
            Ok(Some(ShellCommand::Help)) => writeln!(out, "{}", HELP)?,
            Err(msg) => writeln!(out, "error: {}", msg)?,
        }
        prompt(out)?;
    }
    writeln!(out)?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "ossb> ")?;
    out.flush()
}

fn dispatch<W: Write>(
    session: &mut Session,
    source: &dyn ListingSource,
    clipboard: &mut dyn ClipboardSink,
    action: Action,
    out: &mut W,
) -> io::Result<()> {
    match session.apply(action, source, clipboard) {
        Ok(outcome) => {
            writeln!(out, "{}", outcome)?;
            match outcome {
                Outcome::Fetched { .. } => print_exts(session, out),
                Outcome::Filtered { .. } => writeln!(out, "{}", session.displayed()),
                Outcome::Selected { .. } | Outcome::Copied { .. } => Ok(()),
            }
        }
        Err(err) => {
            tracing::debug!("action failed: {}", err);
            writeln!(out, "{}: {}", err.kind().title(), err)
        }
    }
}

fn print_keys<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    for (i, key) in session.keys().iter().enumerate() {
        writeln!(out, "{:>5}  {}", i + 1, key)?;
    }
    Ok(())
}

fn print_exts<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let labels: Vec<String> = session
        .extensions()
        .iter()
        .map(|e| format!("[{}]", e.to_uppercase()))
        .collect();
    if labels.is_empty() {
        writeln!(out, "extensions: (none)")
    } else {
        writeln!(out, "extensions: {}", labels.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ossb_core::clipboard::MemoryClipboard;
    use ossb_core::BrowseError;

    struct Bucket;

    impl ListingSource for Bucket {
        fn get(&self, url: &str) -> Result<Vec<u8>, BrowseError> {
            if url.contains("broken") {
                return Ok(b"<ListBucketResult><Contents>".to_vec());
            }
            Ok(br#"<ListBucketResult>
                <Contents><Key>a.png</Key></Contents>
                <Contents><Key>b.PNG</Key></Contents>
                <Contents><Key>c.txt</Key></Contents>
            </ListBucketResult>"#
                .to_vec())
        }
    }

    fn run(url: Option<&str>, script: &str, clip: &mut MemoryClipboard) -> String {
        let mut out = Vec::new();
        run_shell_with(&Bucket, clip, url, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(
            parse_line("fetch https://b.example.com/?x=1"),
            Ok(Some(ShellCommand::Act(Action::Fetch(
                "https://b.example.com/?x=1".to_string()
            ))))
        );
        assert_eq!(
            parse_line("filter"),
            Ok(Some(ShellCommand::Act(Action::Filter(String::new()))))
        );
        assert_eq!(
            parse_line("ext .PNG"),
            Ok(Some(ShellCommand::Act(Action::FilterExtension(
                "png".to_string()
            ))))
        );
        assert_eq!(
            parse_line("select 2"),
            Ok(Some(ShellCommand::Act(Action::Select(1))))
        );
        assert_eq!(parse_line("COPY"), Ok(Some(ShellCommand::Act(Action::Copy))));
        assert_eq!(parse_line("q"), Ok(Some(ShellCommand::Quit)));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(parse_line("select zero").is_err());
        assert!(parse_line("select 0").is_err());
        assert!(parse_line("ext").is_err());
        assert!(parse_line("frobnicate").is_err());
    }

    #[test]
    fn fetch_filter_copy_session() {
        let mut clip = MemoryClipboard::new();
        let out = run(
            Some("https://b.example.com"),
            "ext png\ncopy\nquit\n",
            &mut clip,
        );
        assert!(out.contains("fetched 3 keys (2 extensions)"));
        assert!(out.contains("extensions: [PNG] [TXT]"));
        assert!(out.contains("2 matching keys"));
        assert!(out.contains("copied 2 URLs to clipboard"));
        assert_eq!(
            clip.contents(),
            Some("https://b.example.com/a.png\nhttps://b.example.com/b.PNG")
        );
    }

    #[test]
    fn errors_are_reported_and_session_continues() {
        let mut clip = MemoryClipboard::new();
        let out = run(
            None,
            "copy\nfetch\nfetch https://broken.example.com/\nselect 9\nkeys\n",
            &mut clip,
        );
        assert!(out.contains("error: fetch a bucket listing before copying URLs"));
        assert!(out.contains("error: please enter a valid URL"));
        assert!(out.contains("parse error: XML parse failed"));
        assert!(out.contains("error: no key at index 8 (listing has 0 keys)"));
        assert!(clip.contents().is_none());
    }

    #[test]
    fn select_and_keys() {
        let mut clip = MemoryClipboard::new();
        let out = run(
            Some("https://b.example.com/"),
            "keys\nselect 3\ncopy\n",
            &mut clip,
        );
        assert!(out.contains("    3  c.txt"));
        assert!(out.contains("https://b.example.com/c.txt"));
        assert_eq!(clip.contents(), Some("https://b.example.com/c.txt"));
    }
}
