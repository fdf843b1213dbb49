//! Clipboard sinks for the copy action.

use crate::error::BrowseError;
use copypasta::{ClipboardContext, ClipboardProvider};

pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&mut self, text: String) -> Result<(), BrowseError>;
}

/// The desktop clipboard (X11/Wayland, macOS, Windows) via `copypasta`.
///
/// The context is opened on the first copy, so headless sessions only fail at
/// copy time, and then held until this value is dropped. On X11 the process
/// owns the selection: copied text stays pasteable only while the context lives.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a copy has opened the desktop clipboard.
    pub fn is_open(&self) -> bool {
        self.ctx.is_some()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, BrowseError> {
        let ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => {
                let ctx =
                    ClipboardContext::new().map_err(|e| BrowseError::Clipboard(e.to_string()))?;
                tracing::debug!("opened system clipboard");
                ctx
            }
        };
        Ok(self.ctx.insert(ctx))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), BrowseError> {
        self.context()?
            .set_contents(text)
            .map_err(|e| BrowseError::Clipboard(e.to_string()))
    }
}

/// In-process clipboard. Holds the last text written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, or `None` if the clipboard was never written.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: String) -> Result<(), BrowseError> {
        self.contents = Some(text);
        Ok(())
    }
}
