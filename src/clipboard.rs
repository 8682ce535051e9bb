use std::{thread, time::Duration};

use log::{debug, warn};

pub use crate::error::{Error, Result};

/// Write only access to a clipboard.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard.
pub struct SystemClipboard {
    clear_after: Option<Duration>,
}

impl SystemClipboard {
    /// `clear_after` empties the clipboard again after that delay, as long as it still holds
    /// the copied text.
    pub fn new(clear_after: Option<Duration>) -> SystemClipboard {
        SystemClipboard { clear_after }
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut ctx = arboard::Clipboard::new()?;
        ctx.set_text(text)?;
        debug!("copied {} characters to the clipboard", text.chars().count());

        if let Some(delay) = self.clear_after {
            let copied = zeroize::Zeroizing::new(text.to_owned());
            thread::spawn(move || {
                thread::sleep(delay);
                if let Err(err) = clear_if_unchanged(&copied) {
                    warn!("failed to clear the clipboard: {}", err);
                }
            });
        }

        Ok(())
    }
}

fn clear_if_unchanged(copied: &str) -> Result<()> {
    let mut ctx = arboard::Clipboard::new()?;
    let current = zeroize::Zeroizing::new(ctx.get_text().unwrap_or_default());
    if current.as_str() == copied {
        ctx.clear()?;
        debug!("cleared the clipboard");
    }
    Ok(())
}
