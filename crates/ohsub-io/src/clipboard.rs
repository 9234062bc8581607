use std::time::Duration;

use arboard::Clipboard;
use tokio::time::{self, MissedTickBehavior};

/// Remembers the last clipboard text so only fresh copies are reported
#[derive(Debug, Default)]
pub struct ClipboardChange {
    last: String,
}

impl ClipboardChange {
    /// Start from what the clipboard already holds; that is not a new subtitle
    pub fn seeded(current: String) -> Self {
        Self { last: current }
    }

    /// `Some(text)` when `text` differs from the previous copy and is not blank
    pub fn observe(&mut self, text: String) -> Option<String> {
        if text.trim().is_empty() || text == self.last {
            return None;
        }
        self.last = text.clone();
        Some(text)
    }
}

/// Poll the system clipboard and report each new non-blank text
pub async fn watch_clipboard<F>(poll: Duration, mut on_text: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) + Send + 'static,
{
    let mut clipboard = Clipboard::new()?;
    let mut change = ClipboardChange::seeded(clipboard.get_text().unwrap_or_default());

    let mut interval = time::interval(poll);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        match clipboard.get_text() {
            Ok(text) => {
                if let Some(text) = change.observe(text) {
                    on_text(text);
                }
            }
            // Images and other non-text content land here
            Err(e) => tracing::trace!("Clipboard has no text: {e}"),
        }
    }
}
