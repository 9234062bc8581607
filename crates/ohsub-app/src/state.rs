use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use ohsub_config::Config;
use ohsub_types::{DisplayResult, LangMode, ResultSource};
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub mode: RwLock<LangMode>,
    /// What the display currently shows; source of the next note
    pub last_result: RwLock<Option<DisplayResult>>,
    /// Highest result sequence shown so far
    shown_seq: AtomicU64,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let mode = config.mode;
        Self {
            config: Arc::new(RwLock::new(config)),
            mode: RwLock::new(mode),
            last_result: RwLock::new(None),
            shown_seq: AtomicU64::new(0),
        }
    }

    /// Track the displayed result; cleared or blank results leave nothing to save.
    ///
    /// Returns false, leaving state untouched, when a newer result was already shown.
    pub async fn record_result(&self, result: &DisplayResult) -> bool {
        let mut last = self.last_result.write().await;
        let shown = self.shown_seq.fetch_max(result.seq, Ordering::SeqCst);
        if result.seq < shown {
            return false;
        }

        *last = match result.source {
            ResultSource::Cleared | ResultSource::Empty => None,
            ResultSource::Dictionary | ResultSource::Translation => Some(result.clone()),
        };
        true
    }
}
