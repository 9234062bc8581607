mod anki;
mod client;
mod csv;
mod template;

pub use anki::AnkiNoteWriter;
pub use client::{AnkiConnectClient, AnkiNote};
pub use csv::CsvNoteWriter;
pub use template::NoteTemplate;

/// Persists an input/result pair as a study note
#[async_trait::async_trait]
pub trait NoteWriter: Send + Sync {
    async fn write(&self, input: &str, result: &str) -> Result<(), NoteError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("Nothing to save")]
    Empty,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Anki error: {0}")]
    Anki(#[from] anyhow::Error),
}
