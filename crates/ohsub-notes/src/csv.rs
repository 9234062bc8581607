use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::{NoteError, NoteWriter};

const HEADER: &str = "time,input,result\n";

/// Appends notes as `"<unix seconds>","<input>","<result>"` rows
pub struct CsvNoteWriter {
    path: PathBuf,
    // Serializes appends from concurrent /note commands
    lock: Mutex<()>,
}

impl CsvNoteWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }
}

#[async_trait::async_trait]
impl NoteWriter for CsvNoteWriter {
    async fn write(&self, input: &str, result: &str) -> Result<(), NoteError> {
        if input.trim().is_empty() {
            return Err(NoteError::Empty);
        }

        let _guard = self.lock.lock().await;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let is_new = !fs::try_exists(&self.path).await.unwrap_or(false);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
            .to_string();

        let mut out = String::new();
        if is_new {
            out.push_str(HEADER);
        }
        out.push_str(&format_row(&[&timestamp, input, result]));

        file.write_all(out.as_bytes()).await?;
        file.flush().await?;

        tracing::info!("Note saved to {}", self.path.display());
        Ok(())
    }
}

/// One RFC 4180 row, every field quoted
pub fn format_row(fields: &[&str]) -> String {
    let quoted: Vec<String> = fields
        .iter()
        .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
        .collect();
    format!("{}\n", quoted.join(","))
}
