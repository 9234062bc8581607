use crate::client::AnkiNote;
use crate::{AnkiConnectClient, NoteError, NoteTemplate, NoteWriter};

/// Saves notes as Anki cards through AnkiConnect
pub struct AnkiNoteWriter {
    client: AnkiConnectClient,
    template: NoteTemplate,
}

impl AnkiNoteWriter {
    pub fn new(client: AnkiConnectClient, template: NoteTemplate) -> Self {
        Self { client, template }
    }
}

#[async_trait::async_trait]
impl NoteWriter for AnkiNoteWriter {
    async fn write(&self, input: &str, result: &str) -> Result<(), NoteError> {
        if input.trim().is_empty() {
            return Err(NoteError::Empty);
        }

        let note = AnkiNote::new(
            &self.template.deck,
            &self.template.model,
            self.template.format_front(input, result),
            self.template.format_back(input, result),
        );

        let note_id = self.client.add_note(&note).await?;

        tracing::info!("Added card to Anki: note_id={}", note_id);
        Ok(())
    }
}
