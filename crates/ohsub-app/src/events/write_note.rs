use std::sync::Arc;

use kanal::AsyncSender;
use ohsub_notes::NoteWriter;
use ohsub_types::AppEvent;

use crate::state::AppState;

pub async fn handle_note(
    state: Arc<AppState>,
    note_writer: &dyn NoteWriter,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let last = state.last_result.read().await.clone();

    let status = match last {
        Some(result) => match note_writer.write(&result.input, &result.text).await {
            Ok(()) => "Note saved".to_string(),
            Err(e) => {
                tracing::error!("Failed to save note: {}", e);
                format!("Failed to save note: {e}. Close the notes file if it is open elsewhere.")
            }
        },
        None => "Nothing to save".to_string(),
    };

    app_to_ui_tx.send(AppEvent::StatusUpdate(status)).await?;

    Ok(())
}
