use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use ohsub_core::DebounceCommand;
use ohsub_notes::NoteWriter;
use ohsub_types::AppEvent;
use tokio::sync::mpsc;

use crate::state::AppState;

pub mod switch_mode;
pub mod text_input;
pub mod write_note;

use switch_mode::handle_mode_switch;
use text_input::handle_text_input;
use write_note::handle_note;

/// App's main loop; returns when a quit is requested
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    debounce_tx: mpsc::Sender<DebounceCommand>,
    note_writer: Arc<dyn NoteWriter>,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        if let AppEvent::Quit = event {
            tracing::info!("[EVENT_LOOP] Quit requested");
            return Ok(());
        }

        handle_events(
            state.clone(),
            note_writer.as_ref(),
            &debounce_tx,
            &app_to_ui_tx,
            event,
        )
        .await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    note_writer: &dyn NoteWriter,
    debounce_tx: &mpsc::Sender<DebounceCommand>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TextChanged { text, source } => {
            handle_text_input(text, source, debounce_tx).await?;
        }
        AppEvent::Reset => {
            tracing::debug!("Reset requested");
            *state.last_result.write().await = None;
            debounce_tx.send(DebounceCommand::Reset).await?;
        }
        AppEvent::SwitchMode(mode) => {
            handle_mode_switch(state, mode, debounce_tx, app_to_ui_tx).await?;
        }
        AppEvent::WriteNote => {
            handle_note(state, note_writer, app_to_ui_tx).await?;
        }
        AppEvent::StatusUpdate(status) => {
            // Input-side messages (bad commands) go straight to the display
            app_to_ui_tx.send(AppEvent::StatusUpdate(status)).await?;
        }
        AppEvent::ShowResult(_) => {
            // UI-only event, ignore in backend
        }
        AppEvent::Quit => {}
    }

    Ok(())
}
