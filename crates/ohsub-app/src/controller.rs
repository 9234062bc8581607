use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use ohsub_core::{DebounceCommand, Debouncer, ServiceSelection};
use ohsub_notes::NoteWriter;
use ohsub_types::AppEvent;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::display::display_loop;
use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(128), // results and status lines
            ui_to_app: kanal::bounded_async(64),  // keystrokes and commands
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        services: ServiceSelection,
        note_writer: Arc<dyn NoteWriter>,
        quiet: Duration,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();
        let (debounce_tx, debounce_rx) = mpsc::channel::<DebounceCommand>(64);

        // Debouncer
        let debouncer = Debouncer::new(quiet, services);
        let display_tx = self.channels.app_to_ui.0.clone();
        let cancel = self.cancel_token.child_token();
        tasks.spawn(async move {
            debouncer.run(debounce_rx, display_tx, cancel).await;
            Ok(())
        });

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            debounce_tx,
            note_writer,
        ));

        // Display loop
        tasks.spawn(display_loop(
            self.state.clone(),
            self.channels.app_to_ui.1.clone(),
        ));

        // Watcher IO
        tasks.spawn(watcher_io(
            self.state.clone(),
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
        let _ = self.channels.app_to_ui.0.close();
        let _ = self.channels.ui_to_app.0.close();
    }
}
