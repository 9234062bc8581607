//! Coalesces bursts of text changes into one lookup.
//!
//! Every `TextChanged` restarts the quiet-period timer. When it elapses the
//! latest snapshot is looked up in its own task, so typing is never blocked
//! by a slow upstream. Each dispatch takes a ticket from the
//! [`RequestSequence`]; a result is only shown if its ticket is still the
//! latest when it completes.

use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use ohsub_types::{AppEvent, DisplayResult};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::lookup::lookup;
use crate::sequence::RequestSequence;
use crate::service::ServiceSelection;

#[derive(Debug)]
pub enum DebounceCommand {
    TextChanged(String),
    /// Drop the pending snapshot and clear the display
    Reset,
    /// Use these providers from now on; also clears the display
    SwitchServices(ServiceSelection),
}

pub struct Debouncer {
    quiet: Duration,
    services: Arc<ServiceSelection>,
    sequence: Arc<RequestSequence>,
}

impl Debouncer {
    pub fn new(quiet: Duration, services: ServiceSelection) -> Self {
        Self {
            quiet,
            services: Arc::new(services),
            sequence: Arc::new(RequestSequence::new()),
        }
    }

    /// Run until the command channel closes or `cancel` fires
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<DebounceCommand>,
        display_tx: AsyncSender<AppEvent>,
        cancel: CancellationToken,
    ) {
        let mut pending: Option<String> = None;
        let timer = time::sleep(self.quiet);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Debouncer stopping");
                    break;
                }
                command = commands.recv() => {
                    let Some(command) = command else {
                        tracing::debug!("Debounce command channel closed");
                        break;
                    };

                    match command {
                        DebounceCommand::TextChanged(text) => {
                            pending = Some(text);
                            timer.as_mut().reset(Instant::now() + self.quiet);
                        }
                        DebounceCommand::Reset => {
                            pending = None;
                            self.clear(&display_tx).await;
                        }
                        DebounceCommand::SwitchServices(services) => {
                            tracing::info!("Switching services: {:?}", services);
                            pending = None;
                            self.services = Arc::new(services);
                            self.clear(&display_tx).await;
                        }
                    }
                }
                _ = &mut timer, if pending.is_some() => {
                    if let Some(text) = pending.take() {
                        self.fire(text, &display_tx);
                    }
                }
            }
        }
    }

    fn fire(&self, text: String, display_tx: &AsyncSender<AppEvent>) {
        let ticket = self.sequence.issue();
        let services = Arc::clone(&self.services);
        let sequence = Arc::clone(&self.sequence);
        let display_tx = display_tx.clone();

        tracing::debug!(seq = ticket.value(), "Debounce fired: '{}'", text);

        tokio::spawn(async move {
            let outcome = lookup(&text, &services).await;

            if !sequence.is_current(ticket) {
                tracing::debug!(
                    seq = ticket.value(),
                    latest = sequence.latest(),
                    "Discarding stale result"
                );
                return;
            }

            let result = DisplayResult {
                seq: ticket.value(),
                input: text,
                text: outcome.text,
                source: outcome.source,
            };

            if let Err(e) = display_tx.send(AppEvent::ShowResult(result)).await {
                tracing::warn!("Failed to deliver lookup result: {e}");
            }
        });
    }

    /// Invalidate in-flight lookups and blank the display
    async fn clear(&self, display_tx: &AsyncSender<AppEvent>) {
        let ticket = self.sequence.issue();
        let cleared = DisplayResult::cleared(ticket.value());

        if let Err(e) = display_tx.send(AppEvent::ShowResult(cleared)).await {
            tracing::warn!("Failed to clear display: {e}");
        }
    }
}
