use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use ohsub_config::InputSource;
use ohsub_types::{AppEvent, TextSource};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Turn a typed line into an event. Lines starting with `/` are commands.
pub fn parse_line(line: &str) -> Result<AppEvent, String> {
    let Some(command) = line.trim().strip_prefix('/') else {
        return Ok(AppEvent::TextChanged {
            text: line.to_string(),
            source: TextSource::Manual,
        });
    };

    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("mode") => match parts.next() {
            Some(mode) => mode.parse().map(AppEvent::SwitchMode),
            None => Err("usage: /mode zh-en|zh-ja".to_string()),
        },
        Some("reset") | Some("clear") => Ok(AppEvent::Reset),
        Some("note") => Ok(AppEvent::WriteNote),
        Some("quit") | Some("exit") => Ok(AppEvent::Quit),
        Some(other) => Err(format!("unknown command: /{other}")),
        None => Err("empty command".to_string()),
    }
}

/// Sync callback for capture watchers; each text is sent to the app from its own task
pub fn capture_forwarder(
    tx: AsyncSender<AppEvent>,
    source: TextSource,
) -> impl FnMut(String) + Send + 'static {
    move |text| {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tx.send(AppEvent::TextChanged { text, source }).await {
                tracing::error!("Failed to send {:?} text to app: {}", source, e);
            }
        });
    }
}

/// Input watchers: typed lines always, plus clipboard or websocket capture
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (source, ws_url, poll) = {
        let config = state.config.read().await;
        (
            config.input.source,
            config.input.ws_url.clone(),
            Duration::from_millis(config.input.clipboard_poll_ms),
        )
    };

    tracing::info!("Input source: {}", source);

    let stdin_tx = event_tx.clone();
    let stdin_task = async move {
        let tx = stdin_tx.clone();
        let result = ohsub_io::stdin::forward_lines(move |line| {
            let tx = tx.clone();
            async move {
                match parse_line(&line) {
                    Ok(event) => tx.send(event).await.is_ok(),
                    Err(message) => tx.send(AppEvent::StatusUpdate(message)).await.is_ok(),
                }
            }
        })
        .await;

        if let Err(e) = result {
            tracing::error!("Failed to read stdin: {}", e);
        }

        tracing::info!("stdin closed");
        if source == InputSource::Stdin {
            let _ = stdin_tx.send(AppEvent::Quit).await;
        } else {
            // Captured text keeps flowing without a terminal attached
            std::future::pending::<()>().await;
        }
    };

    let capture_tx = event_tx.clone();
    let capture_task = async move {
        match source {
            InputSource::Stdin => std::future::pending::<anyhow::Result<()>>().await,
            InputSource::Clipboard => {
                tracing::info!("Starting clipboard watcher");
                ohsub_io::clipboard::watch_clipboard(
                    poll,
                    capture_forwarder(capture_tx, TextSource::Clipboard),
                )
                .await
            }
            InputSource::Websocket => {
                tracing::info!("Starting WebSocket listener on {}", ws_url);
                let handle = ohsub_io::ws::start_ws_listener(
                    &ws_url,
                    capture_forwarder(capture_tx, TextSource::Websocket),
                )
                .await?;
                handle.await?;
                Ok(())
            }
        }
    };

    tokio::select! {
        _ = stdin_task => {}
        result = capture_task => {
            if let Err(e) = result {
                tracing::error!("{} watcher error: {}", source, e);
            }
        }
        _ = cancel.cancelled() => {
            tracing::info!("Input watchers stopping");
        }
    }

    Ok(())
}
