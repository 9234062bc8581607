use std::sync::Arc;

use kanal::AsyncSender;
use ohsub_core::DebounceCommand;
use ohsub_types::{AppEvent, LangMode};
use tokio::sync::mpsc;

use crate::services::build_services;
use crate::state::AppState;

pub async fn handle_mode_switch(
    state: Arc<AppState>,
    mode: LangMode,
    debounce_tx: &mpsc::Sender<DebounceCommand>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if *state.mode.read().await == mode {
        app_to_ui_tx
            .send(AppEvent::StatusUpdate(format!("Already in {mode} mode")))
            .await?;
        return Ok(());
    }

    let built = {
        let config = state.config.read().await;
        build_services(mode, &config)
    };

    let services = match built {
        Ok(services) => services,
        Err(e) => {
            tracing::error!("Failed to switch to {}: {:#}", mode, e);
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(format!("Could not switch to {mode}: {e}")))
                .await?;
            return Ok(());
        }
    };

    *state.mode.write().await = mode;
    *state.last_result.write().await = None;

    tracing::info!("Language mode switched to {}", mode);
    debounce_tx
        .send(DebounceCommand::SwitchServices(services))
        .await?;

    app_to_ui_tx
        .send(AppEvent::StatusUpdate(format!("Mode: {mode}")))
        .await?;

    Ok(())
}
