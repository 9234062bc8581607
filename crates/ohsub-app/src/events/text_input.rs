use ohsub_core::DebounceCommand;
use ohsub_core::preprocess::{DefaultPreprocessor, Preprocessor};
use ohsub_types::TextSource;
use tokio::sync::mpsc;

pub async fn handle_text_input(
    text: String,
    source: TextSource,
    debounce_tx: &mpsc::Sender<DebounceCommand>,
) -> anyhow::Result<()> {
    // Typed text is taken as-is; captured text is cleaned up first
    let text = match source {
        TextSource::Manual => text,
        TextSource::Clipboard | TextSource::Websocket => DefaultPreprocessor.process(&text),
    };

    tracing::debug!("TextChanged from {:?}: {} chars", source, text.chars().count());
    debounce_tx.send(DebounceCommand::TextChanged(text)).await?;

    Ok(())
}
