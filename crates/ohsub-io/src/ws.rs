use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;

/// Connect to a text hook server and report every text frame
pub async fn start_ws_listener<F>(url: &str, mut on_text: F) -> Result<JoinHandle<()>, anyhow::Error>
where
    F: FnMut(String) + Send + 'static,
{
    let (ws_stream, _) = connect_async(url).await?;
    let (_, mut read) = ws_stream.split();

    let handle = tokio::spawn(async move {
        while let Some(msg) = read.next().await {
            match msg {
                Ok(msg) if msg.is_text() => {
                    if let Ok(text) = msg.to_text() {
                        on_text(text.to_string());
                    }
                }
                Ok(msg) if msg.is_close() => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("WebSocket read failed: {e}");
                    break;
                }
            }
        }
        tracing::info!("WebSocket stream ended");
    });

    Ok(handle)
}
