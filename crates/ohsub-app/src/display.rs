use std::sync::Arc;

use kanal::AsyncReceiver;
use ohsub_types::{AppEvent, DisplayResult, ResultSource};

use crate::state::AppState;

/// Terminal rendering of a lookup result; every result replaces the last line shown
pub fn render_result(result: &DisplayResult) -> String {
    match result.source {
        ResultSource::Dictionary => format!("[dict] {}", result.text),
        ResultSource::Translation if result.text.is_empty() => "[----]".to_string(),
        ResultSource::Translation => format!("[tran] {}", result.text),
        ResultSource::Cleared | ResultSource::Empty => String::new(),
    }
}

/// Receives backend output and prints it; the stand-in for the overlay window
pub async fn display_loop(
    state: Arc<AppState>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::ShowResult(result) => {
                if !state.record_result(&result).await {
                    tracing::debug!(seq = result.seq, "Dropping result older than the one shown");
                    continue;
                }
                tracing::debug!(seq = result.seq, "Showing {:?} result", result.source);
                println!("{}", render_result(&result));
            }
            AppEvent::StatusUpdate(status) => {
                println!("-- {status}");
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str, source: ResultSource) -> DisplayResult {
        DisplayResult {
            seq: 1,
            input: "x".to_string(),
            text: text.to_string(),
            source,
        }
    }

    #[test]
    fn rendering() {
        assert_eq!(
            render_result(&result("n. 苹果", ResultSource::Dictionary)),
            "[dict] n. 苹果"
        );
        assert_eq!(render_result(&result("你好世界", ResultSource::Translation)), "[tran] 你好世界");
        assert_eq!(render_result(&result("", ResultSource::Translation)), "[----]");
    }

    #[test]
    fn blank_and_cleared_results_blank_the_line() {
        assert_eq!(render_result(&result("", ResultSource::Empty)), "");
        assert_eq!(render_result(&result("", ResultSource::Cleared)), "");
    }
}
