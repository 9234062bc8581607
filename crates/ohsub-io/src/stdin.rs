use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Feed stdin lines to `on_line` in order until EOF or until it returns false
pub async fn forward_lines<F, Fut>(on_line: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = bool>,
{
    forward_lines_from(BufReader::new(tokio::io::stdin()), on_line).await
}

pub async fn forward_lines_from<R, F, Fut>(reader: R, mut on_line: F) -> Result<(), anyhow::Error>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = bool>,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if !on_line(line).await {
            break;
        }
    }
    Ok(())
}
