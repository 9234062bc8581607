use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where text-changed snapshots come from besides typed lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    #[default]
    Stdin,
    Clipboard,
    Websocket,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputSource::Stdin => "stdin",
            InputSource::Clipboard => "clipboard",
            InputSource::Websocket => "websocket",
        };
        f.write_str(name)
    }
}

impl FromStr for InputSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdin" => Ok(InputSource::Stdin),
            "clipboard" => Ok(InputSource::Clipboard),
            "websocket" | "ws" => Ok(InputSource::Websocket),
            other => Err(format!("unknown input source: {other}")),
        }
    }
}

fn default_ws_url() -> String {
    "ws://localhost:6677".to_string()
}

fn default_clipboard_poll_ms() -> u64 {
    500
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct InputConfig {
    pub source: InputSource,
    /// WebSocket URL of the text hook server
    #[serde(default = "default_ws_url")]
    pub ws_url: String,
    #[serde(default = "default_clipboard_poll_ms")]
    pub clipboard_poll_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            source: InputSource::default(),
            ws_url: default_ws_url(),
            clipboard_poll_ms: default_clipboard_poll_ms(),
        }
    }
}
