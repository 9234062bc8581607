use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// New snapshot of the input text
    TextChanged { text: String, source: TextSource },
    /// Clear input and result, drop pending lookups
    Reset,
    SwitchMode(LangMode),
    /// Save the currently displayed input/result pair
    WriteNote,
    ShowResult(DisplayResult),
    StatusUpdate(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Manual,
    Clipboard,
    Websocket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    /// Sequence number of the lookup that produced this result
    pub seq: u64,
    pub input: String,
    pub text: String,
    pub source: ResultSource,
}

impl DisplayResult {
    pub fn cleared(seq: u64) -> Self {
        Self {
            seq,
            input: String::new(),
            text: String::new(),
            source: ResultSource::Cleared,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// Input was blank, nothing was queried
    Empty,
    Dictionary,
    Translation,
    /// Display wiped by a reset or mode switch
    Cleared,
}

/// Active language pair; decides which providers are live
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LangMode {
    #[default]
    #[serde(rename = "zh-en")]
    ZhEn,
    #[serde(rename = "zh-ja")]
    ZhJa,
}

impl LangMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LangMode::ZhEn => "zh-en",
            LangMode::ZhJa => "zh-ja",
        }
    }
}

impl fmt::Display for LangMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LangMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh-en" | "en" | "zhen" => Ok(LangMode::ZhEn),
            "zh-ja" | "ja" | "jp" | "zhja" => Ok(LangMode::ZhJa),
            other => Err(format!("unknown language mode: {other}")),
        }
    }
}
