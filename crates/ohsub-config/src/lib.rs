use std::env;

use ohsub_types::LangMode;
use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::input::InputConfig;
use self::notes::NotesConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod input;
pub mod notes;
pub mod translator;

pub use self::input::InputSource;
pub use self::notes::NoteBackend;
pub use self::translator::EnglishProvider;

fn default_debounce_ms() -> u64 {
    800
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub dictionary: DictionaryConfig,
    pub notes: NotesConfig,
    pub input: InputConfig,

    /// Language pair active at startup
    pub mode: LangMode,
    /// Quiet period after the last keystroke before a lookup fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translator: TranslatorConfig::default(),
            dictionary: DictionaryConfig::default(),
            notes: NotesConfig::default(),
            input: InputConfig::default(),
            mode: LangMode::default(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Config {
    /// Override fields from environment variables, ignoring unparsable values
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("DEBOUNCE_MS").and_then(|v| v.parse().ok()) {
            self.debounce_ms = v;
        }

        if let Some(v) = lookup("TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.translator.timeout_ms = v;
        }

        if let Some(v) = lookup("LANG_MODE").and_then(|v| v.parse().ok()) {
            self.mode = v;
        }

        if let Some(v) = lookup("INPUT_SOURCE").and_then(|v| v.parse().ok()) {
            self.input.source = v;
        }

        if let Some(v) = lookup("WS_URL") {
            self.input.ws_url = v;
        }

        if let Some(v) = lookup("NOTES_PATH") {
            self.notes.csv_path = v;
        }

        if let Some(v) = lookup("ANKI_URL") {
            self.notes.anki.url = v;
        }
    }
}
