use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteBackend {
    #[default]
    Csv,
    Anki,
}

fn default_csv_path() -> String {
    "notes.csv".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NotesConfig {
    pub backend: NoteBackend,
    /// Relative paths resolve against the data directory
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
    pub anki: AnkiConfig,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            backend: NoteBackend::default(),
            csv_path: default_csv_path(),
            anki: AnkiConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AnkiConfig {
    /// AnkiConnect URL
    pub url: String,
    pub deck: String,
    pub model: String,
    pub front_template: String,
    pub back_template: String,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8765".to_string(),
            deck: "Subtitles".to_string(),
            model: "Basic".to_string(),
            front_template: "{input}".to_string(),
            back_template: "{result}".to_string(),
        }
    }
}
