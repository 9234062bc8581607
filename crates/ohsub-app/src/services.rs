use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use ohsub_config::{Config, EnglishProvider, NoteBackend};
use ohsub_core::ServiceSelection;
use ohsub_lang_english::{GoogleTranslator, YoudaoEnglishDictionary, YoudaoEnglishTranslator};
use ohsub_lang_japanese::JapaneseTranslator;
use ohsub_notes::{AnkiConnectClient, AnkiNoteWriter, CsvNoteWriter, NoteTemplate, NoteWriter};
use ohsub_translator::{Translator, http_client};
use ohsub_types::LangMode;

/// Providers for `mode`; only zh-en has a word dictionary
pub fn build_services(mode: LangMode, config: &Config) -> anyhow::Result<ServiceSelection> {
    let client = http_client(Duration::from_millis(config.translator.timeout_ms))
        .context("Failed to build HTTP client")?;

    let selection = match mode {
        LangMode::ZhEn => {
            let translator: Arc<dyn Translator> = match config.translator.english_provider {
                EnglishProvider::Google => Arc::new(GoogleTranslator::new(
                    client.clone(),
                    config.translator.google_url.clone(),
                )),
                EnglishProvider::Youdao => Arc::new(YoudaoEnglishTranslator::new(
                    client.clone(),
                    config.translator.youdao_url.clone(),
                )),
            };

            let selection = ServiceSelection::new(mode, translator);
            if config.dictionary.enabled {
                selection.with_dictionary(Arc::new(YoudaoEnglishDictionary::new(
                    client,
                    config.dictionary.url.clone(),
                )))
            } else {
                selection
            }
        }
        LangMode::ZhJa => ServiceSelection::new(
            mode,
            Arc::new(JapaneseTranslator::new(
                client,
                config.translator.youdao_url.clone(),
            )),
        ),
    };

    Ok(selection)
}

/// Note backend from config; relative CSV paths resolve against `data_dir`
pub async fn build_note_writer(
    config: &Config,
    data_dir: &Path,
) -> anyhow::Result<Arc<dyn NoteWriter>> {
    let writer: Arc<dyn NoteWriter> = match config.notes.backend {
        NoteBackend::Csv => {
            let path = data_dir.join(&config.notes.csv_path);
            tracing::info!("Notes will be saved to {}", path.display());
            Arc::new(CsvNoteWriter::new(path))
        }
        NoteBackend::Anki => {
            let anki = &config.notes.anki;
            let client = AnkiConnectClient::new(
                anki.url.clone(),
                http_client(Duration::from_millis(config.translator.timeout_ms))
                    .context("Failed to build AnkiConnect client")?,
            );

            match client.version().await {
                Ok(version) => tracing::info!("AnkiConnect v{} at {}", version, anki.url),
                Err(e) => tracing::warn!("AnkiConnect not reachable yet: {e}"),
            }

            let template = NoteTemplate::new(
                anki.deck.clone(),
                anki.model.clone(),
                anki.front_template.clone(),
                anki.back_template.clone(),
            );
            Arc::new(AnkiNoteWriter::new(client, template))
        }
    };

    Ok(writer)
}
