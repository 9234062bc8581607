//! Event loop + debouncer wired together with fake providers

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use ohsub_config::Config;
use ohsub_core::{Debouncer, ServiceSelection};
use ohsub_dictionary::{Dictionary, DictionaryMetadata, LookupError};
use ohsub_notes::{NoteError, NoteWriter};
use ohsub_translator::{ProviderMetadata, TranslateError, Translation, Translator};
use ohsub_types::{AppEvent, DisplayResult, LangMode, ResultSource, TextSource};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};
use tokio_util::sync::CancellationToken;

use crate::display::render_result;
use crate::events::event_loop;
use crate::state::AppState;

#[derive(Default)]
struct EchoTranslator {
    inputs: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl Translator for EchoTranslator {
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError> {
        self.inputs.lock().unwrap().push(text.to_string());
        Ok(Translation {
            text: format!("译:{text}"),
            from: "en".to_string(),
            to: "zh".to_string(),
            provider: "echo".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "echo".to_string(),
            requires_api_key: false,
        }
    }
}

struct WordList(HashMap<&'static str, &'static str>);

#[async_trait::async_trait]
impl Dictionary for WordList {
    async fn query(&self, word: &str) -> Result<Option<String>, LookupError> {
        Ok(self.0.get(word).map(|d| d.to_string()))
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "words".to_string(),
            language: "en".to_string(),
        }
    }
}

#[derive(Default)]
struct RecordingNotes {
    notes: Mutex<Vec<(String, String)>>,
}

#[async_trait::async_trait]
impl NoteWriter for RecordingNotes {
    async fn write(&self, input: &str, result: &str) -> Result<(), NoteError> {
        self.notes
            .lock()
            .unwrap()
            .push((input.to_string(), result.to_string()));
        Ok(())
    }
}

struct Pipeline {
    state: Arc<AppState>,
    ui_tx: AsyncSender<AppEvent>,
    app_rx: AsyncReceiver<AppEvent>,
    translator: Arc<EchoTranslator>,
    notes: Arc<RecordingNotes>,
    event_loop: JoinHandle<anyhow::Result<()>>,
    _cancel: CancellationToken,
}

fn start() -> Pipeline {
    let state = Arc::new(AppState::new(Config::default()));
    let translator = Arc::new(EchoTranslator::default());
    let dictionary = Arc::new(WordList([("apple", "n. 苹果")].into_iter().collect()));
    let notes = Arc::new(RecordingNotes::default());

    let (ui_tx, ui_rx) = kanal::unbounded_async();
    let (app_tx, app_rx) = kanal::unbounded_async();
    let (debounce_tx, debounce_rx) = mpsc::channel(16);
    let cancel = CancellationToken::new();

    let services = ServiceSelection::new(LangMode::ZhEn, translator.clone()).with_dictionary(dictionary);
    let debouncer = Debouncer::new(Duration::from_millis(800), services);
    tokio::spawn(debouncer.run(debounce_rx, app_tx.clone(), cancel.clone()));

    let event_loop = tokio::spawn(event_loop(
        state.clone(),
        ui_rx,
        app_tx,
        debounce_tx,
        notes.clone(),
    ));

    Pipeline {
        state,
        ui_tx,
        app_rx,
        translator,
        notes,
        event_loop,
        _cancel: cancel,
    }
}

impl Pipeline {
    async fn type_text(&self, text: &str) {
        self.ui_tx
            .send(AppEvent::TextChanged {
                text: text.to_string(),
                source: TextSource::Manual,
            })
            .await
            .unwrap();
    }

    async fn next_event(&self) -> AppEvent {
        match timeout(Duration::from_secs(10), self.app_rx.recv()).await {
            Ok(Ok(event)) => event,
            Ok(Err(e)) => panic!("Channel error: {}", e),
            Err(_) => panic!("Timeout - no event arrived"),
        }
    }

    /// Next result, recorded the way the display loop records it
    async fn next_result(&self) -> DisplayResult {
        match self.next_event().await {
            AppEvent::ShowResult(result) => {
                self.state.record_result(&result).await;
                result
            }
            other => panic!("Expected a result, got {:?}", other),
        }
    }

    async fn next_status(&self) -> String {
        match self.next_event().await {
            AppEvent::StatusUpdate(status) => status,
            other => panic!("Expected a status, got {:?}", other),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn typed_word_is_defined_and_saved() {
    let pipeline = start();

    for text in ["a", "ap", "apple"] {
        pipeline.type_text(text).await;
        sleep(Duration::from_millis(100)).await;
    }

    let result = pipeline.next_result().await;
    assert_eq!(result.input, "apple");
    assert_eq!(result.text, "n. 苹果");
    assert_eq!(result.source, ResultSource::Dictionary);
    assert!(pipeline.translator.inputs.lock().unwrap().is_empty());

    pipeline.ui_tx.send(AppEvent::WriteNote).await.unwrap();
    assert_eq!(pipeline.next_status().await, "Note saved");
    assert_eq!(
        *pipeline.notes.notes.lock().unwrap(),
        vec![("apple".to_string(), "n. 苹果".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn note_after_reset_has_nothing_to_save() {
    let pipeline = start();

    pipeline.type_text("hello world").await;
    let result = pipeline.next_result().await;
    assert_eq!(result.text, "译:hello world");

    pipeline.ui_tx.send(AppEvent::Reset).await.unwrap();
    assert_eq!(pipeline.next_result().await.source, ResultSource::Cleared);

    pipeline.ui_tx.send(AppEvent::WriteNote).await.unwrap();
    assert_eq!(pipeline.next_status().await, "Nothing to save");
    assert!(pipeline.notes.notes.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn blank_snapshot_replaces_previous_answer() {
    let pipeline = start();

    pipeline.type_text("hello world").await;
    let answer = pipeline.next_result().await;
    assert_eq!(render_result(&answer), "[tran] 译:hello world");

    pipeline.type_text("   ").await;
    let blank = pipeline.next_result().await;
    assert_eq!(blank.source, ResultSource::Empty);
    assert_eq!(render_result(&blank), "");
    assert!(pipeline.state.last_result.read().await.is_none());
    assert_eq!(pipeline.translator.inputs.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn captured_text_is_folded_before_lookup() {
    let pipeline = start();

    pipeline
        .ui_tx
        .send(AppEvent::TextChanged {
            text: "I never said\r\nthat to you\n".to_string(),
            source: TextSource::Clipboard,
        })
        .await
        .unwrap();

    let result = pipeline.next_result().await;
    assert_eq!(result.input, "I never said that to you");
    assert_eq!(
        *pipeline.translator.inputs.lock().unwrap(),
        vec!["I never said that to you".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn mode_switch_clears_display_and_updates_state() {
    let pipeline = start();

    pipeline
        .ui_tx
        .send(AppEvent::SwitchMode(LangMode::ZhJa))
        .await
        .unwrap();

    // Cleared result and status line race; accept either order
    let mut saw_cleared = false;
    let mut saw_status = false;
    for _ in 0..2 {
        match pipeline.next_event().await {
            AppEvent::ShowResult(result) => {
                assert_eq!(result.source, ResultSource::Cleared);
                saw_cleared = true;
            }
            AppEvent::StatusUpdate(status) => {
                assert_eq!(status, "Mode: zh-ja");
                saw_status = true;
            }
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    assert!(saw_cleared && saw_status);
    assert_eq!(*pipeline.state.mode.read().await, LangMode::ZhJa);
}

#[tokio::test(start_paused = true)]
async fn switching_to_active_mode_keeps_the_display() {
    let pipeline = start();

    pipeline.type_text("hello world").await;
    pipeline.next_result().await;

    pipeline
        .ui_tx
        .send(AppEvent::SwitchMode(LangMode::ZhEn))
        .await
        .unwrap();

    assert_eq!(pipeline.next_status().await, "Already in zh-en mode");
    assert!(pipeline.state.last_result.read().await.is_some());
    assert_eq!(*pipeline.state.mode.read().await, LangMode::ZhEn);
}

#[tokio::test(start_paused = true)]
async fn input_errors_reach_the_display() {
    let pipeline = start();

    pipeline
        .ui_tx
        .send(AppEvent::StatusUpdate("unknown command: /dance".to_string()))
        .await
        .unwrap();

    assert_eq!(pipeline.next_status().await, "unknown command: /dance");
}

#[tokio::test(start_paused = true)]
async fn quit_ends_event_loop() {
    let pipeline = start();

    pipeline.ui_tx.send(AppEvent::Quit).await.unwrap();

    let result = timeout(Duration::from_secs(2), pipeline.event_loop)
        .await
        .expect("event loop did not stop");
    assert!(result.unwrap().is_ok());
}
