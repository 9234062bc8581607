//! Counting fakes for the provider traits

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use ohsub_dictionary::{Dictionary, DictionaryMetadata, LookupError};
use ohsub_translator::{ProviderMetadata, TranslateError, Translation, Translator};

/// Replies `"{prefix}{text}"`, optionally after a per-input delay
pub struct FakeTranslator {
    prefix: String,
    delays: HashMap<String, Duration>,
    fail: bool,
    inputs: Mutex<Vec<String>>,
}

impl FakeTranslator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            delays: HashMap::new(),
            fail: false,
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new("")
        }
    }

    pub fn with_delay(mut self, input: &str, delay: Duration) -> Self {
        self.delays.insert(input.to_string(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError> {
        self.inputs.lock().unwrap().push(text.to_string());

        if let Some(delay) = self.delays.get(text) {
            tokio::time::sleep(*delay).await;
        }

        if self.fail {
            return Err(TranslateError::Timeout);
        }

        Ok(Translation {
            text: format!("{}{}", self.prefix, text),
            from: "auto".to_string(),
            to: "zh".to_string(),
            provider: "fake".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            requires_api_key: false,
        }
    }
}

pub struct FakeDictionary {
    entries: HashMap<String, String>,
    queries: Mutex<Vec<String>>,
}

impl FakeDictionary {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Dictionary for FakeDictionary {
    async fn query(&self, word: &str) -> Result<Option<String>, LookupError> {
        self.queries.lock().unwrap().push(word.to_string());
        Ok(self.entries.get(word).cloned())
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "fake".to_string(),
            language: "en".to_string(),
        }
    }
}
