use std::fmt;
use std::sync::Arc;

use ohsub_dictionary::Dictionary;
use ohsub_translator::Translator;
use ohsub_types::LangMode;

/// Providers live for one language mode.
///
/// Swapped whole on a mode change; lookups already dispatched keep the
/// selection they started with.
#[derive(Clone)]
pub struct ServiceSelection {
    pub mode: LangMode,
    pub translator: Arc<dyn Translator>,
    pub dictionary: Option<Arc<dyn Dictionary>>,
}

impl ServiceSelection {
    pub fn new(mode: LangMode, translator: Arc<dyn Translator>) -> Self {
        Self {
            mode,
            translator,
            dictionary: None,
        }
    }

    pub fn with_dictionary(mut self, dictionary: Arc<dyn Dictionary>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }
}

impl fmt::Debug for ServiceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceSelection")
            .field("mode", &self.mode)
            .field("translator", &self.translator.metadata().name)
            .field(
                "dictionary",
                &self.dictionary.as_ref().map(|d| d.metadata().name),
            )
            .finish()
    }
}
