use ohsub_dictionary::query_or_empty;
use ohsub_translator::translate_or_empty;
use ohsub_types::ResultSource;

use crate::classify::is_single_english_word;
use crate::service::ServiceSelection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    /// Text to display; empty when nothing came back
    pub text: String,
    pub source: ResultSource,
}

/// Resolve one input snapshot into the string to display.
///
/// Blank input short-circuits. Single English words go to the dictionary
/// when one is configured; anything else, or an empty definition, goes to
/// the translator with the original text.
pub async fn lookup(text: &str, services: &ServiceSelection) -> LookupOutcome {
    if text.trim().is_empty() {
        return LookupOutcome {
            text: String::new(),
            source: ResultSource::Empty,
        };
    }

    if let Some(dictionary) = &services.dictionary
        && is_single_english_word(text)
    {
        let definition = query_or_empty(dictionary.as_ref(), text.trim()).await;
        if !definition.is_empty() {
            return LookupOutcome {
                text: definition,
                source: ResultSource::Dictionary,
            };
        }
        tracing::debug!("No definition for '{}', translating instead", text.trim());
    }

    LookupOutcome {
        text: translate_or_empty(services.translator.as_ref(), text).await,
        source: ResultSource::Translation,
    }
}
