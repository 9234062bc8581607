/// Remote word lookup
#[async_trait::async_trait]
pub trait Dictionary: Send + Sync {
    /// Look up a single word.
    ///
    /// The caller is expected to pass a single word; it is not re-validated.
    /// `Ok(None)` means the dictionary has no entry.
    async fn query(&self, word: &str) -> Result<Option<String>, LookupError>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    NetworkError(reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LookupError::Timeout
        } else if e.is_decode() {
            LookupError::ParseError(e.to_string())
        } else {
            LookupError::NetworkError(e)
        }
    }
}

/// Query and collapse not-found and every failure into an empty string
pub async fn query_or_empty(dictionary: &dyn Dictionary, word: &str) -> String {
    match dictionary.query(word).await {
        Ok(Some(definition)) => definition,
        Ok(None) => {
            tracing::debug!("No dictionary entry for '{word}'");
            String::new()
        }
        Err(e) => {
            tracing::warn!(dictionary = %dictionary.metadata().name, "Dictionary lookup failed: {e}");
            String::new()
        }
    }
}
