use std::time::Duration;

pub mod youdao;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text, picking the direction from the text itself.
    ///
    /// Blank input yields an empty translation without touching the network.
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

impl Translation {
    /// Result for blank input
    pub fn empty(provider: &str) -> Self {
        Self {
            text: String::new(),
            from: "auto".to_string(),
            to: "auto".to_string(),
            provider: provider.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TranslateError::Timeout
        } else if e.is_decode() {
            TranslateError::ParseError(e.to_string())
        } else {
            TranslateError::NetworkError(e)
        }
    }
}

/// Translate and collapse every failure into an empty string.
///
/// The failure kind is only visible in the logs.
pub async fn translate_or_empty(translator: &dyn Translator, text: &str) -> String {
    match translator.translate(text).await {
        Ok(translation) => translation.text,
        Err(e) => {
            tracing::warn!(provider = %translator.metadata().name, "Translation failed: {e}");
            String::new()
        }
    }
}

/// Join translated fragments with single spaces, dropping trailing whitespace
pub fn join_segments<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for segment in segments {
        out.push_str(segment.as_ref());
        out.push(' ');
    }
    out.trim_end().to_string()
}

/// HTTP client with a hard per-request timeout
pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}
