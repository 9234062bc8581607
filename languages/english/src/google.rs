use async_trait::async_trait;
use ohsub_translator::{
    ProviderMetadata, TranslateError, Translation, Translator, join_segments,
};
use serde::Deserialize;

use crate::target_language;

const PROVIDER: &str = "google";

/// Google `translate_a/single` endpoint (gtx client, no key)
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError> {
        if text.trim().is_empty() {
            return Ok(Translation::empty(PROVIDER));
        }

        let text = text.trim_end();
        let to = target_language(text);
        tracing::debug!("Google auto -> {to}");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("dj", "1"),
                ("ie", "UTF-8"),
                ("sl", "auto"),
                ("tl", to),
                ("q", text),
            ])
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;

        Ok(Translation {
            text: parse_response(&body)?,
            from: "auto".to_string(),
            to: to.to_string(),
            provider: PROVIDER.to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google".to_string(),
            requires_api_key: false,
        }
    }
}

#[derive(Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    sentences: Vec<GoogleSentence>,
}

#[derive(Deserialize)]
struct GoogleSentence {
    #[serde(default)]
    trans: Option<String>,
}

/// Concatenate `sentences[*].trans`; transliteration-only segments are skipped
pub fn parse_response(body: &str) -> Result<String, TranslateError> {
    let response: GoogleResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::ParseError(format!("Failed to parse response: {e}")))?;

    Ok(join_segments(
        response.sentences.into_iter().filter_map(|s| s.trans),
    ))
}
