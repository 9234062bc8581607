//! Youdao suggest API used as an English-Chinese word dictionary.
//!
//! `GET {url}?num=1&doctype=json&q={word}` returns
//! `{"result":{"code":200},"data":{"entries":[{"entry":"hello","explain":"int. 喂；哈罗"}]}}`.

use async_trait::async_trait;
use ohsub_dictionary::{Dictionary, DictionaryMetadata, LookupError};
use serde::Deserialize;

#[derive(Clone)]
pub struct YoudaoEnglishDictionary {
    client: reqwest::Client,
    api_url: String,
}

impl YoudaoEnglishDictionary {
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl Dictionary for YoudaoEnglishDictionary {
    async fn query(&self, word: &str) -> Result<Option<String>, LookupError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("num", "1"), ("doctype", "json"), ("q", word)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::ApiError(format!("HTTP {}", response.status())));
        }

        let body = response.text().await?;
        let definition = parse_response(&body, word)?;
        tracing::debug!("Suggest lookup for '{}': found={}", word, definition.is_some());
        Ok(definition)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Youdao".to_string(),
            language: "en".to_string(),
        }
    }
}

#[derive(Deserialize)]
struct SuggestResponse {
    result: SuggestStatus,
    #[serde(default)]
    data: SuggestData,
}

#[derive(Deserialize)]
struct SuggestStatus {
    code: i64,
    #[serde(default)]
    msg: String,
}

#[derive(Deserialize, Default)]
struct SuggestData {
    #[serde(default)]
    entries: Vec<SuggestEntry>,
}

#[derive(Deserialize)]
struct SuggestEntry {
    #[serde(default)]
    entry: String,
    #[serde(default)]
    explain: String,
}

/// Definition of `word`, ignoring suggestions for other words
pub fn parse_response(body: &str, word: &str) -> Result<Option<String>, LookupError> {
    let response: SuggestResponse = serde_json::from_str(body)
        .map_err(|e| LookupError::ParseError(format!("Failed to parse response: {e}")))?;

    match response.result.code {
        200 => {}
        404 => return Ok(None),
        code => {
            return Err(LookupError::ApiError(format!(
                "code {code}: {}",
                response.result.msg
            )));
        }
    }

    let word = word.trim();
    Ok(response
        .data
        .entries
        .into_iter()
        .find(|e| e.entry.eq_ignore_ascii_case(word) && !e.explain.trim().is_empty())
        .map(|e| e.explain))
}
