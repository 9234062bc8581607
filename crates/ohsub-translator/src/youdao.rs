//! Wire client for the Youdao web translation endpoint.
//!
//! Request: `GET {url}?doctype=json&type={FROM}2{TO}&i={text}`.
//! Response: `{"errorCode":0,"translateResult":[[{"src":"..","tgt":".."}]]}`.

use serde::Deserialize;

use crate::{TranslateError, join_segments};

#[derive(Clone)]
pub struct YoudaoClient {
    client: reqwest::Client,
    url: String,
}

impl YoudaoClient {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    /// Translate `text` from `from` to `to` (ISO 639-1 codes)
    pub async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let kind = format!("{}2{}", type_code(from), type_code(to));

        let response = self
            .client
            .get(&self.url)
            .query(&[("doctype", "json"), ("type", kind.as_str()), ("i", text)])
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
        parse_response(&body)
    }
}

fn type_code(lang: &str) -> String {
    match lang {
        "zh" => "ZH_CN".to_string(),
        other => other.to_uppercase(),
    }
}

#[derive(Deserialize)]
struct YoudaoResponse {
    #[serde(rename = "errorCode", default)]
    error_code: i64,
    #[serde(rename = "translateResult", default)]
    translate_result: Vec<Vec<YoudaoSegment>>,
}

#[derive(Deserialize)]
struct YoudaoSegment {
    #[serde(default)]
    tgt: Option<String>,
}

/// Extract the translated text from a Youdao response body
pub fn parse_response(body: &str) -> Result<String, TranslateError> {
    let response: YoudaoResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::ParseError(format!("Failed to parse response: {e}")))?;

    if response.error_code != 0 {
        return Err(TranslateError::ApiError(format!(
            "errorCode {}",
            response.error_code
        )));
    }

    Ok(join_segments(
        response
            .translate_result
            .into_iter()
            .flatten()
            .filter_map(|segment| segment.tgt),
    ))
}
