use async_trait::async_trait;
use ohsub_translator::youdao::YoudaoClient;
use ohsub_translator::{ProviderMetadata, TranslateError, Translation, Translator};

use crate::target_language;

const PROVIDER: &str = "youdao";

/// Chinese <-> English through the Youdao web endpoint
#[derive(Clone)]
pub struct YoudaoEnglishTranslator {
    client: YoudaoClient,
}

impl YoudaoEnglishTranslator {
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client: YoudaoClient::new(client, api_url),
        }
    }
}

#[async_trait]
impl Translator for YoudaoEnglishTranslator {
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError> {
        if text.trim().is_empty() {
            return Ok(Translation::empty(PROVIDER));
        }

        let text = text.trim_end();
        let to = target_language(text);
        let from = if to == "en" { "zh" } else { "en" };

        let translated = self.client.translate(text, from, to).await?;

        Ok(Translation {
            text: translated,
            from: from.to_string(),
            to: to.to_string(),
            provider: PROVIDER.to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Youdao".to_string(),
            requires_api_key: false,
        }
    }
}
