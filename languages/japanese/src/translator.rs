use async_trait::async_trait;
use ohsub_core::classify::contains_kana;
use ohsub_translator::youdao::YoudaoClient;
use ohsub_translator::{ProviderMetadata, TranslateError, Translation, Translator};

const PROVIDER: &str = "youdao";

/// Chinese <-> Japanese through the Youdao web endpoint
#[derive(Clone)]
pub struct JapaneseTranslator {
    client: YoudaoClient,
}

impl JapaneseTranslator {
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client: YoudaoClient::new(client, api_url),
        }
    }
}

/// Kana means Japanese source; kanji-only or latin text is treated as Chinese
pub fn direction(text: &str) -> (&'static str, &'static str) {
    if contains_kana(text) {
        ("ja", "zh")
    } else {
        ("zh", "ja")
    }
}

#[async_trait]
impl Translator for JapaneseTranslator {
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError> {
        if text.trim().is_empty() {
            return Ok(Translation::empty(PROVIDER));
        }

        let text = text.trim_end();
        let (from, to) = direction(text);
        tracing::debug!("Youdao {from} -> {to}");

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
            name: "Youdao (Japanese)".to_string(),
            requires_api_key: false,
        }
    }
}
