use serde::{Deserialize, Serialize};

fn default_english_provider() -> EnglishProvider {
    EnglishProvider::Youdao
}

fn default_google_url() -> String {
    "http://translate.google.com/translate_a/single".to_string()
}

fn default_youdao_url() -> String {
    "https://fanyi.youdao.com/translate".to_string()
}

fn default_timeout_ms() -> u64 {
    8000
}

/// Which upstream serves sentence translation in zh-en mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnglishProvider {
    Google,
    Youdao,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_english_provider")]
    pub english_provider: EnglishProvider,
    #[serde(default = "default_google_url")]
    pub google_url: String,
    #[serde(default = "default_youdao_url")]
    pub youdao_url: String,
    /// Upper bound for a single upstream request
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            english_provider: default_english_provider(),
            google_url: default_google_url(),
            youdao_url: default_youdao_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
