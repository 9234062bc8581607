pub mod dictionary;
pub mod google;
pub mod youdao;

#[cfg(test)]
mod test_server;

pub use dictionary::YoudaoEnglishDictionary;
pub use google::GoogleTranslator;
pub use youdao::YoudaoEnglishTranslator;

/// Target language for zh-en mode: English for Chinese text, Chinese otherwise
pub fn target_language(text: &str) -> &'static str {
    if ohsub_core::classify::contains_cjk(text) {
        "en"
    } else {
        "zh"
    }
}
