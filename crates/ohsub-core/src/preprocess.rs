use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Clean up captured text before it becomes an input snapshot
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        // Subtitle lines arrive wrapped; fold them into one line
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
