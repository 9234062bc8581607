pub mod translator;

pub use translator::JapaneseTranslator;
