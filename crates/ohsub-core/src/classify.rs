//! Script checks used to route input.
//!
//! A "single English word" is ASCII letters only, with `'` or `-` allowed
//! strictly between two letters (`don't`, `well-known`). Typographic
//! apostrophes are not accepted.

/// Whether `text` is a single English word eligible for dictionary lookup
pub fn is_single_english_word(text: &str) -> bool {
    let word = text.trim().as_bytes();
    if word.is_empty() {
        return false;
    }

    word.iter().enumerate().all(|(i, &b)| match b {
        b'\'' | b'-' => {
            let before = i.checked_sub(1).and_then(|p| word.get(p));
            let after = word.get(i + 1);
            matches!(before, Some(c) if c.is_ascii_alphabetic())
                && matches!(after, Some(c) if c.is_ascii_alphabetic())
        }
        _ => b.is_ascii_alphabetic(),
    })
}

/// Whether any character is a CJK ideograph
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

/// Whether any character is Japanese kana
pub fn contains_kana(text: &str) -> bool {
    text.chars().any(is_kana)
}

fn is_cjk(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF        // Unified Ideographs
        | 0x3400..=0x4DBF      // Extension A
        | 0x20000..=0x2EBEF    // Extensions B-F, I
        | 0x30000..=0x323AF    // Extensions G-H
        | 0xF900..=0xFAFF      // Compatibility Ideographs
        | 0x2F800..=0x2FA1F    // Compatibility Supplement
    )
}

fn is_kana(c: char) -> bool {
    matches!(c as u32,
        0x3040..=0x309F        // Hiragana
        | 0x30A0..=0x30FF      // Katakana
        | 0x31F0..=0x31FF      // Katakana Phonetic Extensions
        | 0xFF66..=0xFF9F      // Halfwidth Katakana
    )
}
