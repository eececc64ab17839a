use crate::domain::model::VOWELS;

/// ASCII 大小寫不敏感的母音判斷
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Counts the characters of `text` that are one of a, e, i, o, u, ignoring
/// ASCII case.
///
/// Only the five ASCII vowels are recognized. Accented or non-Latin vowels
/// (`é`, `À`, `ı`, ...) are never counted, and no locale-aware case folding
/// is applied.
pub fn count_vowels(text: &str) -> usize {
    text.chars().filter(|&c| is_vowel(c)).count()
}
