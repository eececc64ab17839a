use crate::core::counter::{count_vowels, is_vowel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn count_ignores_ascii_case(s in any::<String>()) {
        let count = count_vowels(&s);
        prop_assert_eq!(count, count_vowels(&s.to_ascii_lowercase()));
        prop_assert_eq!(count, count_vowels(&s.to_ascii_uppercase()));
    }

    #[test]
    fn count_never_exceeds_length(s in any::<String>()) {
        prop_assert!(count_vowels(&s) <= s.chars().count());
    }

    #[test]
    fn count_is_additive(left in any::<String>(), right in any::<String>()) {
        let joined = format!("{left}{right}");
        prop_assert_eq!(count_vowels(&joined), count_vowels(&left) + count_vowels(&right));
    }

    #[test]
    fn count_matches_vowel_filter(s in "[a-zA-Z0-9 ıİßéÀ]{0,64}") {
        let expected = s
            .chars()
            .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U'))
            .count();
        prop_assert_eq!(count_vowels(&s), expected);
    }

    #[test]
    fn non_ascii_chars_are_never_vowels(c in any::<char>().prop_filter("non-ASCII", |c| !c.is_ascii())) {
        prop_assert!(!is_vowel(c));
    }
}
