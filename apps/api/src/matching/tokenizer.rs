//! Tokenizer — turns raw document text into a canonical set of lowercase word tokens.
//!
//! A token is a letter followed by one or more letters, digits or any of `+ - # .`,
//! so `c++`, `node.js` and `c#` survive as single tokens. Single letters never do.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Distinct tokens of one document.
///
/// Ordered (sorted) so that anything enumerating the set, such as the missing-keyword
/// suggestion, is reproducible across runs.
pub type TokenSet = BTreeSet<String>;

static RE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z][a-z0-9+\-#.]+").unwrap());

/// Lower-cases `text` and collects every maximal token match.
pub fn tokenize(text: &str) -> TokenSet {
    let lowered = text.to_lowercase();
    RE_TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(items: &[&str]) -> TokenSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_lowercases_and_deduplicates() {
        let tokens = tokenize("Rust rust RUST Tokio");
        assert_eq!(tokens, set(&["rust", "tokio"]));
    }

    #[test]
    fn test_keeps_version_and_markup_characters() {
        let tokens = tokenize("Skilled in C++, C#, Node.js and ES-2015.");
        assert!(tokens.contains("c++"));
        assert!(tokens.contains("c#"));
        assert!(tokens.contains("node.js"));
        assert!(tokens.contains("es-2015."));
    }

    #[test]
    fn test_single_letters_and_numbers_are_not_tokens() {
        let tokens = tokenize("I am a 10x dev with 5 years");
        assert_eq!(tokens, set(&["am", "dev", "with", "years"]));
    }

    #[test]
    fn test_apostrophe_splits_token() {
        let tokens = tokenize("Master's degree");
        assert_eq!(tokens, set(&["master", "degree"]));
    }

    #[test]
    fn test_trailing_period_is_part_of_token() {
        // '.' is a token character, so sentence-final words keep it.
        let tokens = tokenize("Experience with Docker.");
        assert!(tokens.contains("docker."));
        assert!(!tokens.contains("docker"));
    }

    #[test]
    fn test_enumeration_is_sorted() {
        let tokens: Vec<String> = tokenize("zeta alpha mike").into_iter().collect();
        assert_eq!(tokens, vec!["alpha", "mike", "zeta"]);
    }

    proptest! {
        #[test]
        fn retokenizing_tokens_is_a_subset(text in "\\PC{0,200}") {
            let first = tokenize(&text);
            let joined = first.iter().cloned().collect::<Vec<_>>().join(" ");
            let second = tokenize(&joined);
            prop_assert!(second.is_subset(&first));
        }

        #[test]
        fn tokens_are_lowercase_and_multi_char(text in "[A-Za-z0-9+#. -]{0,120}") {
            for token in tokenize(&text) {
                prop_assert!(token.chars().count() >= 2);
                prop_assert_eq!(token.to_lowercase(), token.clone());
            }
        }
    }
}
