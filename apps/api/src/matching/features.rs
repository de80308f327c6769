//! Feature extractors — cheap lexical signals read straight off the raw document text.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_YEARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\+?\s*(?:years|yrs)").unwrap());

const EDUCATION_MARKERS: [&str; 3] = ["bachelor", "master", "phd"];

/// Returns the largest "N years" / "N+ yrs" figure mentioned in the text, or 0.
///
/// Only ASCII digits count; other scripts' numerals never match. Digit runs too large
/// for a `u32` are skipped rather than saturated.
pub fn extract_years(text: &str) -> u32 {
    let lowered = text.to_lowercase();
    RE_YEARS
        .captures_iter(&lowered)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

/// True if the text mentions a degree. Plain substring match, so "masterclass" counts.
pub fn has_education_signal(text: &str) -> bool {
    let lowered = text.to_lowercase();
    EDUCATION_MARKERS.iter().any(|m| lowered.contains(m))
}

/// True if any vocabulary term occurs in the text (case-insensitive substring).
pub fn has_tech_signal<S: AsRef<str>>(text: &str, vocabulary: &[S]) -> bool {
    let lowered = text.to_lowercase();
    vocabulary
        .iter()
        .any(|term| lowered.contains(&term.as_ref().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::weights::DEFAULT_TECH_VOCABULARY;

    #[test]
    fn test_years_none_is_zero() {
        assert_eq!(extract_years(""), 0);
        assert_eq!(extract_years("Seasoned engineer, many years of experience"), 0);
    }

    #[test]
    fn test_years_takes_maximum() {
        let text = "3 years of Rust, 7+ years of C, 2yrs of Go";
        assert_eq!(extract_years(text), 7);
    }

    #[test]
    fn test_years_accepts_plus_and_abbreviation() {
        assert_eq!(extract_years("5+ YEARS required"), 5);
        assert_eq!(extract_years("at least 4 yrs"), 4);
        assert_eq!(extract_years("10years"), 10);
    }

    #[test]
    fn test_years_ignores_numbers_without_unit() {
        assert_eq!(extract_years("Team of 40 engineers, 2 products"), 0);
    }

    #[test]
    fn test_years_skips_overflowing_digits() {
        let text = "99999999999999999999 years of nonsense, 6 years real";
        assert_eq!(extract_years(text), 6);
    }

    #[test]
    fn test_years_ignores_non_ascii_numerals() {
        // Arabic-Indic three, then a full-width five
        assert_eq!(extract_years("\u{0663} years"), 0);
        assert_eq!(extract_years("\u{FF15} yrs, 2 years"), 2);
    }

    #[test]
    fn test_education_signal_substring_match() {
        assert!(has_education_signal("Bachelor of Science"));
        assert!(has_education_signal("PhD candidate"));
        assert!(has_education_signal("Attended a masterclass"));
        assert!(!has_education_signal("Self-taught developer"));
    }

    #[test]
    fn test_tech_signal_case_insensitive() {
        assert!(has_tech_signal("Built apps in React", &DEFAULT_TECH_VOCABULARY));
        assert!(has_tech_signal("deployed on AWS", &DEFAULT_TECH_VOCABULARY));
        assert!(!has_tech_signal("COBOL mainframes", &DEFAULT_TECH_VOCABULARY));
    }

    #[test]
    fn test_tech_signal_is_substring_not_word() {
        // "nodejs" contains "node"
        assert!(has_tech_signal("nodejs", &DEFAULT_TECH_VOCABULARY));
    }

    #[test]
    fn test_tech_signal_empty_vocabulary() {
        let empty: [&str; 0] = [];
        assert!(!has_tech_signal("react", &empty));
    }
}
