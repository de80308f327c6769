//! Suggestion rules — short, human-readable hints derived from the scoring signals.
//!
//! Rules run in a fixed order and each contributes at most one entry:
//! missing keywords, experience gap, professional summary, length. If none fires,
//! a single encouragement message is returned instead.

use crate::matching::scorer::MatchSignals;
use crate::matching::weights::ScoringConfig;

pub const SUMMARY_SUGGESTION: &str = "Add a 2–3 line Professional Summary at the top.";
pub const LENGTH_SUGGESTION: &str = "Keep CV to ~1–2 pages; tighten bullets.";
pub const FALLBACK_SUGGESTION: &str = "Looks good—tailor bullets with measurable impact.";

/// Builds the ordered suggestion list for one scoring run.
pub fn suggest(signals: &MatchSignals, resume_text: &str, config: &ScoringConfig) -> Vec<String> {
    let mut suggestions = Vec::new();

    let missing: Vec<&str> = signals
        .missing_keywords()
        .take(config.max_missing_keywords)
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        suggestions.push(format!("Add missing keywords: {}", missing.join(", ")));
    }

    if signals.cv_years < signals.jd_years {
        suggestions.push(format!(
            "Clearly highlight experience: JD asks ~{} yrs, CV shows {}.",
            signals.jd_years, signals.cv_years
        ));
    }

    if !resume_text.to_lowercase().contains("summary") {
        suggestions.push(SUMMARY_SUGGESTION.to_string());
    }

    if resume_text.split_whitespace().count() > config.max_resume_words {
        suggestions.push(LENGTH_SUGGESTION.to_string());
    }

    if suggestions.is_empty() {
        suggestions.push(FALLBACK_SUGGESTION.to_string());
    }

    suggestions
}
