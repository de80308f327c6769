//! Match Scorer — pluggable, trait-based scorer comparing a resume with a job description.
//!
//! Default: `LexicalMatchScorer` (token overlap plus three keyword heuristics, fully deterministic).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, so an alternative weight vector or a
//! different backend can be swapped in at startup without touching the handlers.

use tracing::debug;

use crate::matching::features::{extract_years, has_education_signal, has_tech_signal};
use crate::matching::suggestions::suggest;
use crate::matching::tokenizer::{tokenize, TokenSet};
use crate::matching::weights::{ScoreWeights, ScoringConfig};
use crate::models::match_result::{MatchResult, ScoreBreakdown};

// ────────────────────────────────────────────────────────────────────────────
// Intermediate values
// ────────────────────────────────────────────────────────────────────────────

/// Lexical signals read from both documents. Shared by scoring and suggestion rules.
#[derive(Debug, Clone)]
pub struct MatchSignals {
    pub cv_tokens: TokenSet,
    pub jd_tokens: TokenSet,
    pub cv_years: u32,
    pub jd_years: u32,
}

impl MatchSignals {
    pub fn extract(resume_text: &str, job_text: &str) -> Self {
        Self {
            cv_tokens: tokenize(resume_text),
            jd_tokens: tokenize(job_text),
            cv_years: extract_years(resume_text),
            jd_years: extract_years(job_text),
        }
    }

    /// JD tokens that the resume never mentions, in set order.
    pub fn missing_keywords(&self) -> impl Iterator<Item = &String> {
        self.jd_tokens.difference(&self.cv_tokens)
    }
}

/// The four sub-scores, each in [0.0, 1.0], before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub extras: f64,
}

impl SubScores {
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            skills: to_percent(self.skills),
            experience: to_percent(self.experience),
            education: to_percent(self.education),
            extras: to_percent(self.extras),
        }
    }

    /// Weighted sum, rounded once at the end.
    pub fn weighted_percent(&self, weights: &ScoreWeights) -> u32 {
        to_percent(
            self.skills * weights.skills
                + self.experience * weights.experience
                + self.education * weights.education
                + self.extras * weights.extras,
        )
    }
}

/// Converts a fraction to a whole percentage, rounding half away from zero.
pub fn to_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implementations must be pure: same texts, same result.
pub trait MatchScorer: Send + Sync {
    fn score(&self, resume_text: &str, job_text: &str) -> MatchResult;
}

// ────────────────────────────────────────────────────────────────────────────
// LexicalMatchScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Token-overlap scorer.
///
/// Algorithm:
/// 1. skills = sqrt(|cv ∩ jd| / max(1, |jd|))  (square root favours partial overlap)
/// 2. experience = 1.0 if the JD names no years, else min(1, cv_years / jd_years)
/// 3. education = 1.0 if both sides mention a degree, else partial credit
/// 4. extras = 1.0 if both sides mention any tech-vocabulary term, else partial credit
/// 5. score = round(100 × Σ weight × sub-score)
#[derive(Debug, Clone, Default)]
pub struct LexicalMatchScorer {
    config: ScoringConfig,
}

impl LexicalMatchScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn sub_scores(&self, signals: &MatchSignals, resume_text: &str, job_text: &str) -> SubScores {
        let overlap = signals.cv_tokens.intersection(&signals.jd_tokens).count();
        let raw = overlap as f64 / signals.jd_tokens.len().max(1) as f64;
        let skills = raw.sqrt();

        let experience = if signals.jd_years == 0 {
            1.0
        } else {
            (signals.cv_years as f64 / signals.jd_years.max(1) as f64).min(1.0)
        };

        let education = if has_education_signal(resume_text) && has_education_signal(job_text) {
            1.0
        } else {
            self.config.education_partial_credit
        };

        let vocabulary = &self.config.tech_vocabulary;
        let extras = if has_tech_signal(resume_text, vocabulary)
            && has_tech_signal(job_text, vocabulary)
        {
            1.0
        } else {
            self.config.extras_partial_credit
        };

        SubScores {
            skills,
            experience,
            education,
            extras,
        }
    }
}

impl MatchScorer for LexicalMatchScorer {
    fn score(&self, resume_text: &str, job_text: &str) -> MatchResult {
        let signals = MatchSignals::extract(resume_text, job_text);
        let sub = self.sub_scores(&signals, resume_text, job_text);
        let score = sub.weighted_percent(&self.config.weights);

        debug!(
            score,
            skills = sub.skills,
            experience = sub.experience,
            education = sub.education,
            extras = sub.extras,
            cv_tokens = signals.cv_tokens.len(),
            jd_tokens = signals.jd_tokens.len(),
            "Scored resume against job description"
        );

        let mut suggestions = suggest(&signals, resume_text, &self.config);
        suggestions.truncate(self.config.max_suggestions);

        MatchResult {
            score,
            breakdown: sub.breakdown(),
            suggestions,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
