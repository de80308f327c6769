//! Scoring configuration: weights, partial-credit defaults, thresholds and the tech vocabulary.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TECH_VOCABULARY: [&str; 10] = [
    "react",
    "node",
    "aws",
    "docker",
    "typescript",
    "graphql",
    "vite",
    "redux",
    "jest",
    "cypress",
];

/// Relative weight of each sub-score in the final percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub extras: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skills: 0.55,
            experience: 0.25,
            education: 0.10,
            extras: 0.10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    /// Education sub-score when either side lacks a degree mention.
    pub education_partial_credit: f64,
    /// Extras sub-score when either side lacks a tech-vocabulary term.
    pub extras_partial_credit: f64,
    pub tech_vocabulary: Vec<String>,
    /// Resumes with more whitespace-delimited words than this get a length suggestion.
    pub max_resume_words: usize,
    pub max_missing_keywords: usize,
    pub max_suggestions: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            education_partial_credit: 0.6,
            extras_partial_credit: 0.5,
            tech_vocabulary: DEFAULT_TECH_VOCABULARY
                .iter()
                .map(|t| t.to_string())
                .collect(),
            max_resume_words: 900,
            max_missing_keywords: 10,
            max_suggestions: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoreWeights::default();
        let sum = w.skills + w.experience + w.education + w.extras;
        assert!((sum - 1.0).abs() < 1e-9, "Sum was {sum}");
    }

    #[test]
    fn test_default_config_values() {
        let cfg = ScoringConfig::default();
        assert_eq!(cfg.tech_vocabulary.len(), 10);
        assert_eq!(cfg.max_resume_words, 900);
        assert_eq!(cfg.max_suggestions, 10);
        assert!((cfg.education_partial_credit - 0.6).abs() < f64::EPSILON);
        assert!((cfg.extras_partial_credit - 0.5).abs() < f64::EPSILON);
    }
}
