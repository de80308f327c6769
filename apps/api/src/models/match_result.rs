use serde::{Deserialize, Serialize};

/// Per-category percentages, each rounded independently from its sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub extras: u32,
}

impl ScoreBreakdown {
    /// Categories in report order, with their display labels.
    pub fn labelled(&self) -> [(&'static str, u32); 4] {
        [
            ("Skills", self.skills),
            ("Experience", self.experience),
            ("Education", self.education),
            ("Extras", self.extras),
        ]
    }
}

/// Outcome of comparing one resume with one job description.
///
/// `score` is rounded after weighting, so it need not equal a weighted sum of the
/// already-rounded breakdown values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_result_json_keys() {
        let result = MatchResult {
            score: 67,
            breakdown: ScoreBreakdown {
                skills: 58,
                experience: 60,
                education: 100,
                extras: 100,
            },
            suggestions: vec!["Add a summary".to_string()],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "score": 67,
                "breakdown": {"skills": 58, "experience": 60, "education": 100, "extras": 100},
                "suggestions": ["Add a summary"]
            })
        );
    }

    #[test]
    fn test_labelled_order_is_fixed() {
        let b = ScoreBreakdown {
            skills: 1,
            experience: 2,
            education: 3,
            extras: 4,
        };
        let labels: Vec<&str> = b.labelled().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Skills", "Experience", "Education", "Extras"]);
    }
}
