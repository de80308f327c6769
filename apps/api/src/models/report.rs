use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::match_result::MatchResult;

/// Everything the renderer needs for one report. The timestamp is supplied by the
/// caller so rendering never reads the clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSpec {
    pub report_id: String,
    pub generated_at: DateTime<Utc>,
    pub match_result: MatchResult,
}
