use std::sync::Arc;

use crate::config::Config;
use crate::layout::PageGeometry;
use crate::mail::ReportMailer;
use crate::matching::MatchScorer;
use crate::render::ReportStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: LexicalMatchScorer with the stock weights.
    pub scorer: Arc<dyn MatchScorer>,
    /// Page geometry for rendered reports (A4, 2cm margins).
    pub page: PageGeometry,
    pub reports: ReportStore,
    /// `None` when SMTP credentials are not configured.
    pub mailer: Option<ReportMailer>,
}
