//! Report composition — lays a `ReportSpec` out line by line and encodes it as PDF.
//!
//! # Layout
//! Title, report id, generation time, overall score, the four breakdown rows, then the
//! suggestions (first ten, word-wrapped at the page's column limit). Pagination is
//! handled by threading a `LayoutState` through every emitted line.

use chrono::SecondsFormat;

use crate::errors::ReportError;
use crate::layout::{cm, wrap_words, LayoutState, PageGeometry, PlacedLine, ReportFont, ReportLayout};
use crate::models::report::ReportSpec;
use crate::render::pdf::{encode_pdf, DocumentInfo};

pub const REPORT_TITLE: &str = "CV / JD Match Report";
pub const MAX_REPORT_SUGGESTIONS: usize = 10;

/// A rendered report: the page layout plus its encoded PDF bytes.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub layout: ReportLayout,
    pub bytes: Vec<u8>,
}

impl RenderedReport {
    pub fn page_count(&self) -> usize {
        self.layout.page_count()
    }
}

/// Renders the report for `spec`. Output depends only on `spec` and `geometry`.
pub fn render(spec: &ReportSpec, geometry: &PageGeometry) -> Result<RenderedReport, ReportError> {
    let layout = layout_report(spec, geometry)?;
    let info = DocumentInfo {
        title: format!("{REPORT_TITLE} {}", spec.report_id),
        created_at: spec.generated_at,
    };
    let bytes = encode_pdf(&layout.pages, geometry, &info)?;
    Ok(RenderedReport { layout, bytes })
}

/// Positions every line of the report without encoding it.
pub fn layout_report(spec: &ReportSpec, g: &PageGeometry) -> Result<ReportLayout, ReportError> {
    if spec.report_id.trim().is_empty() {
        return Err(ReportError::InvalidSpec("report_id is empty".to_string()));
    }

    let result = &spec.match_result;
    let mut lines: Vec<PlacedLine> = Vec::new();
    let mut emit = |state: LayoutState, indent: f32, text: String, advance: f32| {
        let (next, line) = state.place(g, indent, text, advance);
        lines.push(line);
        next
    };

    // Header
    let state = LayoutState::start(g).with_font(ReportFont::Title);
    let state = emit(state, 0.0, REPORT_TITLE.to_string(), cm(1.0));
    let state = state.with_font(ReportFont::Body);
    let state = emit(state, 0.0, format!("Report ID: {}", spec.report_id), cm(0.6));
    let generated = spec
        .generated_at
        .to_rfc3339_opts(SecondsFormat::Secs, true);
    let state = emit(state, 0.0, format!("Generated: {generated}"), cm(1.0));

    // Score
    let state = state.with_font(ReportFont::Heading);
    let state = emit(state, 0.0, format!("Overall Score: {}%", result.score), cm(0.8));
    let mut state = emit(state, 0.0, "Breakdown:".to_string(), cm(0.6));
    state = state.with_font(ReportFont::Body);
    for (label, value) in result.breakdown.labelled() {
        state = emit(state, g.indent_pt, format!("- {label}: {value}%"), cm(0.5));
    }

    // Suggestions
    state = state.skip(cm(0.5)).with_font(ReportFont::Heading);
    state = emit(state, 0.0, "Top Suggestions:".to_string(), cm(0.6));
    state = state.with_font(ReportFont::Body);
    if result.suggestions.is_empty() {
        emit(state, g.indent_pt, "- None".to_string(), cm(0.5));
    } else {
        for suggestion in result.suggestions.iter().take(MAX_REPORT_SUGGESTIONS) {
            for line in wrap_words(suggestion, g.wrap_columns) {
                state = emit(state, g.indent_pt, format!("- {line}"), cm(0.5));
            }
        }
    }

    Ok(ReportLayout::from_lines(lines))
}
