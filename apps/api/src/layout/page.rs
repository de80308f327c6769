//! Page geometry and the fixed font set used by the match report.
//!
//! All distances are PDF points (1/72 inch). The origin is the bottom-left corner of
//! the page, so the layout cursor moves *down* by decreasing `y`.

use serde::{Deserialize, Serialize};

pub const POINTS_PER_CM: f32 = 72.0 / 2.54;

/// Converts centimetres to points.
pub fn cm(value: f32) -> f32 {
    value * POINTS_PER_CM
}

// ────────────────────────────────────────────────────────────────────────────
// Fonts
// ────────────────────────────────────────────────────────────────────────────

/// The three text styles the report uses. All map onto the standard 14 PDF fonts,
/// so nothing needs embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportFont {
    /// Document title — Helvetica-Bold 18pt.
    Title,
    /// Section headings and the overall score — Helvetica-Bold 12pt.
    Heading,
    /// Everything else — Helvetica 11pt.
    Body,
}

impl ReportFont {
    pub fn base_font(&self) -> &'static str {
        match self {
            ReportFont::Title | ReportFont::Heading => "Helvetica-Bold",
            ReportFont::Body => "Helvetica",
        }
    }

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            ReportFont::Title | ReportFont::Heading => "F2",
            ReportFont::Body => "F1",
        }
    }

    pub fn size_pt(&self) -> f32 {
        match self {
            ReportFont::Title => 18.0,
            ReportFont::Heading => 12.0,
            ReportFont::Body => 11.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

/// Layout parameters for every page of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_left_pt: f32,
    pub margin_top_pt: f32,
    /// A line may not be placed below this height; the cursor moves to a new page instead.
    pub bottom_limit_pt: f32,
    /// Horizontal offset of list items (breakdown rows, suggestions).
    pub indent_pt: f32,
    /// Maximum characters per wrapped suggestion line.
    pub wrap_columns: usize,
}

impl PageGeometry {
    /// Baseline of the first line on a fresh page.
    pub fn top(&self) -> f32 {
        self.height_pt - self.margin_top_pt
    }
}

/// A4 portrait, 2cm margins, 90-column suggestion wrapping.
pub fn a4_report_geometry() -> PageGeometry {
    PageGeometry {
        width_pt: 595.2756,
        height_pt: 841.8898,
        margin_left_pt: cm(2.0),
        margin_top_pt: cm(2.0),
        bottom_limit_pt: cm(2.0),
        indent_pt: cm(0.5),
        wrap_columns: 90,
    }
}
