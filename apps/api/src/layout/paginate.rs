//! Pagination — a layout cursor threaded through every line emission.
//!
//! `LayoutState` is a plain `Copy` value: each placement consumes the old state and
//! returns the next one together with the positioned line. No drawing context is
//! mutated, so a whole report layout is a pure fold over its lines.

use serde::{Deserialize, Serialize};

use crate::layout::page::{PageGeometry, ReportFont};

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// One line of text fixed to a page position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    /// Zero-based page index.
    pub page: usize,
    pub x: f32,
    /// Baseline height above the bottom page edge.
    pub y: f32,
    pub font: ReportFont,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

/// Complete layout of a report, page by page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportLayout {
    pub pages: Vec<PageLayout>,
}

impl ReportLayout {
    /// Groups placed lines by page. Lines must arrive in emission order.
    pub fn from_lines(lines: Vec<PlacedLine>) -> Self {
        let mut pages: Vec<PageLayout> = Vec::new();
        for line in lines {
            while pages.len() <= line.page {
                pages.push(PageLayout::default());
            }
            pages[line.page].lines.push(line);
        }
        if pages.is_empty() {
            pages.push(PageLayout::default());
        }
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[cfg(test)]
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout state
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    pub cursor_y: f32,
    pub page: usize,
    pub font: ReportFont,
}

impl LayoutState {
    /// Cursor at the top margin of the first page, body font selected.
    pub fn start(geometry: &PageGeometry) -> Self {
        Self {
            cursor_y: geometry.top(),
            page: 0,
            font: ReportFont::Body,
        }
    }

    pub fn with_font(self, font: ReportFont) -> Self {
        Self { font, ..self }
    }

    /// Moves the cursor down without emitting anything.
    pub fn skip(self, amount: f32) -> Self {
        Self {
            cursor_y: self.cursor_y - amount,
            ..self
        }
    }

    /// Places `text` at the cursor, then moves the cursor down by `advance`.
    ///
    /// If the cursor has already dropped below the bottom limit, the line goes to the
    /// top of a fresh page instead. The selected font carries over to the new page.
    pub fn place(
        self,
        geometry: &PageGeometry,
        indent: f32,
        text: impl Into<String>,
        advance: f32,
    ) -> (Self, PlacedLine) {
        let state = self.break_if_exhausted(geometry);
        let line = PlacedLine {
            page: state.page,
            x: geometry.margin_left_pt + indent,
            y: state.cursor_y,
            font: state.font,
            text: text.into(),
        };
        (state.skip(advance), line)
    }

    fn break_if_exhausted(self, geometry: &PageGeometry) -> Self {
        if self.cursor_y < geometry.bottom_limit_pt {
            Self {
                cursor_y: geometry.top(),
                page: self.page + 1,
                font: self.font,
            }
        } else {
            self
        }
    }
}
