//! Text extraction — turns an uploaded resume into plain text for the matching engine.
//!
//! PDF goes through `pdf-extract`. DOCX is read straight from the OOXML package: the
//! `w:t` runs of `word/document.xml`, one line per paragraph. Anything the extractors
//! cannot read degrades to empty text, which the scorer treats as a valid (if poor) resume.

use std::io::{Cursor, Read};

use anyhow::Context;
use bytes::Bytes;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, warn};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Maps an upload's declared content type; anything else is unsupported.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type {
            PDF_CONTENT_TYPE => Some(DocumentKind::Pdf),
            DOCX_CONTENT_TYPE => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
        }
    }
}

/// Extracts plain text from the upload. Never fails; unreadable input yields "".
///
/// CPU-bound: call through `extract_text_blocking` from async code.
pub fn extract_text(data: &[u8], kind: DocumentKind) -> String {
    let extracted = match kind {
        DocumentKind::Pdf => extract_pdf(data),
        DocumentKind::Docx => extract_docx(data),
    };
    match extracted {
        Ok(text) => {
            debug!(kind = kind.label(), chars = text.len(), "Extracted resume text");
            text
        }
        Err(e) => {
            warn!(
                "{} text extraction failed, continuing with empty text: {e:#}",
                kind.label()
            );
            String::new()
        }
    }
}

/// Runs `extract_text` on the blocking pool. A panic inside the extractor also degrades to "".
pub async fn extract_text_blocking(data: Bytes, kind: DocumentKind) -> String {
    tokio::task::spawn_blocking(move || extract_text(&data, kind))
        .await
        .unwrap_or_else(|e| {
            warn!("Text extraction task aborted, continuing with empty text: {e}");
            String::new()
        })
}

fn extract_pdf(data: &[u8]) -> anyhow::Result<String> {
    Ok(pdf_extract::extract_text_from_mem(data)?)
}

fn extract_docx(data: &[u8]) -> anyhow::Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).context("not a DOCX package")?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .with_context(|| format!("missing {DOCX_BODY_PART}"))?
        .read_to_string(&mut xml)?;
    docx_paragraphs(&xml).map(|paragraphs| paragraphs.join("\n"))
}

/// Collects the text of each `w:p` paragraph in document order. Tabs and breaks inside a
/// paragraph become `\t` and `\n`.
fn docx_paragraphs(xml: &str) -> anyhow::Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => current.clear(),
                b"w:t" => in_run_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => current.push_str(&t.unescape()?),
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Minimal OOXML packages for tests: one `w:p` per paragraph, one run each.
#[cfg(test)]
pub(crate) fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;

    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file(DOCX_BODY_PART, zip::write::FileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::layout::a4_report_geometry;
    use crate::matching::{LexicalMatchScorer, MatchScorer};
    use crate::models::match_result::{MatchResult, ScoreBreakdown};
    use crate::models::report::ReportSpec;
    use crate::render::render;

    #[test]
    fn test_content_type_mapping() {
        assert_eq!(
            DocumentKind::from_content_type("application/pdf"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_content_type(DOCX_CONTENT_TYPE),
            Some(DocumentKind::Docx)
        );
        assert_eq!(DocumentKind::from_content_type("text/plain"), None);
        assert_eq!(DocumentKind::from_content_type("image/png"), None);
    }

    #[test]
    fn test_docx_paragraphs_joined_by_newline() {
        let data = docx_fixture(&["Professional Summary", "React developer, 5 years"]);
        assert_eq!(
            extract_text(&data, DocumentKind::Docx),
            "Professional Summary\nReact developer, 5 years"
        );
    }

    #[test]
    fn test_docx_runs_tabs_and_entities() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
            <w:p><w:r><w:t>Rust</w:t></w:r><w:r><w:tab/><w:t xml:space="preserve"> &amp; Go</w:t></w:r></w:p>
            <w:p/>
            <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Education</w:t><w:br/><w:t>BSc</w:t></w:r></w:p>
        </w:body></w:document>"#;
        assert_eq!(
            docx_paragraphs(xml).unwrap(),
            vec!["Rust\t & Go".to_string(), String::new(), "Education\nBSc".to_string()]
        );
    }

    #[test]
    fn test_docx_without_body_part_degrades_to_empty() {
        assert_eq!(extract_text(b"PK\x03\x04 not really a docx", DocumentKind::Docx), "");
    }

    #[test]
    fn test_docx_text_reaches_scorer() {
        let data = docx_fixture(&["Summary", "React engineer with 5 years"]);
        let text = extract_text(&data, DocumentKind::Docx);
        let result = LexicalMatchScorer::default().score(&text, "React engineer, 5 years");
        assert_eq!(result.breakdown.skills, 100);
        assert_eq!(result.breakdown.experience, 100);
        assert!(!result.suggestions.iter().any(|s| s.contains("Professional Summary")));
    }

    #[test]
    fn test_rendered_report_pdf_is_readable() {
        let spec = ReportSpec {
            report_id: "extract01".to_string(),
            generated_at: Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap(),
            match_result: MatchResult {
                score: 72,
                breakdown: ScoreBreakdown {
                    skills: 70,
                    experience: 80,
                    education: 100,
                    extras: 50,
                },
                suggestions: vec!["React developer with 7 years".to_string()],
            },
        };
        let rendered = render(&spec, &a4_report_geometry()).unwrap();

        let text = extract_text(&rendered.bytes, DocumentKind::Pdf);
        assert!(text.contains("Top Suggestions:"));
        assert!(text.contains("React developer with 7 years"));

        let result = LexicalMatchScorer::default().score(&text, "React developer, 7 years");
        assert_eq!(result.breakdown.skills, 100);
        assert_eq!(result.breakdown.experience, 100);
    }

    #[tokio::test]
    async fn test_unreadable_pdf_degrades_to_empty() {
        let text = extract_text_blocking(Bytes::from_static(b"definitely not a pdf"), DocumentKind::Pdf).await;
        assert_eq!(text, "");
    }
}
