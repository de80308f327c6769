//! PDF encoding — serializes a `ReportLayout` into a standalone PDF byte stream.
//!
//! Uses only the standard Type1 fonts (Helvetica, Helvetica-Bold) with WinAnsiEncoding,
//! no compression and no generated document ID, so equal layouts encode to equal bytes.

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::errors::ReportError;
use crate::layout::{PageGeometry, PageLayout, ReportFont};

pub const PRODUCER: &str = "cvmatch";

/// Document-level metadata written to the PDF Info dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Encodes every page of the layout into a single PDF document.
pub fn encode_pdf(
    pages: &[PageLayout],
    geometry: &PageGeometry,
    info: &DocumentInfo,
) -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let regular_id = add_font(&mut doc, ReportFont::Body.base_font());
    let bold_id = add_font(&mut doc, ReportFont::Heading.base_font());
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            ReportFont::Body.resource_name() => regular_id,
            ReportFont::Heading.resource_name() => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = page_content(page);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(geometry.width_pt),
            Object::Real(geometry.height_pt),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(&info.title), StringFormat::Literal),
        "Producer" => Object::string_literal(PRODUCER),
        "CreationDate" => Object::string_literal(pdf_date(&info.created_at)),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn add_font(doc: &mut Document, base_font: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    })
}

/// One text object per line, each positioned absolutely.
fn page_content(page: &PageLayout) -> Content {
    let mut operations = Vec::with_capacity(page.lines.len() * 5);
    for line in &page.lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![
                line.font.resource_name().into(),
                Object::Real(line.font.size_pt()),
            ],
        ));
        operations.push(Operation::new(
            "Td",
            vec![Object::Real(line.x), Object::Real(line.y)],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(&line.text),
                StringFormat::Literal,
            )],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }
}

/// PDF date string, e.g. `D:20261019120000Z`.
fn pdf_date(at: &DateTime<Utc>) -> String {
    at.format("D:%Y%m%d%H%M%SZ").to_string()
}

/// Maps text onto WinAnsiEncoding bytes. Characters outside the code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{00A0}'..='\u{00FF}' => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{a4_report_geometry, PlacedLine};
    use chrono::TimeZone;

    fn info() -> DocumentInfo {
        DocumentInfo {
            title: "Test".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
        }
    }

    fn page(texts: &[&str]) -> PageLayout {
        PageLayout {
            lines: texts
                .iter()
                .enumerate()
                .map(|(i, t)| PlacedLine {
                    page: 0,
                    x: 56.69,
                    y: 785.0 - i as f32 * 14.0,
                    font: ReportFont::Body,
                    text: t.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_output_is_a_pdf() {
        let bytes = encode_pdf(&[page(&["hello"])], &a4_report_geometry(), &info()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(32)..]).to_string();
        assert!(tail.contains("%%EOF"), "tail was {tail:?}");
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let pages = [page(&["one", "two"]), page(&["three"])];
        let g = a4_report_geometry();
        let a = encode_pdf(&pages, &g, &info()).unwrap();
        let b = encode_pdf(&pages, &g, &info()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_page_count_written() {
        let pages = [page(&["one"]), page(&["two"]), page(&["three"])];
        let bytes = encode_pdf(&pages, &a4_report_geometry(), &info()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_creation_date_from_info() {
        let bytes = encode_pdf(&[page(&["x"])], &a4_report_geometry(), &info()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("D:20261019120000Z"));
        assert!(text.contains("Helvetica-Bold"));
        assert!(text.contains("WinAnsiEncoding"));
    }

    #[test]
    fn test_win_ansi_dashes_and_fallback() {
        assert_eq!(encode_win_ansi("2–3"), vec![b'2', 0x96, b'3']);
        assert_eq!(encode_win_ansi("a—b"), vec![b'a', 0x97, b'b']);
        assert_eq!(encode_win_ansi("é"), vec![0xE9]);
        assert_eq!(encode_win_ansi("↔"), vec![b'?']);
    }
}
