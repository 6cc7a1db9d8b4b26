// ============================================================
// Layer 5 - PDF Writer
// ============================================================
// Serialises a RenderedDocument with lopdf.
//
// Object graph produced:
//   Catalog ─► Pages (MediaBox, shared Resources with 3 fonts)
//                └─► Page × N ─► Content stream
//
// The three fonts are the standard Type1 Helvetica family, so
// nothing is embedded. Content streams draw each cell's border
// with `re S` and its text with `BT … Tj ET`.

use std::{
    io::{BufWriter, Write},
    path::Path,
};

use lopdf::{
    content::{Content, Operation},
    dictionary, Document, Object, ObjectId, Stream,
};

use crate::domain::error::ReportError;
use crate::report::fonts;
use crate::report::layout::{
    Align, Cell, FontStyle, Page, RenderedDocument, CELL_PADDING, PAGE_HEIGHT, PAGE_WIDTH, PT_PER_MM,
};

/// Border line width in millimetres
const LINE_WIDTH: f64 = 0.2;

pub struct PdfWriter;

impl PdfWriter {
    /// Build the lopdf Document for `rendered` without touching disk.
    pub fn build(rendered: &RenderedDocument) -> Result<Document, ReportError> {
        let mut doc  = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut font_dict = lopdf::Dictionary::new();
        for style in [FontStyle::Regular, FontStyle::Bold, FontStyle::Italic] {
            let font_id = doc.add_object(dictionary! {
                "Type"     => "Font",
                "Subtype"  => "Type1",
                "BaseFont" => fonts::base_font(style),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(fonts::resource_name(style), font_id);
        }
        let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

        let mut kids: Vec<Object> = Vec::with_capacity(rendered.pages.len());
        for page in &rendered.pages {
            let page_id = add_page(&mut doc, pages_id, page)?;
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type"      => "Pages",
            "Kids"      => kids,
            "Count"     => count,
            "Resources" => resources_id,
            "MediaBox"  => vec![
                0.into(),
                0.into(),
                Object::from(PAGE_WIDTH * PT_PER_MM),
                Object::from(PAGE_HEIGHT * PT_PER_MM),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type"  => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        Ok(doc)
    }

    /// Build and write the PDF to `path`. The bytes go to a temporary file
    /// in the same directory which is then renamed over `path`, so a failed
    /// write never leaves a truncated report behind. I/O failures are OutputWrite.
    pub fn write(rendered: &RenderedDocument, path: &Path) -> Result<(), ReportError> {
        let mut doc = Self::build(rendered)?;

        let output_err = |source: std::io::Error| ReportError::OutputWrite { path: path.to_path_buf(), source };

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(output_err)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            doc.save_to(&mut writer).map_err(output_err)?;
            writer.flush().map_err(output_err)?;
        }
        tmp.persist(path).map_err(|e| output_err(e.error))?;

        tracing::debug!("Wrote {} page(s) to '{}'", rendered.page_count(), path.display());
        Ok(())
    }
}

fn add_page(doc: &mut Document, parent: ObjectId, page: &Page) -> Result<ObjectId, ReportError> {
    let mut ops = vec![Operation::new("w", vec![Object::from(LINE_WIDTH * PT_PER_MM)])];
    for cell in &page.cells {
        cell_operations(cell, &mut ops);
    }

    let content = Content { operations: ops }
        .encode()
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));

    Ok(doc.add_object(dictionary! {
        "Type"     => "Page",
        "Parent"   => parent,
        "Contents" => content_id,
    }))
}

/// Append the drawing operators for one cell
fn cell_operations(cell: &Cell, ops: &mut Vec<Operation>) {
    if cell.border {
        ops.push(Operation::new("re", vec![
            pt(cell.x),
            pt(PAGE_HEIGHT - cell.y),
            pt(cell.width),
            pt(-cell.height),
        ]));
        ops.push(Operation::new("S", vec![]));
    }

    if cell.text.is_empty() {
        return;
    }

    let text_width = fonts::text_width(&cell.text, cell.font);
    let dx = match cell.align {
        Align::Left   => CELL_PADDING,
        Align::Center => (cell.width - text_width) / 2.0,
    };
    // vertically centred baseline
    let baseline = cell.y + 0.5 * cell.height + 0.3 * cell.font.size_pt / PT_PER_MM;

    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![
        fonts::resource_name(cell.font.style).into(),
        Object::from(cell.font.size_pt),
    ]));
    ops.push(Operation::new("Td", vec![pt(cell.x + dx), pt(PAGE_HEIGHT - baseline)]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(fonts::encode_win_ansi(&cell.text))]));
    ops.push(Operation::new("ET", vec![]));
}

/// Millimetres to a PDF number in points
fn pt(mm: f64) -> Object {
    Object::from(mm * PT_PER_MM)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::layout::Font;

    fn one_page(text: &str) -> RenderedDocument {
        RenderedDocument {
            pages: vec![Page {
                cells: vec![Cell {
                    x:      10.0,
                    y:      10.0,
                    width:  40.0,
                    height: 6.0,
                    text:   text.to_string(),
                    font:   Font::new(FontStyle::Bold, 10.0),
                    align:  Align::Center,
                    border: true,
                    decoration: false,
                }],
            }],
        }
    }

    #[test]
    fn test_written_file_reloads_with_same_page_count() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");

        let mut rendered = one_page("hello (world)");
        rendered.pages.push(Page::default());
        PdfWriter::write(&rendered, &path).unwrap();

        let loaded = Document::load(&path).unwrap();
        assert_eq!(loaded.get_pages().len(), 2);
    }

    #[test]
    fn test_write_leaves_only_the_report_in_directory() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");

        PdfWriter::write(&one_page("a"), &path).unwrap();
        PdfWriter::write(&one_page("b"), &path).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.pdf")]);
        assert_eq!(Document::load(&path).unwrap().get_pages().len(), 1);
    }

    #[test]
    fn test_write_into_missing_directory_is_output_write() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.pdf");
        let err  = PdfWriter::write(&one_page("x"), &path).unwrap_err();
        assert!(matches!(err, ReportError::OutputWrite { .. }));
    }
}
