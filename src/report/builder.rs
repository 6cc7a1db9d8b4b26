// ============================================================
// Layer 5 - Document Builder
// ============================================================
// An explicit, owned drawing state replaces the usual "global
// PDF object" approach: the renderer holds a DocumentBuilder
// and passes it by &mut through every drawing step.
//
//   Canvas          - pages + cursor + current font. Knows how to
//                     place a cell and move the cursor. No page
//                     breaking, so header/footer code can draw
//                     anywhere without recursion.
//   DocumentBuilder - owns a Canvas and a PageTemplate. Starts
//                     pages (running the template's footer and
//                     header), breaks pages automatically, and
//                     resolves the total-page alias on finish().
//
// All coordinates are millimetres from the top-left corner.

use crate::report::fonts;
use crate::report::layout::{
    Align, Cell, Font, FontStyle, Page, RenderedDocument, BREAK_MARGIN, CELL_PADDING, MARGIN,
    PAGE_HEIGHT, PAGE_WIDTH, TOTAL_PAGES_ALIAS,
};
use crate::report::template::PageTemplate;

/// Where the cursor goes after a cell is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// Stay on the line, just right of the cell
    Right,
    /// Start of the next line
    NextLine,
}

// ─── Canvas ───────────────────────────────────────────────────────────────────
#[derive(Debug, Default)]
pub struct Canvas {
    pages: Vec<Page>,
    x:     f64,
    y:     f64,
    font:  Font,
    /// Height of the last drawn cell, used by a bare ln()
    last_height: f64,
    /// Set while the page template is drawing
    decorating: bool,
}

impl Canvas {
    /// 1-based number of the current page, 0 before the first page
    pub fn page_no(&self) -> usize {
        self.pages.len()
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn set_font(&mut self, style: FontStyle, size_pt: f64) {
        self.font = Font::new(style, size_pt);
    }

    fn restore_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Move to the left margin at height `y`. Negative values are
    /// measured from the bottom edge.
    pub fn set_y(&mut self, y: f64) {
        self.x = MARGIN;
        self.y = if y >= 0.0 { y } else { PAGE_HEIGHT + y };
    }

    /// Line break of `h` millimetres, or of the last cell height
    pub fn ln(&mut self, h: Option<f64>) {
        self.x = MARGIN;
        self.y += h.unwrap_or(self.last_height);
    }

    /// Width left between the cursor and the right margin
    pub fn remaining_width(&self) -> f64 {
        PAGE_WIDTH - MARGIN - self.x
    }

    fn start_page(&mut self) {
        self.pages.push(Page::default());
        self.x = MARGIN;
        self.y = MARGIN;
    }

    /// Draw a cell at the cursor. `width` of 0 stretches to the
    /// right margin.
    pub fn cell(&mut self, width: f64, height: f64, text: &str, border: bool, align: Align, next: CursorMove) {
        let width = if width <= 0.0 { self.remaining_width() } else { width };

        if let Some(page) = self.pages.last_mut() {
            page.cells.push(Cell {
                x: self.x,
                y: self.y,
                width,
                height,
                text: text.to_string(),
                font: self.font,
                align,
                border,
                decoration: self.decorating,
            });
        }

        self.last_height = height;
        match next {
            CursorMove::Right => self.x += width,
            CursorMove::NextLine => {
                self.x = MARGIN;
                self.y += height;
            }
        }
    }

    fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}

// ─── DocumentBuilder ──────────────────────────────────────────────────────────
pub struct DocumentBuilder<T: PageTemplate> {
    canvas:   Canvas,
    template: T,
}

impl<T: PageTemplate> DocumentBuilder<T> {
    pub fn new(template: T) -> Self {
        Self { canvas: Canvas::default(), template }
    }

    /// Close the current page (footer) and open a new one (header).
    /// The caller's font survives the template's drawing.
    pub fn add_page(&mut self) {
        if self.canvas.page_no() > 0 {
            self.decorate(|template, canvas| template.footer(canvas));
        }

        self.canvas.start_page();
        self.decorate(|template, canvas| template.header(canvas));
    }

    /// Run template drawing with decoration marking on, then put the
    /// caller's font back.
    fn decorate(&mut self, draw: impl FnOnce(&T, &mut Canvas)) {
        let font = self.canvas.font();
        self.canvas.decorating = true;
        draw(&self.template, &mut self.canvas);
        self.canvas.decorating = false;
        self.canvas.restore_font(font);
    }

    pub fn set_font(&mut self, style: FontStyle, size_pt: f64) -> &mut Self {
        self.canvas.set_font(style, size_pt);
        self
    }

    /// Draw one cell, breaking to a new page first if it would
    /// cross the bottom margin.
    pub fn cell(&mut self, width: f64, height: f64, text: &str, border: bool, align: Align, next: CursorMove) -> &mut Self {
        self.ensure_room(height);
        self.canvas.cell(width, height, text, border, align, next);
        self
    }

    /// A full-width, left-aligned line of text
    pub fn write_line(&mut self, height: f64, text: &str) -> &mut Self {
        self.cell(0.0, height, text, false, Align::Left, CursorMove::NextLine)
    }

    pub fn ln(&mut self, height: f64) -> &mut Self {
        self.canvas.ln(Some(height));
        self
    }

    /// One bordered table row. Cells beyond `widths` are ignored and
    /// text that does not fit its column is truncated.
    pub fn table_row<S: AsRef<str>>(&mut self, widths: &[f64], cells: &[S], height: f64, align: Align) -> &mut Self {
        self.ensure_room(height);

        let font = self.canvas.font();
        for (width, text) in widths.iter().zip(cells) {
            let fitted = fonts::fit_text(text.as_ref(), font, width - 2.0 * CELL_PADDING);
            self.canvas.cell(*width, height, &fitted, true, align, CursorMove::Right);
        }
        self.canvas.ln(Some(height));
        self
    }

    fn ensure_room(&mut self, height: f64) {
        if self.canvas.page_no() == 0 {
            self.add_page();
            return;
        }
        if self.canvas.y() + height > PAGE_HEIGHT - BREAK_MARGIN {
            let x = self.canvas.x();
            self.add_page();
            // keep the column position when a row is split mid-line
            self.canvas.x = x;
        }
    }

    /// Draw the last footer and substitute the total page count.
    pub fn finish(mut self) -> RenderedDocument {
        if self.canvas.page_no() == 0 {
            self.add_page();
        }

        self.decorate(|template, canvas| template.footer(canvas));

        let total     = self.canvas.page_no().to_string();
        let mut pages = self.canvas.into_pages();
        for cell in pages.iter_mut().flat_map(|p| p.cells.iter_mut()) {
            if cell.decoration && cell.text.contains(TOTAL_PAGES_ALIAS) {
                cell.text = cell.text.replace(TOTAL_PAGES_ALIAS, &total);
            }
        }

        RenderedDocument { pages }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// Writes a marker line at the top and a page label at the bottom
    struct Marker;

    impl PageTemplate for Marker {
        fn header(&self, canvas: &mut Canvas) {
            canvas.set_font(FontStyle::Bold, 14.0);
            canvas.cell(0.0, 10.0, "HEAD", false, Align::Center, CursorMove::NextLine);
        }

        fn footer(&self, canvas: &mut Canvas) {
            canvas.set_y(-15.0);
            canvas.set_font(FontStyle::Italic, 8.0);
            let label = format!("{}/{}", canvas.page_no(), TOTAL_PAGES_ALIAS);
            canvas.cell(0.0, 10.0, &label, false, Align::Center, CursorMove::Right);
        }
    }

    #[test]
    fn test_header_and_footer_on_every_page() {
        let mut b = DocumentBuilder::new(Marker);
        b.add_page();
        b.write_line(6.0, "one");
        b.add_page();
        b.write_line(6.0, "two");
        let doc = b.finish();

        assert_eq!(doc.page_count(), 2);
        for page in &doc.pages {
            let texts: Vec<&str> = page.texts().collect();
            assert_eq!(texts.first(), Some(&"HEAD"));
        }
        assert!(doc.contains_text("1/2"));
        assert!(doc.contains_text("2/2"));
    }

    #[test]
    fn test_template_does_not_leak_font() {
        let mut b = DocumentBuilder::new(Marker);
        b.set_font(FontStyle::Regular, 10.0);
        b.add_page();
        b.write_line(6.0, "body");
        let doc  = b.finish();
        let body = doc.pages[0].cells.iter().find(|c| c.text == "body").unwrap();
        assert_eq!(body.font, Font::new(FontStyle::Regular, 10.0));
    }

    #[test]
    fn test_automatic_page_break() {
        let mut b = DocumentBuilder::new(Marker);
        b.add_page();
        for i in 0..60 {
            b.write_line(6.0, &format!("line {i}"));
        }
        let doc = b.finish();
        assert!(doc.page_count() >= 2);

        // no body cell crosses the break margin
        for (_, cell) in doc.cells() {
            if cell.text.starts_with("line") {
                assert!(cell.y + cell.height <= PAGE_HEIGHT - BREAK_MARGIN + 1e-9);
            }
        }
    }

    #[test]
    fn test_table_row_truncates_and_borders() {
        let mut b = DocumentBuilder::new(Marker);
        b.add_page();
        b.set_font(FontStyle::Regular, 8.0);
        let long = "x".repeat(200);
        b.table_row(&[30.0, 30.0], &["short", long.as_str(), "ignored"], 6.0, Align::Center);
        let doc = b.finish();

        let bordered: Vec<&Cell> = doc.pages[0].cells.iter().filter(|c| c.border).collect();
        assert_eq!(bordered.len(), 2);
        assert_eq!(bordered[0].text, "short");
        assert!(bordered[1].text.len() < 200);
        assert!(!doc.contains_text("ignored"));
    }

    #[test]
    fn test_body_text_keeps_alias_literal() {
        let mut b = DocumentBuilder::new(Marker);
        b.add_page();
        b.write_line(6.0, "see {nb}");
        b.set_font(FontStyle::Regular, 8.0);
        b.table_row(&[40.0], &["{nb} pages"], 6.0, Align::Center);
        let doc = b.finish();

        assert!(doc.contains_text("see {nb}"));
        assert!(doc.contains_text("{nb} pages"));
        assert!(doc.contains_text("1/1"));

        let footer = doc.pages[0].cells.iter().find(|c| c.text == "1/1").unwrap();
        assert!(footer.decoration);
        let body = doc.pages[0].cells.iter().find(|c| c.text == "see {nb}").unwrap();
        assert!(!body.decoration);
    }

    #[test]
    fn test_finish_without_pages_yields_one_page() {
        let doc = DocumentBuilder::new(Marker).finish();
        assert_eq!(doc.page_count(), 1);
    }
}
