// ============================================================
// Layer 5 - Layout Model
// ============================================================
// The renderer does not draw straight into a PDF. It builds a
// RenderedDocument: a list of pages, each a list of positioned
// elements in millimetres measured from the top-left corner.
// The PDF writer turns this model into real PDF objects.
//
// Tests inspect this model directly instead of parsing PDF output.

/// A4 portrait, in millimetres
pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;

/// Left / top / right margin
pub const MARGIN: f64 = 10.0;

/// Distance from the bottom edge that triggers a page break
pub const BREAK_MARGIN: f64 = 20.0;

/// Inner padding between a cell's border and its text
pub const CELL_PADDING: f64 = 1.0;

/// Points per millimetre
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Placeholder replaced by the final page count when the
/// document is finished.
pub const TOTAL_PAGES_ALIAS: &str = "{nb}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub style:   FontStyle,
    pub size_pt: f64,
}

impl Font {
    pub const fn new(style: FontStyle, size_pt: f64) -> Self {
        Self { style, size_pt }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontStyle::Regular, 10.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One drawn cell: an optional border box plus text aligned in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub x:      f64,
    pub y:      f64,
    pub width:  f64,
    pub height: f64,
    pub text:   String,
    pub font:   Font,
    pub align:  Align,
    pub border: bool,
    /// Drawn by the page template rather than the body; only these
    /// cells get the total-page alias resolved
    pub decoration: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub cells: Vec<Cell>,
}

#[cfg(test)]
impl Page {
    /// Text of every non-empty cell on the page, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .map(|c| c.text.as_str())
            .filter(|t| !t.is_empty())
    }
}

/// A finished document ready to be serialised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedDocument {
    pub pages: Vec<Page>,
}

impl RenderedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
impl RenderedDocument {
    /// True if any cell on any page has exactly this text
    pub fn contains_text(&self, text: &str) -> bool {
        self.pages.iter().any(|p| p.texts().any(|t| t == text))
    }

    /// Every cell on every page, with its 1-based page number
    pub fn cells(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(i, p)| p.cells.iter().map(move |c| (i + 1, c)))
    }
}
