// ============================================================
// Layer 5 - Page Template
// ============================================================
// Decoration drawn on every page. The builder calls header()
// right after a page starts and footer() right before the next
// page starts (and once more on finish()).

use crate::report::builder::{Canvas, CursorMove};
use crate::report::layout::{Align, FontStyle, TOTAL_PAGES_ALIAS};

pub trait PageTemplate {
    fn header(&self, canvas: &mut Canvas);
    fn footer(&self, canvas: &mut Canvas);
}

/// Title + generation timestamp on top, "Page n/total" at the bottom.
#[derive(Debug, Clone)]
pub struct ReportTemplate {
    title:        String,
    generated_at: String,
}

impl ReportTemplate {
    pub fn new(title: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            title:        title.into(),
            generated_at: generated_at.into(),
        }
    }
}

impl PageTemplate for ReportTemplate {
    fn header(&self, canvas: &mut Canvas) {
        canvas.set_font(FontStyle::Bold, 15.0);
        canvas.cell(0.0, 10.0, &self.title, false, Align::Center, CursorMove::NextLine);

        canvas.set_font(FontStyle::Regular, 10.0);
        let stamp = format!("Generated on: {}", self.generated_at);
        canvas.cell(0.0, 10.0, &stamp, false, Align::Center, CursorMove::NextLine);

        canvas.ln(Some(10.0));
    }

    fn footer(&self, canvas: &mut Canvas) {
        // 1.5 cm from the bottom
        canvas.set_y(-15.0);
        canvas.set_font(FontStyle::Italic, 8.0);
        let label = format!("Page {}/{}", canvas.page_no(), TOTAL_PAGES_ALIAS);
        canvas.cell(0.0, 10.0, &label, false, Align::Center, CursorMove::Right);
    }
}
