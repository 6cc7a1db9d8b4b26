// ============================================================
// Layer 5 - Standard Font Metrics
// ============================================================
// The report uses the built-in PDF Helvetica family, which every
// viewer ships, so no font file is embedded. Centring text and
// truncating table cells still need glyph widths; these tables
// are the Adobe AFM advance widths (1/1000 em) for printable
// ASCII. Oblique shares the regular widths.
//
// Text is emitted in WinAnsiEncoding: Latin-1 characters map to
// their own byte, anything else becomes '?'.

use crate::report::layout::{Font, FontStyle, PT_PER_MM};

const FIRST_CHAR: u32 = 32;

/// Width used for characters outside the tables
const DEFAULT_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// PDF base font name for a style
pub fn base_font(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Regular => "Helvetica",
        FontStyle::Bold    => "Helvetica-Bold",
        FontStyle::Italic  => "Helvetica-Oblique",
    }
}

/// Resource name the content stream uses for a style
pub fn resource_name(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Regular => "F1",
        FontStyle::Bold    => "F2",
        FontStyle::Italic  => "F3",
    }
}

fn glyph_width(style: FontStyle, c: char) -> u16 {
    let table = match style {
        FontStyle::Bold => &HELVETICA_BOLD,
        FontStyle::Regular | FontStyle::Italic => &HELVETICA,
    };
    (c as u32)
        .checked_sub(FIRST_CHAR)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or(DEFAULT_WIDTH)
}

/// Rendered width of `text` in millimetres
pub fn text_width(text: &str, font: Font) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(font.style, c))).sum();
    f64::from(units) * font.size_pt / 1000.0 / PT_PER_MM
}

/// Longest prefix of `text` that fits in `max_width` millimetres.
pub fn fit_text(text: &str, font: Font, max_width: f64) -> String {
    if text_width(text, font) <= max_width {
        return text.to_string();
    }

    let mut out   = String::new();
    let mut width = 0.0;
    for c in text.chars() {
        let w = f64::from(glyph_width(font.style, c)) * font.size_pt / 1000.0 / PT_PER_MM;
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

/// Encode text as WinAnsi bytes for a PDF string literal
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_is_wider() {
        let regular = Font::new(FontStyle::Regular, 10.0);
        let bold    = Font::new(FontStyle::Bold, 10.0);
        assert!(text_width("Report", bold) > text_width("Report", regular));
    }

    #[test]
    fn test_width_scales_with_size() {
        let small = Font::new(FontStyle::Regular, 8.0);
        let large = Font::new(FontStyle::Regular, 16.0);
        let ratio = text_width("abc", large) / text_width("abc", small);
        assert!((ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_text_truncates() {
        let font = Font::new(FontStyle::Regular, 8.0);
        let long = "a very long value that will never fit in a narrow column";
        let fit  = fit_text(long, font, 20.0);
        assert!(fit.len() < long.len());
        assert!(long.starts_with(&fit));
        assert!(text_width(&fit, font) <= 20.0);
        assert_eq!(fit_text("ok", font, 20.0), "ok");
    }

    #[test]
    fn test_win_ansi_replaces_unmappable() {
        assert_eq!(encode_win_ansi("Aé€"), vec![b'A', 0xE9, b'?']);
    }
}
