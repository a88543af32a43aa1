use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use unicode_width::UnicodeWidthChar;

/// Per-character advance width in pixels at the box's font size.
///
/// The locator walks a line accumulating these widths, so the only capability
/// it needs from a font is the horizontal advance of one character.
pub trait TextMeasure {
    fn char_width(&self, c: char) -> f32;
}

/// Precise measurement from real font metrics.
///
/// This is the canonical implementation; the coordinate locator's
/// half-character rule assumes widths that match what was rendered.
pub struct GlyphMeasure<'a> {
    font: FontRef<'a>,
    font_size: f32,
}

impl<'a> GlyphMeasure<'a> {
    pub fn new(font: FontRef<'a>, font_size: f32) -> Self {
        Self { font, font_size }
    }

    /// Build a measurer from raw font bytes (TTF/OTF). Returns `None` when
    /// the bytes do not parse as a font; callers then fall back to the
    /// average-width estimate.
    pub fn from_bytes(bytes: &'a [u8], font_size: f32) -> Option<Self> {
        FontRef::try_from_slice(bytes)
            .ok()
            .map(|font| Self::new(font, font_size))
    }
}

impl TextMeasure for GlyphMeasure<'_> {
    fn char_width(&self, c: char) -> f32 {
        let font = &self.font;
        let scaled = font.as_scaled(PxScale::from(self.font_size));
        scaled.h_advance(font.glyph_id(c))
    }
}

/// Fixed average-width estimate, used when no measurement context exists.
///
/// A documented approximation, not an error: each terminal-style cell is
/// assumed to be 60% of the font size, and wide characters (CJK) take two
/// cells per their unicode width.
pub struct AverageWidthMeasure {
    cell_width: f32,
}

impl AverageWidthMeasure {
    const CELL_FACTOR: f32 = 0.6;

    pub fn new(font_size: f32) -> Self {
        Self {
            cell_width: font_size * Self::CELL_FACTOR,
        }
    }
}

impl TextMeasure for AverageWidthMeasure {
    fn char_width(&self, c: char) -> f32 {
        let cells = UnicodeWidthChar::width(c).unwrap_or(1) as f32;
        self.cell_width * cells
    }
}
