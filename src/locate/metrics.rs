/// Style and position snapshot of the text box, read once per locate call.
///
/// The box may be resized or restyled between interactions, so callers take
/// a fresh snapshot every time instead of caching one. `origin_x`/`origin_y`
/// are the page coordinates of the box's top-left corner; pointer coordinates
/// arrive in page space and are made content-relative by subtracting the
/// origin and padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMetrics {
    pub origin_x: f32,
    pub origin_y: f32,
    pub font_size_px: f32,
    pub line_height_px: f32,
    pub padding_left_px: f32,
    pub padding_top_px: f32,
}

impl BoxMetrics {
    /// Snapshot with the conventional 1.2x line height and no padding.
    pub fn new(origin_x: f32, origin_y: f32, font_size_px: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            font_size_px,
            line_height_px: font_size_px * 1.2,
            padding_left_px: 0.0,
            padding_top_px: 0.0,
        }
    }

    pub fn with_line_height(mut self, line_height_px: f32) -> Self {
        self.line_height_px = line_height_px;
        self
    }

    pub fn with_padding(mut self, left: f32, top: f32) -> Self {
        self.padding_left_px = left;
        self.padding_top_px = top;
        self
    }
}

/// Line, column and absolute character offset of one position in the text.
///
/// Derived on demand; `absolute` is the canonical key used everywhere else,
/// `line` and `column` exist for caret narration and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharLocation {
    pub line: usize,
    pub column: usize,
    pub absolute: usize,
}
