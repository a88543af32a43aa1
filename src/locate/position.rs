use log::debug;

use super::measure::TextMeasure;
use super::metrics::{BoxMetrics, CharLocation};

/// Map a page-space pointer position inside the text box to an absolute
/// character index in `[0, chars(text)]`.
///
/// Returns `None` only for empty text, the sentinel callers use to suppress
/// narration. Every other position resolves: a pointer below the last line
/// lands on the last character overall, a pointer past the end of a line
/// lands on the line end, and a pointer left of the first character lands on
/// column 0.
pub fn locate(
    metrics: &BoxMetrics,
    measure: &dyn TextMeasure,
    text: &str,
    x: f32,
    y: f32,
) -> Option<usize> {
    if text.is_empty() {
        return None;
    }

    let rel_x = x - metrics.origin_x - metrics.padding_left_px;
    let rel_y = y - metrics.origin_y - metrics.padding_top_px;

    let lines: Vec<&str> = text.split('\n').collect();
    let total_chars = text.chars().count();

    // Above the box clamps to the first line; below the last line maps to
    // the last character overall.
    let line_index = if rel_y < 0.0 {
        0
    } else {
        (rel_y / metrics.line_height_px).floor() as usize
    };
    if line_index >= lines.len() {
        debug!("pointer below last line, mapping to last character");
        return Some(total_chars.saturating_sub(1));
    }

    let line_chars: Vec<char> = lines[line_index].chars().collect();
    let column = column_at_x(&line_chars, measure, rel_x);

    let mut absolute = 0;
    for line in &lines[..line_index] {
        absolute += line.chars().count() + 1; // +1 for the newline separator
    }
    absolute += column;

    Some(absolute.min(total_chars))
}

/// Walk the line's characters accumulating advance widths until `x` is
/// covered. The half-character rule avoids a systematic off-by-one bias: a
/// hit in the first half of a glyph selects that character, a hit in the
/// second half selects the next one.
fn column_at_x(line_chars: &[char], measure: &dyn TextMeasure, x: f32) -> usize {
    let mut cursor = 0.0;
    for (i, &c) in line_chars.iter().enumerate() {
        let width = measure.char_width(c);
        if x >= cursor && x < cursor + width {
            return if x < cursor + width / 2.0 { i } else { i + 1 };
        }
        cursor += width;
    }
    if x >= cursor {
        // Past the last glyph: end of line.
        line_chars.len()
    } else {
        // Left of the first glyph.
        0
    }
}

/// Derive line, column and absolute offset for a known absolute index,
/// clamping past-the-end indices to the end of the last line.
pub fn location_of(text: &str, absolute: usize) -> CharLocation {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut consumed = 0;

    for (i, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if absolute <= consumed + len {
            return CharLocation {
                line: i,
                column: absolute - consumed,
                absolute,
            };
        }
        consumed += len + 1;
    }

    let last = lines.len() - 1;
    CharLocation {
        line: last,
        column: lines[last].chars().count(),
        // consumed counted one separator past the final line
        absolute: consumed - 1,
    }
}
