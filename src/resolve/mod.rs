pub mod page;
pub mod point;
pub mod unit;
pub mod window;

pub use page::{nearest_text_node, TreeWalk};
pub use unit::SpeakableUnit;

use crate::locate::location_of;

/// Which expansion strategy turns a character index into a speakable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// The unit covering the single character: word, CJK cluster, or
    /// punctuation-bounded sentence fragment.
    Point,
    /// The containing token plus this many tokens of context on each side,
    /// joined with natural spacing.
    Window(usize),
}

/// Expand `index` into the unit a user pointing there intends to hear.
///
/// Resolution happens within the line containing `index`; the returned
/// range is in absolute character offsets into `text`. `None` means there
/// is nothing to say (empty or all-whitespace text, index past the end),
/// never an error.
pub fn resolve_unit(text: &str, index: usize, mode: ResolveMode) -> Option<SpeakableUnit> {
    if text.is_empty() || index > text.chars().count() {
        return None;
    }

    let location = location_of(text, index);
    let line = text.split('\n').nth(location.line)?;
    let chars: Vec<char> = line.chars().collect();
    let line_offset = location.absolute - location.column;

    let (start, end, spoken) = match mode {
        ResolveMode::Point => {
            let (s, e) = point::point_range(&chars, location.column)?;
            let spoken: String = chars[s..e].iter().collect();
            (s, e, spoken)
        }
        ResolveMode::Window(n) => window::window_range(line, location.column, n)?,
    };

    Some(SpeakableUnit {
        text: spoken,
        start: line_offset + start,
        end: line_offset + end,
    })
}
