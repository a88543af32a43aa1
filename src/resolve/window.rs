use crate::text::{join_tokens, tokenize};

/// Caret-context resolution: the token containing `index` plus `n` tokens of
/// context on each side, joined with natural spacing.
///
/// When the index falls in a whitespace gap the token with minimum distance
/// from either endpoint wins. Returns the covered character range within the
/// line and the joined text; `None` when the line has no tokens at all.
pub fn window_range(line: &str, index: usize, n: usize) -> Option<(usize, usize, String)> {
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return None;
    }

    let hit = tokens
        .iter()
        .position(|t| t.contains(index))
        .unwrap_or_else(|| {
            tokens
                .iter()
                .enumerate()
                .min_by_key(|(_, t)| t.distance_to(index))
                .map(|(i, _)| i)
                .unwrap_or(0)
        });

    let first = hit.saturating_sub(n);
    let last = (hit + n).min(tokens.len() - 1);
    let slice = &tokens[first..=last];

    Some((slice[0].start, slice[slice.len() - 1].end, join_tokens(slice)))
}
