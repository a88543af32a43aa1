/// Read-only tree-walking capability over the externally-owned document.
///
/// The core never owns the page tree; the DOM collaborator hands in an
/// implementation of this trait and gets node references back. `text`
/// returns `Some` only for text nodes.
pub trait TreeWalk {
    type Node: Copy + Eq;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
    fn prev_sibling(&self, node: Self::Node) -> Option<Self::Node>;
    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;
    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;
    fn last_child(&self, node: Self::Node) -> Option<Self::Node>;
    fn text(&self, node: Self::Node) -> Option<&str>;
}

fn has_speakable_text<W: TreeWalk>(walk: &W, node: W::Node) -> bool {
    walk.text(node).map_or(false, |t| !t.trim().is_empty())
}

/// Find the text node nearest to an event target that itself carries no
/// text: first descend into the target, then scan previous and next
/// neighbors, climbing to ancestors as each level is exhausted.
pub fn nearest_text_node<W: TreeWalk>(walk: &W, target: W::Node) -> Option<W::Node> {
    if has_speakable_text(walk, target) {
        return Some(target);
    }
    if let Some(inside) = first_text_within(walk, target) {
        return Some(inside);
    }

    let mut current = Some(target);
    while let Some(node) = current {
        if let Some(prev) = previous_text_node(walk, node) {
            return Some(prev);
        }
        if let Some(next) = next_text_node(walk, node) {
            return Some(next);
        }
        current = walk.parent(node);
    }
    None
}

/// Depth-first scan of the subtree under `node` for its first speakable
/// text node.
fn first_text_within<W: TreeWalk>(walk: &W, node: W::Node) -> Option<W::Node> {
    let mut stack: Vec<W::Node> = Vec::new();
    let mut child = walk.first_child(node);
    while let Some(n) = child {
        stack.push(n);
        child = walk.next_sibling(n);
    }
    stack.reverse();

    while let Some(n) = stack.pop() {
        if has_speakable_text(walk, n) {
            return Some(n);
        }
        let mut grandchildren = Vec::new();
        let mut child = walk.first_child(n);
        while let Some(c) = child {
            grandchildren.push(c);
            child = walk.next_sibling(c);
        }
        for c in grandchildren.into_iter().rev() {
            stack.push(c);
        }
    }
    None
}

/// Walk backwards in document order (previous sibling, then its deepest
/// last descendant, climbing when siblings run out) until a speakable text
/// node appears.
fn previous_text_node<W: TreeWalk>(walk: &W, start: W::Node) -> Option<W::Node> {
    let mut node = Some(start);
    while let Some(n) = node {
        let step = match walk.prev_sibling(n) {
            Some(prev) => {
                let mut deep = prev;
                while let Some(last) = walk.last_child(deep) {
                    deep = last;
                }
                Some(deep)
            }
            None => walk.parent(n),
        };
        match step {
            Some(candidate) if has_speakable_text(walk, candidate) => return Some(candidate),
            other => node = other,
        }
    }
    None
}

/// Forward twin of `previous_text_node`.
fn next_text_node<W: TreeWalk>(walk: &W, start: W::Node) -> Option<W::Node> {
    let mut node = Some(start);
    while let Some(n) = node {
        let step = match walk.next_sibling(n) {
            Some(next) => {
                let mut deep = next;
                while let Some(first) = walk.first_child(deep) {
                    deep = first;
                }
                Some(deep)
            }
            None => walk.parent(n),
        };
        match step {
            Some(candidate) if has_speakable_text(walk, candidate) => return Some(candidate),
            other => node = other,
        }
    }
    None
}
