//! Balanced delimiter matching for LaTeX argument groups

/// Find the index of the delimiter closing the group opened at `open_index`
///
/// `delims` is the `(open, close)` pair. Returns `None` when `text` has no
/// `open` delimiter at `open_index` or when the text ends before the group
/// is closed. Indices are byte offsets into `text`.
pub fn find_matching_brace(text: &str, open_index: usize, delims: (char, char)) -> Option<usize> {
    let (open, close) = delims;
    let rest = text.get(open_index..)?;
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, c)) if c == open => {}
        _ => return None,
    }

    let mut depth = 1usize;
    for (i, c) in chars {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(open_index + i);
            }
        }
    }
    None
}
