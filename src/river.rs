//! Longest typographic river in a wrapped layout.
//!
//! A river is a chain of interior spaces running down consecutive lines, each
//! link at most one column left or right of the one above. Interior means the
//! space is not the final character of its line; trailing positions cannot
//! carry a river.

use std::mem;

use crate::wrap::Layout;

/// Length of the longest river in `layout`, in lines.
///
/// Bottom-up dynamic programming: the reach of an interior space is one more
/// than the best reach among the three columns beneath it (one left, same,
/// one right); every other position has reach zero and cannot extend a chain.
/// The answer is the best reach anywhere. Columns are character positions,
/// and lines of different lengths are handled by bounds-checked neighbor
/// lookups.
///
/// An empty layout scores 0. A single-line layout scores 1 per isolated
/// interior space; callers interested only in multi-line rivers (the width
/// search) skip layouts under two lines before asking.
///
/// Runs in O(total characters) time with two reused row buffers.
///
/// # Examples
///
/// ```
/// use riverrun::{Text, longest_river, wrap};
///
/// let layout = wrap(&Text::parse("a a a a a a a a"), 3).unwrap();
/// assert_eq!(longest_river(&layout), 4);
/// ```
#[must_use]
pub fn longest_river(layout: &Layout) -> usize {
    let mut best = 0;
    // Reach values of the row below the one being computed; empty for the
    // bottom row, so its interior spaces ground out at 1.
    let mut below: Vec<usize> = Vec::new();
    let mut current: Vec<usize> = Vec::new();

    for line in layout.lines().iter().rev() {
        let line_len = line.chars().count();
        current.clear();
        for (col, ch) in line.chars().enumerate() {
            let reach = if ch == ' ' && col + 1 < line_len {
                1 + neighbor_max(&below, col)
            } else {
                0
            };
            if reach > best {
                best = reach;
            }
            current.push(reach);
        }
        mem::swap(&mut below, &mut current);
    }
    best
}

/// Best reach among columns `col - 1`, `col`, `col + 1` of the row below.
fn neighbor_max(below: &[usize], col: usize) -> usize {
    let mut max = 0;
    for neighbor in col.saturating_sub(1)..=col + 1 {
        if let Some(&reach) = below.get(neighbor) {
            if reach > max {
                max = reach;
            }
        }
    }
    max
}
