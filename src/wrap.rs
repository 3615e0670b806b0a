//! Greedy first-fit line wrapping.

use std::mem;

use crate::text::Text;

/// An immutable wrapped layout: the ordered lines produced by [`wrap`].
///
/// Layouts are built once per wrap call and frozen; the width search compares
/// layouts from consecutive widths by equality, so no mutation may leak
/// across calls.
///
/// Invariants (for layouts produced by [`wrap`]): no line is empty, words
/// within a line are joined by exactly one space, and no line exceeds the
/// wrap width in characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    lines: Vec<String>,
}

impl Layout {
    /// The wrapped lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Build a layout from raw lines, bypassing the wrapper.
    #[cfg(test)]
    pub(crate) fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Wrap `text` at `width` characters per line, greedy first-fit.
///
/// Words are taken in order; each goes on the current line when it fits
/// (counting one joining space), otherwise the line is closed and the word
/// opens the next one. Words are never split: if any single word is longer
/// than `width`, no layout exists at that width and the call returns `None`.
///
/// A non-empty valid text always wraps to at least one line; an empty text
/// wraps to an empty layout at any width. The same `(text, width)` pair
/// always produces the same layout.
///
/// # Examples
///
/// ```
/// use riverrun::{Text, wrap};
///
/// let text = Text::parse("the quick brown fox");
/// let layout = wrap(&text, 9).unwrap();
/// assert_eq!(layout.lines(), &["the quick", "brown fox"]);
/// assert!(wrap(&text, 4).is_none()); // "quick" does not fit
/// ```
#[must_use]
pub fn wrap(text: &Text<'_>, width: usize) -> Option<Layout> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for (word, word_len) in text.iter() {
        if word_len > width {
            return None;
        }
        if line_len == 0 {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            lines.push(mem::take(&mut line));
            line.push_str(word);
            line_len = word_len;
        }
    }
    if line_len > 0 {
        lines.push(line);
    }
    Some(Layout { lines })
}
