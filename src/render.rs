//! Layout visualization helpers.
//!
//! Rendering marks every space so rivers stand out when a layout is printed;
//! the width helpers let callers warn when wide glyphs would make the printed
//! character grid disagree with what a terminal shows.

use unicode_width::UnicodeWidthStr;

use crate::wrap::Layout;

/// Marker substituted for spaces in rendered layouts.
pub const SPACE_MARKER: char = '*';

/// Render `layout` with every space replaced by [`SPACE_MARKER`], one line
/// per layout line, no trailing newline.
///
/// # Examples
///
/// ```
/// use riverrun::{Text, render_layout, wrap};
///
/// let layout = wrap(&Text::parse("a a a a"), 3).unwrap();
/// assert_eq!(render_layout(&layout), "a*a\na*a");
/// ```
#[must_use]
pub fn render_layout(layout: &Layout) -> String {
    let mut out = String::new();
    for (row, line) in layout.lines().iter().enumerate() {
        if row > 0 {
            out.push('\n');
        }
        for ch in line.chars() {
            out.push(if ch == ' ' { SPACE_MARKER } else { ch });
        }
    }
    out
}

/// A character-column ruler: `.` per column, `+` every fifth, the tens digit
/// every tenth. Columns count from 1.
#[must_use]
pub fn render_ruler(width: usize) -> String {
    let mut out = String::with_capacity(width);
    for col in 1..=width {
        if col % 10 == 0 {
            out.push_str(&(col / 10 % 10).to_string());
        } else if col % 5 == 0 {
            out.push('+');
        } else {
            out.push('.');
        }
    }
    out
}

/// Character count of the widest line.
#[must_use]
pub fn char_width(layout: &Layout) -> usize {
    layout
        .lines()
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

/// Terminal display width of the widest line. Differs from [`char_width`]
/// when the text holds wide glyphs (CJK and friends), in which case a printed
/// ruler will not visually align with the layout.
#[must_use]
pub fn display_width(layout: &Layout) -> usize {
    layout
        .lines()
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0)
}
