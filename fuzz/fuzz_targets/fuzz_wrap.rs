//! Fuzz target for the greedy wrapper.
//!
//! Tests that wrapping arbitrary text at arbitrary widths never panics and
//! that every produced layout honors the width and preserves the words.

#![no_main]

use libfuzzer_sys::fuzz_target;
use riverrun::{Text, wrap};

fuzz_target!(|input: (String, u16)| {
    let (raw, width) = input;
    let width = usize::from(width);
    let text = Text::parse(&raw);

    let Some(layout) = wrap(&text, width) else {
        // Wrapping only fails when some word is wider than the line.
        assert!(text.longest_word_len() > width);
        return;
    };

    for line in layout.lines() {
        assert!(
            line.chars().count() <= width,
            "line {line:?} exceeds width {width}"
        );
    }
    assert_eq!(
        layout.lines().join(" "),
        text.words().join(" "),
        "wrapping must preserve words and order"
    );
});
