//! Fuzz target for river measurement.
//!
//! Builds a layout from arbitrary text and checks the structural bounds of
//! the answer: a river steps down one row per line so it can never exceed
//! the line count, and degenerate layouts have fully determined scores.

#![no_main]

use libfuzzer_sys::fuzz_target;
use riverrun::{Text, longest_river, wrap};

fuzz_target!(|input: (String, u16)| {
    let (raw, width) = input;
    let text = Text::parse(&raw);

    let Some(layout) = wrap(&text, usize::from(width)) else {
        return;
    };

    let river = longest_river(&layout);
    assert!(
        river <= layout.line_count(),
        "river {river} exceeds {} lines",
        layout.line_count()
    );
    match layout.line_count() {
        0 => assert_eq!(river, 0),
        // A lone wrapped line has a space exactly when it holds two or more
        // words, and every such space is an isolated river of length one.
        1 => assert_eq!(river, usize::from(text.word_count() >= 2)),
        _ => {}
    }
});
