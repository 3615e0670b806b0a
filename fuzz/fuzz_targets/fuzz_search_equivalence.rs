//! Fuzz target for width-search equivalence.
//!
//! The optimization flags must never change the search's answer. Arbitrary
//! text is searched with everything on and everything off under a small
//! width cap to keep iterations fast; the two results must be identical.

#![no_main]

use libfuzzer_sys::fuzz_target;
use riverrun::{Optimizations, SearchOptions, Text, find_best_width};

fuzz_target!(|raw: String| {
    if raw.chars().count() > 300 {
        return;
    }
    let text = Text::parse(&raw);

    let plain_options = SearchOptions::exhaustive().with_width_cap(64);
    let tuned_options = plain_options
        .clone()
        .with_optimizations(Optimizations::all())
        .with_skip_horizon(7);

    let plain = find_best_width(&text, &plain_options);
    let tuned = find_best_width(&text, &tuned_options);
    assert_eq!(
        plain.result, tuned.result,
        "optimizations changed the answer for {raw:?}"
    );
});
