//! Width search performance benchmarks.
//!
//! These compare the optimization flags against the exhaustive walk on the
//! same text, which is where their value (or lack of it) shows up.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use riverrun::{Optimizations, SearchOptions, Text, find_best_width};
use std::hint::black_box;

const WORDS: [&str; 12] = [
    "the", "river", "runs", "between", "words", "of", "uneven", "length", "carving", "a",
    "visible", "channel",
];

/// Deterministic prose-like text of `count` words.
fn sample_text(count: usize) -> String {
    (0..count)
        .map(|i| WORDS[i % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn search_strategies(c: &mut Criterion) {
    let raw = sample_text(400);
    let text = Text::parse(&raw);

    c.bench_function("search_400_words_default", |b| {
        b.iter(|| find_best_width(black_box(&text), &SearchOptions::default()));
    });

    c.bench_function("search_400_words_exhaustive", |b| {
        b.iter(|| find_best_width(black_box(&text), &SearchOptions::exhaustive()));
    });

    let jumping =
        SearchOptions::exhaustive().with_optimizations(Optimizations::SKIP_BREAKPOINTS);
    c.bench_function("search_400_words_jumping", |b| {
        b.iter(|| find_best_width(black_box(&text), &jumping));
    });

    let everything = SearchOptions::default().with_optimizations(Optimizations::all());
    c.bench_function("search_400_words_all_optimizations", |b| {
        b.iter(|| find_best_width(black_box(&text), &everything));
    });
}

fn capped_search(c: &mut Criterion) {
    let raw = sample_text(2000);
    let text = Text::parse(&raw);

    let capped = SearchOptions::default().with_width_cap(500);
    c.bench_function("search_2k_words_cap500", |b| {
        b.iter(|| find_best_width(black_box(&text), &capped));
    });
}

criterion_group!(benches, search_strategies, capped_search);
criterion_main!(benches);
