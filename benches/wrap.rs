//! Text parsing and wrapping performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use riverrun::{Text, wrap};
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

fn parse_text(c: &mut Criterion) {
    let short = sample_text(20);
    c.bench_function("text_parse_20_words", |b| {
        b.iter(|| Text::parse(black_box(&short)));
    });

    let long = sample_text(2000);
    c.bench_function("text_parse_2k_words", |b| {
        b.iter(|| Text::parse(black_box(&long)));
    });
}

fn wrap_text(c: &mut Criterion) {
    let short = sample_text(20);
    let short_text = Text::parse(&short);
    c.bench_function("wrap_20_words_w40", |b| {
        b.iter(|| wrap(black_box(&short_text), black_box(40)));
    });

    let long = sample_text(2000);
    let long_text = Text::parse(&long);
    c.bench_function("wrap_2k_words_w40", |b| {
        b.iter(|| wrap(black_box(&long_text), black_box(40)));
    });

    c.bench_function("wrap_2k_words_w100", |b| {
        b.iter(|| wrap(black_box(&long_text), black_box(100)));
    });
}

criterion_group!(benches, parse_text, wrap_text);
criterion_main!(benches);
