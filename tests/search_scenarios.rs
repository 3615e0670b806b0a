//! End-to-end scenarios for the width search.
//!
//! Run with:
//!   cargo test --test `search_scenarios` -- --nocapture
//! With logging:
//!   `RUST_LOG=debug` cargo test --test `search_scenarios` -- --nocapture

use std::sync::{Arc, Mutex};

use riverrun::{
    LogLevel, Optimizations, SearchOptions, SearchResult, Text, find_best_width,
    find_optimal_width_and_river, set_log_callback,
};
use tracing::{Level, info};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

fn search(raw: &str, options: &SearchOptions) -> riverrun::SearchReport {
    find_best_width(&Text::parse(raw), options)
}

#[test]
fn scenario_uniform_words_reach_full_height() {
    init_logging();
    info!("searching a text of uniform one-char words");

    let report = search("a a a a a a a a", &SearchOptions::default());
    assert_eq!(report.result, SearchResult { width: 3, river: 4 });
    assert!(report.stats.early_stopped, "river spans every line at width 3");
    assert_eq!(report.stats.widths_probed, 3);
    info!(
        width = report.result.width,
        river = report.result.river,
        "uniform scenario done"
    );
}

#[test]
fn scenario_two_words_carry_no_river() {
    init_logging();
    // Two words always split into two one-word lines; neither line has an
    // interior space.
    assert_eq!(find_optimal_width_and_river("hello world"), (5, 0));
}

#[test]
fn scenario_growing_word_sizes() {
    init_logging();
    let report = search("a bb ccc dddd", &SearchOptions::exhaustive());
    assert_eq!(report.result, SearchResult { width: 4, river: 1 });
    // min width 4 (the longest word), max width 12 (one under text length).
    assert_eq!(report.stats.widths_probed, 9);
}

#[test]
fn scenario_refrain_aligns_at_width_five() {
    init_logging();
    // At width 5 the text wraps to three "la la" lines whose inner spaces
    // stack into a river of 3.
    let report = search("la la la la la la", &SearchOptions::default());
    assert_eq!(report.result, SearchResult { width: 5, river: 3 });
    assert!(report.stats.early_stopped);
}

#[test]
fn scenario_degenerate_inputs() {
    init_logging();
    assert_eq!(find_optimal_width_and_river(""), (0, 0));
    assert_eq!(find_optimal_width_and_river("   "), (0, 0));
    assert_eq!(find_optimal_width_and_river("word"), (4, 0));
}

#[test]
fn scenario_prose_all_strategies_agree() {
    init_logging();
    let raw = "the quick brown fox jumps over the lazy dog while \
               the rain in spain stays mainly in the plain";
    let parsed = Text::parse(raw);
    let baseline = find_best_width(&parsed, &SearchOptions::exhaustive());

    for bits in 0..=0b111u8 {
        let optimizations = Optimizations::from_bits_truncate(bits);
        let options = SearchOptions::default().with_optimizations(optimizations);
        let report = find_best_width(&parsed, &options);
        assert_eq!(report.result, baseline.result, "under {optimizations:?}");
    }
    info!(
        width = baseline.result.width,
        river = baseline.result.river,
        "prose scenario done"
    );
}

#[test]
fn scenario_width_cap_bounds_exploration() {
    init_logging();
    let capped = SearchOptions::exhaustive().with_width_cap(6);
    let report = search("a bb ccc dddd", &capped);
    // Exploration stops at the cap instead of text length minus one, which
    // cannot change the answer here: the winner sits at width 4.
    assert_eq!(report.result, SearchResult { width: 4, river: 1 });
    assert_eq!(report.stats.widths_probed, 3);

    let uncapped = search("a bb ccc dddd", &SearchOptions::exhaustive());
    assert_eq!(uncapped.result, report.result);
    assert_eq!(uncapped.stats.widths_probed, 9);
}

#[test]
fn scenario_cap_below_narrowest_feasible_width() {
    init_logging();
    // No width in range can produce a layout, so the search answers the
    // narrowest feasible width with no river rather than failing.
    let options = SearchOptions::default().with_width_cap(3);
    let report = search("a bb ccc dddd", &options);
    assert_eq!(report.result, SearchResult { width: 4, river: 0 });
    assert_eq!(report.stats.widths_probed, 0);
}

#[test]
fn scenario_jumping_walk_matches_plain_walk() {
    init_logging();
    let raw = "one two three four five six seven eight nine ten";
    let plain = search(raw, &SearchOptions::exhaustive());
    let jumping = search(
        raw,
        &SearchOptions::exhaustive().with_optimizations(Optimizations::SKIP_BREAKPOINTS),
    );
    assert_eq!(jumping.result, plain.result);
    assert!(jumping.stats.widths_probed < plain.stats.widths_probed);
    info!(
        probed = jumping.stats.widths_probed,
        skipped = jumping.stats.widths_skipped,
        "jumping walk done"
    );
}

// The log callback is process-global, so exactly one test in this binary
// installs it. Searches from other tests may land in the sink as well; the
// assertions below only require presence, never exclusivity.
#[test]
fn scenario_search_emits_diagnostics() {
    init_logging();
    let lines: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&lines);
    set_log_callback(move |level, msg| {
        sink.lock().unwrap().push((level, msg.to_string()));
    });

    let report = search("a a a a a a a a", &SearchOptions::default());
    assert!(report.stats.early_stopped);

    let lines = lines.lock().unwrap();
    assert!(
        lines
            .iter()
            .any(|(level, msg)| *level == LogLevel::Info
                && msg.starts_with("early stop at width 3")),
        "missing early-stop diagnostic, got {lines:?}"
    );
    assert!(
        lines
            .iter()
            .any(|(level, msg)| *level == LogLevel::Debug
                && msg.starts_with("width search: best width 3 river 4")),
        "missing summary diagnostic, got {lines:?}"
    );
}
