//! `riverrun` - typographic river analysis for wrapped text
//!
//! Wraps a space-separated text at every candidate line width and finds the
//! width whose layout contains the longest "river": a chain of interior
//! spaces running down consecutive lines, drifting at most one column per
//! line. Rivers are a typesetting defect; this crate searches for the width
//! that maximizes one, which is what you want when stress-testing a wrapping
//! algorithm or demonstrating worst cases.
//!
//! The pipeline is three pure pieces: [`wrap`] (greedy first-fit wrapping),
//! [`longest_river`] (bottom-up DP over a layout), and [`find_best_width`]
//! (the width search, with toggleable pruning, early-stop, and
//! breakpoint-skipping optimizations that never change the answer).
//!
//! ```
//! use riverrun::find_optimal_width_and_river;
//!
//! // Eight one-letter words: width 3 stacks four "a a" lines, and the
//! // column-1 spaces align into a river spanning the whole layout.
//! assert_eq!(find_optimal_width_and_river("a a a a a a a a"), (3, 4));
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // SearchOptions, SearchResult etc. read better whole
#![allow(clippy::missing_errors_doc)] // Error conditions live on the Error type
#![allow(clippy::missing_panics_doc)] // Only the poisoned-lock expect can panic
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::iter_without_into_iter)] // Text::iter is a view, not a container walk

pub mod batch;
pub mod error;
pub mod event;
pub mod input;
pub mod render;
pub mod river;
pub mod search;
pub mod text;
pub mod wrap;

// Re-export the core surface at the crate root
pub use error::{Error, Result};
pub use event::{LogLevel, set_log_callback};
pub use river::longest_river;
pub use search::{
    DEFAULT_SKIP_HORIZON, DEFAULT_WIDTH_CAP, Optimizations, SearchOptions, SearchReport,
    SearchResult, SearchStats, find_best_width, find_optimal_width_and_river,
};
pub use text::Text;
pub use wrap::{Layout, wrap};

// Re-export the I/O layer used by the CLI
pub use batch::{run_batch, run_batch_with};
pub use input::read_text_file;
pub use render::{SPACE_MARKER, char_width, display_width, render_layout, render_ruler};
