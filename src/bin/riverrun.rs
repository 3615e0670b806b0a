//! `riverrun` — typographic river search CLI
//!
//! Finds the line width that wraps a text into the layout with the longest
//! river of aligned spaces.
//!
//! # Usage
//!
//! ```bash
//! riverrun < cases.txt                 # batch protocol: T, then T lines
//! riverrun sample.txt other.txt        # one report per file
//! riverrun --text "a a a a a a a a"    # one-shot
//! riverrun --text "..." --json         # machine-readable one-shot
//! riverrun sample.txt --visualize      # report plus starred layout
//! riverrun --text "..." --compare      # breakpoint skipping vs. plain walk
//! ```

use riverrun::{
    LogLevel, Optimizations, SearchOptions, SearchReport, Text, char_width, display_width,
    find_best_width, read_text_file, render_layout, render_ruler, run_batch_with,
    set_log_callback, wrap,
};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "riverrun - find the wrap width with the longest typographic river

USAGE:
    riverrun [OPTIONS] [FILE]...

With no FILE and no --text, reads the batch protocol from stdin: a case
count T, then T lines of text, answering \"<width> <river>\" per case.
With FILEs, analyzes the first line of each and prints one report per file.

OPTIONS:
    -h, --help              Print this help message and exit
    --text <STRING>         Analyze STRING instead of files or stdin

    --cap <N>               Ceiling on explored widths (default: 5000)
    --horizon <N>           Breakpoint scan horizon (default: 50)
    --jumps                 Skip runs of widths that wrap identically
    --no-prune              Measure every layout, even provably losing ones
    --no-early-stop         Keep searching after a full-height river

    --visualize             Print the winning layout with spaces starred
    --visualize-limit <N>   Only visualize texts under N characters
                            (default: 200)
    --json                  Report as one JSON object (requires --text)
    --compare               Run breakpoint skipping against the plain
                            exhaustive walk and report both timings
    --verbose               Print search counters and library diagnostics

EXAMPLES:
    riverrun < cases.txt                    # grading interface
    riverrun essay.txt --visualize          # where does the river run?
    riverrun --text \"la la la la\" --json
    riverrun essay.txt --compare --cap 800
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
#[allow(clippy::struct_excessive_bools)] // Config naturally has many boolean flags
pub struct Config {
    // Input selection
    pub files: Vec<PathBuf>,
    pub text: Option<String>,

    // Search tuning
    pub width_cap: usize,
    pub skip_horizon: usize,
    pub jumps: bool,
    pub no_prune: bool,
    pub no_early_stop: bool,

    // Reporting
    pub visualize: bool,
    pub visualize_limit: usize,
    pub json: bool,
    pub compare: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            text: None,
            width_cap: riverrun::DEFAULT_WIDTH_CAP,
            skip_horizon: riverrun::DEFAULT_SKIP_HORIZON,
            jumps: false,
            no_prune: false,
            no_early_stop: false,
            visualize: false,
            visualize_limit: 200,
            json: false,
            compare: false,
            verbose: false,
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--text" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--text requires a value".to_string()),
                    };
                    config.text = Some(value);
                }

                "--cap" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--cap requires a value".to_string()),
                    };
                    match value.parse::<usize>() {
                        Ok(n) => config.width_cap = n,
                        Err(_) => {
                            return ParseResult::Error(format!("Invalid --cap value: {value}"));
                        }
                    }
                }

                "--horizon" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error("--horizon requires a value".to_string());
                        }
                    };
                    match value.parse::<usize>() {
                        Ok(n) => config.skip_horizon = n,
                        Err(_) => {
                            return ParseResult::Error(format!("Invalid --horizon value: {value}"));
                        }
                    }
                }

                "--jumps" => config.jumps = true,
                "--no-prune" => config.no_prune = true,
                "--no-early-stop" => config.no_early_stop = true,

                "--visualize" => config.visualize = true,

                "--visualize-limit" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error(
                                "--visualize-limit requires a value".to_string(),
                            );
                        }
                    };
                    match value.parse::<usize>() {
                        Ok(n) => config.visualize_limit = n,
                        Err(_) => {
                            return ParseResult::Error(format!(
                                "Invalid --visualize-limit value: {value}"
                            ));
                        }
                    }
                }

                "--json" => config.json = true,
                "--compare" => config.compare = true,
                "--verbose" => config.verbose = true,

                other => {
                    if other.starts_with('-') {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    config.files.push(PathBuf::from(other));
                }
            }
        }

        if config.json && config.text.is_none() {
            return ParseResult::Error("--json requires --text".to_string());
        }
        if config.compare && config.text.is_none() && config.files.is_empty() {
            return ParseResult::Error("--compare requires --text or a FILE".to_string());
        }

        ParseResult::Config(config)
    }

    /// Search options derived from the tuning flags.
    #[must_use]
    pub fn search_options(&self) -> SearchOptions {
        let mut optimizations = Optimizations::default();
        if self.no_prune {
            optimizations.remove(Optimizations::PRUNE_SHORT_LAYOUTS);
        }
        if self.no_early_stop {
            optimizations.remove(Optimizations::EARLY_STOP);
        }
        if self.jumps {
            optimizations.insert(Optimizations::SKIP_BREAKPOINTS);
        }
        SearchOptions::default()
            .with_width_cap(self.width_cap)
            .with_skip_horizon(self.skip_horizon)
            .with_optimizations(optimizations)
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if config.verbose {
                set_log_callback(|level: LogLevel, msg: &str| eprintln!("[{level}] {msg}"));
            }
            let exit_code = run(&config);
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Dispatch to the selected mode; returns the process exit code.
fn run(config: &Config) -> i32 {
    let options = config.search_options();

    if let Some(raw) = &config.text {
        return if config.compare {
            run_compare("text", raw, config)
        } else {
            report_text("text", raw, config, &options);
            0
        };
    }

    if !config.files.is_empty() {
        return run_files(config, &options);
    }

    run_batch_stdin(&options)
}

// ============================================================================
// Batch Mode
// ============================================================================

/// Answer the count-prefixed protocol from stdin on stdout.
fn run_batch_stdin(options: &SearchOptions) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_batch_with(stdin.lock(), stdout.lock(), options) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

// ============================================================================
// File Mode
// ============================================================================

/// One report per file; keeps going past per-file errors.
fn run_files(config: &Config, options: &SearchOptions) -> i32 {
    let mut errors = 0usize;
    for path in &config.files {
        let label = path.display().to_string();
        match read_text_file(path) {
            Ok(raw) => {
                if config.compare {
                    if run_compare(&label, &raw, config) != 0 {
                        errors += 1;
                    }
                } else {
                    report_text(&label, &raw, config, options);
                }
            }
            Err(e) => {
                eprintln!("Error: {label}: {e}");
                errors += 1;
            }
        }
    }
    if config.files.len() > 1 {
        println!("{} texts, {} errors", config.files.len(), errors);
    }
    i32::from(errors > 0)
}

// ============================================================================
// Reporting
// ============================================================================

/// Run one search and print the report for it.
fn report_text(label: &str, raw: &str, config: &Config, options: &SearchOptions) {
    let text = Text::parse(raw);
    let start = Instant::now();
    let report = find_best_width(&text, options);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if config.json {
        println!("{}", json_report(&text, &report));
        return;
    }

    println!(
        "{label}: width {}, river {} ({} widths probed, {elapsed_ms:.2} ms)",
        report.result.width, report.result.river, report.stats.widths_probed,
    );
    if config.verbose {
        print_stats(&report);
    }
    if config.visualize && text.char_len() < config.visualize_limit {
        print_visualization(&text, report.result.width);
    }
}

/// Indented counter block under a report line.
fn print_stats(report: &SearchReport) {
    println!("  widths probed:   {}", report.stats.widths_probed);
    println!("  layouts built:   {}", report.stats.layouts_built);
    println!("  rivers measured: {}", report.stats.rivers_measured);
    println!("  layouts pruned:  {}", report.stats.layouts_pruned);
    println!("  widths skipped:  {}", report.stats.widths_skipped);
    println!("  scan wraps:      {}", report.stats.scan_wraps);
    println!("  early stopped:   {}", report.stats.early_stopped);
}

/// The winning layout with spaces starred, under a column ruler.
fn print_visualization(text: &Text<'_>, width: usize) {
    let Some(layout) = wrap(text, width) else {
        return;
    };
    if layout.is_empty() {
        return;
    }
    println!("{}", render_ruler(char_width(&layout)));
    println!("{}", render_layout(&layout));
    if display_width(&layout) != char_width(&layout) {
        println!("(wide glyphs present: terminal columns will not match the ruler)");
    }
}

/// One-line JSON object for scripting; field names are stable.
fn json_report(text: &Text<'_>, report: &SearchReport) -> String {
    format!(
        concat!(
            "{{\"text_chars\":{},\"min_width\":{},\"width\":{},\"river\":{},",
            "\"stats\":{{\"widths_probed\":{},\"layouts_built\":{},\"rivers_measured\":{},",
            "\"layouts_pruned\":{},\"widths_skipped\":{},\"scan_wraps\":{},",
            "\"early_stopped\":{}}}}}"
        ),
        text.char_len(),
        text.longest_word_len(),
        report.result.width,
        report.result.river,
        report.stats.widths_probed,
        report.stats.layouts_built,
        report.stats.rivers_measured,
        report.stats.layouts_pruned,
        report.stats.widths_skipped,
        report.stats.scan_wraps,
        report.stats.early_stopped,
    )
}

// ============================================================================
// Compare Mode
// ============================================================================

/// Race breakpoint skipping against the plain exhaustive walk.
///
/// Both arms run with pruning and early-stop off so the whole width range is
/// walked; the only difference is the jumping. The results must agree.
fn run_compare(label: &str, raw: &str, config: &Config) -> i32 {
    let text = Text::parse(raw);
    let plain_options = SearchOptions::exhaustive()
        .with_width_cap(config.width_cap)
        .with_skip_horizon(config.skip_horizon);
    let jump_options = plain_options
        .clone()
        .with_optimizations(Optimizations::SKIP_BREAKPOINTS);

    let start = Instant::now();
    let jumps = find_best_width(&text, &jump_options);
    let jumps_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    let plain = find_best_width(&text, &plain_options);
    let plain_ms = start.elapsed().as_secs_f64() * 1000.0;

    println!(
        "{label}: with jumps:    width {}, river {} ({} widths probed, {} wraps, {jumps_ms:.2} ms)",
        jumps.result.width,
        jumps.result.river,
        jumps.stats.widths_probed,
        jumps.stats.total_wraps(),
    );
    println!(
        "{label}: without jumps: width {}, river {} ({} widths probed, {} wraps, {plain_ms:.2} ms)",
        plain.result.width,
        plain.result.river,
        plain.stats.widths_probed,
        plain.stats.total_wraps(),
    );

    if jumps.result == plain.result {
        let speedup = if jumps_ms > 0.0 { plain_ms / jumps_ms } else { 1.0 };
        println!("{label}: results identical, speedup {speedup:.2}x");
        0
    } else {
        eprintln!("Error: {label}: strategies disagree; this is a bug");
        1
    }
}

// ============================================================================
// Tests
// ============================================================================
