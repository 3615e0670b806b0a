//! Count-prefixed batch protocol.
//!
//! The first input line is a case count `T`; each of the next `T` lines is
//! one text to analyze. Every case writes `"<width> <river>"` on its own
//! output line, in input order. This is the externally observable contract
//! for automated grading.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::search::{SearchOptions, find_best_width};
use crate::text::Text;

/// Run the batch protocol from `input` to `output` under `options`.
///
/// Input past the declared count is ignored. Empty case lines are legal and
/// report `0 0`; a missing or non-numeric header and a premature end of
/// input are errors.
pub fn run_batch_with<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    options: &SearchOptions,
) -> Result<()> {
    let mut lines = input.lines();
    let header = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(Error::InvalidCount {
                line: String::new(),
            });
        }
    };
    let count: usize = header.trim().parse().map_err(|_| Error::InvalidCount {
        line: header.trim().to_owned(),
    })?;

    for case in 0..count {
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(Error::MissingLine {
                    expected: count,
                    found: case,
                });
            }
        };
        let text = Text::parse(line.trim());
        let report = find_best_width(&text, options);
        writeln!(output, "{} {}", report.result.width, report.result.river)?;
    }
    Ok(())
}

/// [`run_batch_with`] under default search options, the grading
/// configuration.
pub fn run_batch<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    run_batch_with(input, output, &SearchOptions::default())
}
