//! Text input for the CLI layer.
//!
//! One analyzable text per source: the first line of a file, trimmed. The
//! core never sees empty input; it is rejected here.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read the text to analyze from `path`: the first line, trimmed.
///
/// Errors when the file is missing, unreadable, or its first line holds no
/// text. Later lines are ignored.
pub fn read_text_file(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)?;
    let line = raw.lines().next().map(str::trim).unwrap_or_default();
    if line.is_empty() {
        return Err(Error::EmptyText {
            path: path.display().to_string(),
        });
    }
    Ok(line.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_first_line_trimmed() {
        let file = write_temp("  hello world  \nsecond line ignored\n");
        let text = read_text_file(file.path()).unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let file = write_temp("");
        let err = read_text_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::EmptyText { .. }));
    }

    #[test]
    fn test_blank_first_line_is_rejected() {
        let file = write_temp("   \nreal text on line two\n");
        let err = read_text_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::EmptyText { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_text_file(Path::new("/nonexistent/para-nada.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
