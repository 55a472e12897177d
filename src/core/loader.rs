//! Purpose: File loading for JSON-with-line-comments config files.
//! Exports: `read_commented_json`.
//! Role: Preprocessing seam between the filesystem and `Json::from_bytes`.
//! Invariants: Comment handling is line-oriented; decoding stays in the codec.
//! Invariants: Read failures surface unchanged as `ErrorKind::Io` with the path.

use crate::core::error::{Error, ErrorKind};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads `path` and strips comment lines before JSON decoding.
///
/// Each line is trimmed; lines that are empty after trimming or whose first
/// character is `#` are dropped, and the survivors are concatenated without
/// newlines. Only full-line comments are recognized: a `#` inside a quoted
/// string on a JSON-bearing line is left alone, and a trailing `#` comment
/// after JSON tokens is not supported.
pub fn read_commented_json(path: &Path) -> Result<String, Error> {
    let content = fs::read_to_string(path).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("read failed")
            .with_path(path)
            .with_source(err)
    })?;
    Ok(strip_comment_lines(&content))
}

fn strip_comment_lines(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut dropped = 0usize;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            dropped += 1;
            continue;
        }
        out.push_str(line);
    }
    if dropped > 0 {
        debug!(dropped, "stripped comment and blank lines");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{read_commented_json, strip_comment_lines};
    use crate::core::error::ErrorKind;
    use std::io::Write;

    #[test]
    fn full_line_comments_and_blanks_are_dropped() {
        let input = "  # header\n{\n  \"a\": 1,\n\n  # mid comment\n  \"b\": 2\n}\n";
        assert_eq!(strip_comment_lines(input), "{\"a\": 1,\"b\": 2}");
    }

    #[test]
    fn hash_inside_string_on_json_line_survives() {
        let input = "{\"tag\": \"#42\"}\n# trailing comment line\n";
        assert_eq!(strip_comment_lines(input), "{\"tag\": \"#42\"}");
    }

    #[test]
    fn leading_whitespace_before_hash_still_comments() {
        assert_eq!(strip_comment_lines("\t # indented\n[1]"), "[1]");
    }

    #[test]
    fn missing_file_is_an_io_error_with_path() {
        let err = read_commented_json(std::path::Path::new("/no/such/file.json"))
            .expect_err("missing file");
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("/no/such/file.json"));
    }

    #[test]
    fn reads_real_files() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# generated").expect("write");
        writeln!(file, "{{\"ok\": true}}").expect("write");
        let content = read_commented_json(file.path()).expect("read");
        assert_eq!(content, "{\"ok\": true}");
    }
}
