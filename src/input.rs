use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SortError};

/// How tokens that are not plain integers are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Every non-empty token must be an integer.
    #[default]
    Strict,
    /// Strip everything except digits, `-`, `,` and line breaks before parsing.
    Lenient,
}

/// Reads a comma or line separated list of integers from `path`.
pub fn read_numbers(path: impl AsRef<Path>, mode: ParseMode) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SortError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let numbers = parse_numbers(&content, mode)?;
    debug!("read {} numbers from {}", numbers.len(), path.display());
    Ok(numbers)
}

/// Parses integers separated by commas or line breaks. Whitespace around
/// tokens and empty tokens (trailing commas, blank lines) are ignored.
pub fn parse_numbers(content: &str, mode: ParseMode) -> Result<Vec<i64>> {
    let sanitized;
    let content = match mode {
        ParseMode::Strict => content,
        ParseMode::Lenient => {
            sanitized = content
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(*c, '-' | ',' | '\n'))
                .collect::<String>();
            sanitized.as_str()
        }
    };

    let mut numbers = Vec::new();
    for (index, token) in content.split([',', '\n']).enumerate() {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = token.parse::<i64>().map_err(|source| SortError::Parse {
            index,
            token: token.to_string(),
            source,
        })?;
        numbers.push(value);
    }

    if numbers.is_empty() {
        return Err(SortError::EmptyInput);
    }
    Ok(numbers)
}

/// Writes `values` in the format [`read_numbers`] accepts.
pub fn write_numbers(path: impl AsRef<Path>, values: &[i64]) -> Result<()> {
    let path = path.as_ref();
    let content = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    fs::write(path, content + "\n").map_err(|source| SortError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_plain_list() {
        let numbers = parse_numbers("15,53,1,24,3", ParseMode::Strict).unwrap();
        assert_eq!(numbers, vec![15, 53, 1, 24, 3]);
    }

    #[test]
    fn parse_whitespace_and_trailing_comma() {
        let numbers = parse_numbers(" 4, -2 ,\n7,\n-10,\n", ParseMode::Strict).unwrap();
        assert_eq!(numbers, vec![4, -2, 7, -10]);
    }

    #[test]
    fn parse_newline_separated() {
        let numbers = parse_numbers("1,2\n3,4\n", ParseMode::Strict).unwrap();
        assert_eq!(numbers, vec![1, 2, 3, 4]);

        let numbers = parse_numbers("5\r\n-6\r\n7", ParseMode::Strict).unwrap();
        assert_eq!(numbers, vec![5, -6, 7]);

        let numbers = parse_numbers("1,2\n3,4\n", ParseMode::Lenient).unwrap();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn read_line_wrapped_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "1,2\n3,4\n").unwrap();
        let numbers = read_numbers(file.path(), ParseMode::Strict).unwrap();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn parse_reports_bad_token_position() {
        let err = parse_numbers("1,2,x3,4", ParseMode::Strict).unwrap_err();
        match err {
            SortError::Parse { index, token, .. } => {
                assert_eq!(index, 2);
                assert_eq!(token, "x3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lenient_strips_noise() {
        let numbers = parse_numbers("[1, 2a, -3]\r\n", ParseMode::Lenient).unwrap();
        assert_eq!(numbers, vec![1, 2, -3]);
    }

    #[test]
    fn parse_rejects_overflow() {
        let err = parse_numbers("99999999999999999999", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, SortError::Parse { index: 0, .. }));
    }

    #[test]
    fn empty_content_is_an_error() {
        assert!(matches!(
            parse_numbers(" ,\n", ParseMode::Strict),
            Err(SortError::EmptyInput)
        ));
    }

    #[test]
    fn read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "3,1,2").unwrap();
        let numbers = read_numbers(file.path(), ParseMode::Strict).unwrap();
        assert_eq!(numbers, vec![3, 1, 2]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listofnumbers.txt");
        let err = read_numbers(&path, ParseMode::Strict).unwrap_err();
        assert!(matches!(err, SortError::Io { .. }));
        assert!(err.to_string().starts_with("Error reading the input file"));
    }

    #[test]
    fn written_numbers_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numbers.txt");
        write_numbers(&path, &[5, -1, 0]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "5,-1,0\n");
        assert_eq!(read_numbers(&path, ParseMode::Strict).unwrap(), vec![5, -1, 0]);
    }
}
