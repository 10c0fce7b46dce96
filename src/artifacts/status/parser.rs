//! Status report parser
//!
//! A report is a sequence of lines, each made of a two-character state code
//! (index column, then working-tree column), one space, and either a path or
//! `old -> new` when either column reports a rename or a copy.
//!
//! git wraps a path in double quotes and escapes it like a C string when it
//! holds whitespace, quotes, backslashes or control characters. Such paths
//! are decoded here, so a ` -> ` inside a quoted path is never a separator.
//!
//! Parsing is all-or-nothing: the first bad line rejects the whole report so
//! the caller keeps its previous, consistent state.

use crate::artifacts::status::RENAME_SEPARATOR;
use crate::artifacts::status::file_change::FileChange;
use crate::artifacts::status::file_state::FileState;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed status line {line_number} '{line}': {reason}")]
pub struct ParseError {
    pub line_number: usize,
    pub line: String,
    pub reason: ParseErrorReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorReason {
    #[error("expected a two-character state code, a space and a path")]
    Malformed,
    #[error("unknown state code '{0}'")]
    UnknownState(char),
    #[error("rename or copy is missing the ' -> ' separator")]
    MissingRenameTarget,
    #[error("path is empty")]
    EmptyPath,
    #[error("quoted path is unterminated or has an invalid escape")]
    InvalidQuotedPath,
}

pub fn parse(report: &str) -> Result<Vec<FileChange>, ParseError> {
    report
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_number, line)| {
            parse_line(line).map_err(|reason| ParseError {
                line_number,
                line: line.to_string(),
                reason,
            })
        })
        .collect()
}

fn parse_line(line: &str) -> Result<FileChange, ParseErrorReason> {
    let mut chars = line.chars();
    let (Some(primary_code), Some(secondary_code)) = (chars.next(), chars.next()) else {
        return Err(ParseErrorReason::Malformed);
    };

    let primary_state = parse_state(primary_code)?;
    let secondary_state = parse_state(secondary_code)?;
    let paths = chars
        .as_str()
        .strip_prefix(' ')
        .ok_or(ParseErrorReason::Malformed)?;

    if primary_state.is_rename_or_copy() || secondary_state.is_rename_or_copy() {
        let (from, rest) = leading_path(paths, Some(RENAME_SEPARATOR))?;
        let to = rest
            .strip_prefix(RENAME_SEPARATOR)
            .ok_or(ParseErrorReason::MissingRenameTarget)?;
        let to = whole_path(to)?;

        if from.is_empty() || to.is_empty() {
            return Err(ParseErrorReason::EmptyPath);
        }

        return Ok(FileChange::renamed(primary_state, secondary_state, from, to));
    }

    let path = whole_path(paths)?;
    if path.is_empty() {
        return Err(ParseErrorReason::EmptyPath);
    }

    Ok(FileChange::new(primary_state, secondary_state, path))
}

/// A field that must hold exactly one path.
fn whole_path(field: &str) -> Result<String, ParseErrorReason> {
    match leading_path(field, None)? {
        (path, "") => Ok(path),
        _ => Err(ParseErrorReason::Malformed),
    }
}

/// Splits the first path off `field`. A quoted path ends at its closing
/// quote, a bare one at `until` or at the end of the field.
fn leading_path<'a>(
    field: &'a str,
    until: Option<&str>,
) -> Result<(String, &'a str), ParseErrorReason> {
    if field.starts_with('"') {
        return unquote(field);
    }

    let end = until
        .and_then(|separator| field.find(separator))
        .unwrap_or(field.len());
    Ok((field[..end].to_string(), &field[end..]))
}

/// Decodes the C-style quoted path at the start of `field`. Octal escapes are
/// raw bytes; a multi-byte character arrives as several of them.
fn unquote(field: &str) -> Result<(String, &str), ParseErrorReason> {
    let bytes = field.as_bytes();
    let mut decoded = Vec::new();
    let mut index = 1;

    while let Some(&byte) = bytes.get(index) {
        match byte {
            b'"' => {
                let path =
                    String::from_utf8(decoded).map_err(|_| ParseErrorReason::InvalidQuotedPath)?;
                return Ok((path, &field[index + 1..]));
            }
            b'\\' => {
                let escape = *bytes
                    .get(index + 1)
                    .ok_or(ParseErrorReason::InvalidQuotedPath)?;
                let (value, width) = match escape {
                    b'a' => (0x07, 2),
                    b'b' => (0x08, 2),
                    b't' => (b'\t', 2),
                    b'n' => (b'\n', 2),
                    b'v' => (0x0b, 2),
                    b'f' => (0x0c, 2),
                    b'r' => (b'\r', 2),
                    b'"' | b'\\' => (escape, 2),
                    b'0'..=b'3' => {
                        let digits = bytes
                            .get(index + 1..index + 4)
                            .ok_or(ParseErrorReason::InvalidQuotedPath)?;
                        (octal_byte(digits)?, 4)
                    }
                    _ => return Err(ParseErrorReason::InvalidQuotedPath),
                };
                decoded.push(value);
                index += width;
            }
            _ => {
                decoded.push(byte);
                index += 1;
            }
        }
    }

    Err(ParseErrorReason::InvalidQuotedPath)
}

fn octal_byte(digits: &[u8]) -> Result<u8, ParseErrorReason> {
    digits.iter().try_fold(0u8, |value, digit| match digit {
        b'0'..=b'7' => Ok(value * 8 + (digit - b'0')),
        _ => Err(ParseErrorReason::InvalidQuotedPath),
    })
}

fn parse_state(code: char) -> Result<FileState, ParseErrorReason> {
    FileState::from_code(code).ok_or(ParseErrorReason::UnknownState(code))
}
