//! Parsing of user-supplied numbers.
use crate::common::error::{Result, SortKitError};

/// Parse a single integer, ignoring surrounding whitespace.
pub fn parse_number(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| SortKitError::InvalidNumber {
            input: trimmed.to_string(),
            line: 1,
        })
}

/// Parse an integer and require `min <= value <= max`.
pub fn parse_bounded(text: &str, min: i64, max: i64) -> Result<i64> {
    let value = parse_number(text)?;
    if crate::verify::is_valid_range(value, min, max) {
        Ok(value)
    } else {
        Err(SortKitError::OutOfRange { value, min, max })
    }
}

/// Parse every whitespace-separated integer in `data`.
///
/// Blank lines are skipped. The first token that is not an integer is
/// reported with its 1-based line number.
pub fn parse_numbers(data: &[u8]) -> Result<Vec<i64>> {
    let mut numbers = Vec::new();
    let mut start = 0;
    let mut line_no = 1;

    for pos in memchr::memchr_iter(b'\n', data) {
        parse_line(&data[start..pos], line_no, &mut numbers)?;
        start = pos + 1;
        line_no += 1;
    }
    if start < data.len() {
        parse_line(&data[start..], line_no, &mut numbers)?;
    }

    Ok(numbers)
}

fn parse_line(line: &[u8], line_no: usize, out: &mut Vec<i64>) -> Result<()> {
    for token in line
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty())
    {
        let value = std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| SortKitError::InvalidNumber {
                input: String::from_utf8_lossy(token).into_owned(),
                line: line_no,
            })?;
        out.push(value);
    }
    Ok(())
}

/// True for `y` or `yes` in any case.
pub fn parse_yes_no(text: &str) -> bool {
    let answer = text.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
