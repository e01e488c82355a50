//! String helpers

use crate::result::EngageResult;
use crate::value::Value;

/// Strip leading and trailing spaces, tabs, newlines and carriage returns
pub fn trim(s: &str) -> String {
    s.trim_matches([' ', '\t', '\n', '\r']).to_string()
}

/// Uppercase the string
pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Lowercase the string
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Length of the string in characters
pub fn length(s: &str) -> usize {
    s.chars().count()
}

/// Split the string on every occurrence of the delimiter.
///
/// A delimiter that never occurs yields a single part holding the whole
/// string. The empty delimiter is a usage failure.
pub fn split(s: &str, delimiter: &str) -> EngageResult<Vec<String>> {
    if delimiter.is_empty() {
        return EngageResult::Error("split() expects a non-empty delimiter.".to_string());
    }
    EngageResult::Ok(s.split(delimiter).map(String::from).collect())
}

/// Extract the characters from `start` up to `end` (exclusive), or to the
/// end of the string when `end` is `None`.
///
/// A start past the end of the string and an end before the start are
/// usage failures; an end past the string is clamped.
pub fn substring(s: &str, start: usize, end: Option<usize>) -> EngageResult<String> {
    let char_count = length(s);
    if start > char_count {
        return EngageResult::Error("substring() start index exceeds string length.".to_string());
    }
    let end = match end {
        Some(e) if e < start => {
            return EngageResult::Error(
                "substring() end index cannot be less than start index.".to_string(),
            );
        }
        Some(e) => e.min(char_count),
        None => char_count,
    };
    EngageResult::Ok(s.chars().skip(start).take(end - start).collect())
}

/// Join the textual views of the parts with the delimiter between them
pub fn join(delimiter: &str, parts: &[Value]) -> String {
    parts
        .iter()
        .map(|part| part.to_string())
        .collect::<Vec<_>>()
        .join(delimiter)
}
