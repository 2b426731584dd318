//! Word-occurrence locations and their raw token encoding.
//!
//! The upstream job encodes every word occurrence as a `file:line:field`
//! token with 1-based line and field numbers. This module owns the decode
//! rules shared by the index builders and the evaluator: a token with fewer
//! than three colon-separated parts (or a non-numeric line or field) is
//! malformed and is skipped, never raised as an error.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel field value for results where the field position is not tracked.
///
/// Non-phrase boolean operations discard field-level precision, so every
/// AND/OR/NOT result carries this value.
pub const FIELD_UNSPECIFIED: i32 = -1;

/// A single word occurrence: `(file, line, field)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocLocation {
    /// Name of the source document.
    pub file: String,
    /// 1-based line number within the document.
    pub line: u32,
    /// 1-based field (word) position within the line, or
    /// [`FIELD_UNSPECIFIED`].
    pub field: i32,
}

impl DocLocation {
    /// Create a location with an exact field position.
    pub fn new<S: Into<String>>(file: S, line: u32, field: i32) -> Self {
        DocLocation {
            file: file.into(),
            line,
            field,
        }
    }

    /// Create a location whose field position is not tracked.
    pub fn without_field<S: Into<String>>(file: S, line: u32) -> Self {
        DocLocation {
            file: file.into(),
            line,
            field: FIELD_UNSPECIFIED,
        }
    }

    /// Whether this location carries an exact field position.
    pub fn has_field(&self) -> bool {
        self.field > 0
    }
}

impl fmt::Display for DocLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.field)
    }
}

/// Decode a raw `file:line:field` token.
///
/// Returns `None` for malformed tokens: fewer than three parts, or a line
/// or field that is not a number. Parts beyond the third are ignored. A
/// field above `i32::MAX` is also rejected here, so decoded fields always
/// fit [`DocLocation::field`] without wrapping into the sentinel range.
pub fn parse_location(token: &str) -> Option<(String, u32, u32)> {
    let parts: Vec<&str> = token.split(':').collect();
    if parts.len() < 3 {
        return None;
    }
    let line = parts[1].parse().ok()?;
    let field: u32 = parts[2].parse().ok()?;
    if field > i32::MAX as u32 {
        return None;
    }
    Some((parts[0].to_string(), line, field))
}

/// Reduce a raw token to `file:line` by dropping the trailing field part.
///
/// A token with no colon at all reduces to the empty string.
pub fn trim_field(token: &str) -> &str {
    token.rsplit_once(':').map(|(head, _)| head).unwrap_or("")
}

/// Decode a reduced `file:line` key back into `(file, line)`.
pub fn parse_line_key(key: &str) -> Option<(String, u32)> {
    let parts: Vec<&str> = key.split(':').collect();
    if parts.len() < 2 {
        return None;
    }
    let line = parts[1].parse().ok()?;
    Some((parts[0].to_string(), line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        assert_eq!(
            parse_location("file1.txt:3:7"),
            Some(("file1.txt".to_string(), 3, 7))
        );
    }

    #[test]
    fn test_parse_location_malformed() {
        assert_eq!(parse_location("file1.txt:3"), None);
        assert_eq!(parse_location("file1.txt"), None);
        assert_eq!(parse_location(""), None);
        assert_eq!(parse_location("file1.txt:x:7"), None);
        assert_eq!(parse_location("file1.txt:3:y"), None);
    }

    #[test]
    fn test_parse_location_field_must_fit_i32() {
        // A field above i32::MAX would wrap into the sentinel range.
        assert_eq!(parse_location("file1.txt:1:3000000000"), None);
        assert_eq!(
            parse_location("file1.txt:1:2147483647"),
            Some(("file1.txt".to_string(), 1, i32::MAX as u32))
        );
    }

    #[test]
    fn test_parse_location_extra_parts_ignored() {
        assert_eq!(
            parse_location("file1.txt:3:7:9"),
            Some(("file1.txt".to_string(), 3, 7))
        );
    }

    #[test]
    fn test_trim_field() {
        assert_eq!(trim_field("file1.txt:3:7"), "file1.txt:3");
        assert_eq!(trim_field("file1.txt:3"), "file1.txt");
        assert_eq!(trim_field("file1.txt"), "");
    }

    #[test]
    fn test_parse_line_key() {
        assert_eq!(
            parse_line_key("file1.txt:3"),
            Some(("file1.txt".to_string(), 3))
        );
        assert_eq!(parse_line_key("file1.txt"), None);
        assert_eq!(parse_line_key("file1.txt:x"), None);
    }

    #[test]
    fn test_doc_location_display() {
        let loc = DocLocation::new("file1.txt", 2, 5);
        assert_eq!(loc.to_string(), "file1.txt:2:5");
        assert!(loc.has_field());

        let loc = DocLocation::without_field("file1.txt", 2);
        assert_eq!(loc.field, FIELD_UNSPECIFIED);
        assert!(!loc.has_field());
    }
}
