//! Boolean search modes and their detection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Boolean mode of one query expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    /// Lines containing every term.
    And,
    /// Lines containing any term.
    Or,
    /// Lines containing the first term but none of the rest.
    Not,
    /// Exact phrase: consecutive fields on one line.
    Quote,
}

impl SearchMode {
    /// Operator keywords in detection priority order.
    const KEYWORDS: [(SearchMode, &'static str); 3] = [
        (SearchMode::And, "AND"),
        (SearchMode::Or, "OR"),
        (SearchMode::Not, "NOT"),
    ];

    /// The keyword (or `QUOTE`) naming this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::And => "AND",
            SearchMode::Or => "OR",
            SearchMode::Not => "NOT",
            SearchMode::Quote => "QUOTE",
        }
    }

    /// Classify an expression: the first keyword in priority order
    /// `AND` > `OR` > `NOT` appearing anywhere in the string wins; no
    /// keyword means the expression is a literal phrase.
    ///
    /// Detection is substring containment, not a tokenized word match, so
    /// an uppercase term like `ANDROID` is classified as an `AND`
    /// expression. Carried over as-is from the source system.
    pub fn detect(expr: &str) -> SearchMode {
        for (mode, keyword) in SearchMode::KEYWORDS {
            if expr.contains(keyword) {
                return mode;
            }
        }
        SearchMode::Quote
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split an expression into its lowercased query words.
///
/// The delimiter is the mode's keyword, or a single space for a phrase.
pub fn query_words(expr: &str, mode: SearchMode) -> Vec<String> {
    let delim = match mode {
        SearchMode::Quote => " ",
        other => other.as_str(),
    };
    expr.split(delim)
        .map(|word| word.trim().to_lowercase())
        .collect()
}
