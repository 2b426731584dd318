//! Query parsing, mode detection, and evaluation.

pub mod mode;
pub mod parser;
pub mod search;

pub use mode::{SearchMode, query_words};
pub use parser::parse_queries;
pub use search::{SearchResult, Searcher};
