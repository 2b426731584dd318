//! # Xyston
//!
//! Boolean and phrase search over a precomputed inverted index.
//!
//! ## Features
//!
//! - AND / OR / NOT set-algebra queries at line granularity
//! - Exact phrase (QUOTE) matching at field granularity
//! - Forward index derived from the same partition records
//! - Tab-separated `part-*` partition loading
//!
//! The engine answers queries against one fully materialized, immutable
//! index per process run: both indexes are built once at load time and
//! never mutated, and a query is evaluated as a pure function over them.

pub mod cli;
pub mod error;
pub mod index;
pub mod location;
pub mod query;

pub mod prelude {
    //! Commonly used types, re-exported.

    pub use crate::error::{Result, XystonError};
    pub use crate::index::{ForwardIndex, InvertedIndex, load_partitions};
    pub use crate::location::{DocLocation, FIELD_UNSPECIFIED};
    pub use crate::query::{SearchMode, SearchResult, Searcher, parse_queries, query_words};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
