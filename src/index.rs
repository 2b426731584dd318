//! In-memory indexes built from partitioned record files.
//!
//! Both the inverted and the forward index are built from the same raw
//! record lines, each in its own independent pass. They share the record
//! split rule defined here and the token decode rules in
//! [`crate::location`], so neither can drift from the other. Once built,
//! both are immutable for the lifetime of a query session.

pub mod forward;
pub mod inverted;
pub mod loader;

pub use forward::ForwardIndex;
pub use inverted::InvertedIndex;
pub use loader::load_partitions;

use crate::error::{Result, XystonError};

/// Split one raw record line into `(term, locations-csv)`.
///
/// A line without the tab separator means the base index itself is broken,
/// which is fatal to the load.
pub fn split_record(line: &str) -> Result<(&str, &str)> {
    line.split_once('\t').ok_or_else(|| {
        XystonError::index(format!("record line has no tab separator: {line:?}"))
    })
}
