//! Inverted index: case-folded term to raw location tokens.

use ahash::AHashMap;

use crate::error::Result;
use crate::index::split_record;

/// Mapping from lowercased term to its raw `file:line:field` tokens.
///
/// Tokens keep the order they had in the source records; that insertion
/// order is the only ordering guarantee. Term insertion order is also kept,
/// for previews.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: Vec<String>,
    postings: AHashMap<String, Vec<String>>,
}

impl InvertedIndex {
    /// Build the index from raw record lines.
    ///
    /// Each record is `term<TAB>csv-of-location-tokens`; empty CSV tokens
    /// are discarded. A duplicate term across records is an error condition
    /// in the source data and is not merged: the last record for the key
    /// wins.
    pub fn build<S: AsRef<str>>(records: &[S]) -> Result<Self> {
        let mut index = InvertedIndex::default();
        for record in records {
            let (term, csv) = split_record(record.as_ref())?;
            let term = term.to_lowercase();
            let tokens: Vec<String> = csv
                .split(',')
                .filter(|token| !token.is_empty())
                .map(|token| token.to_string())
                .collect();
            if !index.postings.contains_key(&term) {
                index.terms.push(term.clone());
            }
            index.postings.insert(term, tokens);
        }
        Ok(index)
    }

    /// Whether `term` is a key of the index. Lookups are exact-match on the
    /// folded term; callers fold query words before calling.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Raw location tokens for `term`, in source order.
    pub fn postings(&self, term: &str) -> Option<&[String]> {
        self.postings.get(term).map(|tokens| tokens.as_slice())
    }

    /// Index terms in first-insertion order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the index has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
