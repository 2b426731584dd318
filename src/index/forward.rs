//! Forward index: file to term to `(line, field)` occurrences.

use ahash::AHashMap;

use crate::error::Result;
use crate::index::split_record;
use crate::location::{DocLocation, parse_location};

/// Per-file view of the same occurrence data the inverted index holds.
///
/// Built in an independent pass over the same raw records, never derived
/// from the already-built [`InvertedIndex`], so the two stay in agreement
/// through the shared split and decode rules alone.
///
/// [`InvertedIndex`]: crate::index::InvertedIndex
#[derive(Debug, Clone, Default)]
pub struct ForwardIndex {
    files: Vec<String>,
    entries: AHashMap<String, AHashMap<String, Vec<(u32, u32)>>>,
}

impl ForwardIndex {
    /// Build the index from raw record lines.
    ///
    /// Malformed location tokens (fewer than three `:` parts, or a
    /// non-numeric line or field) are skipped silently.
    pub fn build<S: AsRef<str>>(records: &[S]) -> Result<Self> {
        let mut index = ForwardIndex::default();
        for record in records {
            let (term, csv) = split_record(record.as_ref())?;
            let term = term.to_lowercase();
            for token in csv.split(',') {
                let Some((file, line, field)) = parse_location(token) else {
                    continue;
                };
                if !index.entries.contains_key(&file) {
                    index.files.push(file.clone());
                }
                index
                    .entries
                    .entry(file)
                    .or_default()
                    .entry(term.clone())
                    .or_default()
                    .push((line, field));
            }
        }
        Ok(index)
    }

    /// File names in first-insertion order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Occurrences of `term` within `file`, in source order.
    pub fn occurrences(&self, file: &str, term: &str) -> Option<&[(u32, u32)]> {
        self.entries
            .get(file)?
            .get(term)
            .map(|pairs| pairs.as_slice())
    }

    /// The term table for `file`.
    pub fn file_entry(&self, file: &str) -> Option<&AHashMap<String, Vec<(u32, u32)>>> {
        self.entries.get(file)
    }

    /// Number of distinct files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the index has no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whole-file term co-occurrence: every occurrence of every query word,
    /// for each file that contains all of the words.
    ///
    /// Unlike the line-granularity evaluator this keeps the exact field
    /// positions of the occurrences it emits.
    pub fn files_with_all(&self, words: &[String]) -> Vec<DocLocation> {
        let mut results = Vec::new();
        for file in &self.files {
            let Some(entry) = self.entries.get(file) else {
                continue;
            };
            if !words.iter().all(|word| entry.contains_key(word)) {
                continue;
            }
            for word in words {
                let Some(pairs) = entry.get(word) else {
                    continue;
                };
                for &(line, field) in pairs {
                    results.push(DocLocation::new(file.clone(), line, field as i32));
                }
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_groups_by_file() {
        let records = vec![
            "cat\tfile1.txt:1:1,file2.txt:5:2",
            "dog\tfile1.txt:2:4",
        ];
        let index = ForwardIndex::build(&records).unwrap();

        assert_eq!(index.files(), &["file1.txt", "file2.txt"]);
        assert_eq!(index.occurrences("file1.txt", "cat").unwrap(), &[(1, 1)]);
        assert_eq!(index.occurrences("file2.txt", "cat").unwrap(), &[(5, 2)]);
        assert_eq!(index.occurrences("file1.txt", "dog").unwrap(), &[(2, 4)]);
        assert_eq!(index.occurrences("file2.txt", "dog"), None);
    }

    #[test]
    fn test_build_skips_malformed_tokens() {
        let records = vec!["cat\tfile1.txt:1:1,broken,file1.txt:9,file1.txt:2:3"];
        let index = ForwardIndex::build(&records).unwrap();

        assert_eq!(
            index.occurrences("file1.txt", "cat").unwrap(),
            &[(1, 1), (2, 3)]
        );
    }

    #[test]
    fn test_build_skips_fields_beyond_i32() {
        let records = vec!["cat\tfile1.txt:1:3000000000,file1.txt:2:3"];
        let index = ForwardIndex::build(&records).unwrap();

        assert_eq!(index.occurrences("file1.txt", "cat").unwrap(), &[(2, 3)]);
    }

    #[test]
    fn test_files_with_all() {
        let records = vec![
            "cat\tfile1.txt:1:1,file2.txt:5:2",
            "dog\tfile1.txt:2:4",
        ];
        let index = ForwardIndex::build(&records).unwrap();

        let words = vec!["cat".to_string(), "dog".to_string()];
        let results = index.files_with_all(&words);
        assert_eq!(
            results,
            vec![
                DocLocation::new("file1.txt", 1, 1),
                DocLocation::new("file1.txt", 2, 4),
            ]
        );

        let words = vec!["cat".to_string()];
        assert_eq!(index.files_with_all(&words).len(), 2);
    }
}
