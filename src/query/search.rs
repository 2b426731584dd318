//! Query evaluation against the inverted index.

use ahash::{AHashMap, AHashSet};

use crate::index::InvertedIndex;
use crate::location::{self, DocLocation};
use crate::query::SearchMode;

/// Outcome of evaluating one query expression.
///
/// `Unsatisfiable` means a required term is absent from the index
/// entirely; it is distinct from `Matches` with an empty sequence, where
/// every required term exists but no location passes the mode's
/// predicate. The two must stay distinguishable end to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A required term is not a key of the index.
    Unsatisfiable,
    /// The matched locations, possibly empty. Phrase results may contain
    /// duplicates when accepted combinations overlap.
    Matches(Vec<DocLocation>),
}

impl SearchResult {
    /// Whether this is the unsatisfiable sentinel.
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, SearchResult::Unsatisfiable)
    }

    /// The matched locations, or `None` for the unsatisfiable sentinel.
    pub fn matches(&self) -> Option<&[DocLocation]> {
        match self {
            SearchResult::Unsatisfiable => None,
            SearchResult::Matches(locations) => Some(locations),
        }
    }
}

/// Evaluates boolean and phrase queries against an immutable inverted
/// index.
///
/// Evaluation is a pure function of `(index, words, mode)`; the searcher
/// holds no state of its own, so one searcher can evaluate any number of
/// queries against the same loaded index.
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'a> {
    index: &'a InvertedIndex,
}

impl<'a> Searcher<'a> {
    /// Create a searcher over `index`.
    pub fn new(index: &'a InvertedIndex) -> Self {
        Searcher { index }
    }

    /// Evaluate lowercased `words` under `mode`.
    pub fn search(&self, words: &[String], mode: SearchMode) -> SearchResult {
        if words.is_empty() || !self.keys_ok(words, mode) {
            return SearchResult::Unsatisfiable;
        }
        match mode {
            SearchMode::And | SearchMode::Or => self.search_set(words, mode),
            SearchMode::Not => self.search_not(words),
            SearchMode::Quote => self.search_quote(words),
        }
    }

    /// Pre-check over the index keys. AND and QUOTE need every word
    /// present, OR needs at least one, NOT needs the first.
    fn keys_ok(&self, words: &[String], mode: SearchMode) -> bool {
        match mode {
            SearchMode::And | SearchMode::Quote => {
                words.iter().all(|word| self.index.contains_term(word))
            }
            SearchMode::Or => words.iter().any(|word| self.index.contains_term(word)),
            SearchMode::Not => self.index.contains_term(&words[0]),
        }
    }

    /// AND/OR: set algebra over locations reduced to `file:line`.
    ///
    /// Exact field positions are irrelevant to a non-phrase match, so every
    /// token is trimmed to `file:line` before the set operation and the
    /// survivors are re-expanded with the unspecified-field sentinel.
    fn search_set(&self, words: &[String], mode: SearchMode) -> SearchResult {
        let mut reduced: Vec<Vec<&str>> = Vec::with_capacity(words.len());
        for word in words {
            match self.index.postings(word) {
                Some(tokens) => {
                    reduced.push(tokens.iter().map(|t| location::trim_field(t)).collect())
                }
                // OR needs only one word present; an absent word
                // contributes nothing to the union. AND requires every
                // word, so an absent one is unsatisfiable.
                None if mode == SearchMode::Or => continue,
                None => return SearchResult::Unsatisfiable,
            }
        }

        let keys = match mode {
            SearchMode::And => intersect_keys(&reduced),
            _ => union_keys(&reduced),
        };
        SearchResult::Matches(expand_keys(&keys))
    }

    /// NOT: occurrences of the first word on lines where none of the
    /// remaining words occur.
    ///
    /// The remaining words form an AND-mode sub-query. If that sub-query
    /// is unsatisfiable, the exclusion has no effect and the first word's
    /// matches are returned unchanged.
    fn search_not(&self, words: &[String]) -> SearchResult {
        let first = match self.search(&words[..1], SearchMode::And) {
            SearchResult::Matches(locations) => locations,
            SearchResult::Unsatisfiable => return SearchResult::Unsatisfiable,
        };
        let excluded = match self.search(&words[1..], SearchMode::And) {
            SearchResult::Matches(locations) => locations,
            SearchResult::Unsatisfiable => return SearchResult::Matches(first),
        };

        let excluded: AHashSet<(&str, u32)> = excluded
            .iter()
            .map(|loc| (loc.file.as_str(), loc.line))
            .collect();
        let kept = first
            .into_iter()
            .filter(|loc| !excluded.contains(&(loc.file.as_str(), loc.line)))
            .collect();
        SearchResult::Matches(kept)
    }

    /// QUOTE: occurrences of the words as consecutive fields on one line.
    ///
    /// All words' exact triples are flattened, in word order, into one
    /// pool, and every size-k combination of the pool (k = word count) is
    /// a match iff its entries share one file and line and their fields
    /// increase by exactly 1 in the combination's generated order. The
    /// pool order, not the field order, drives the consecutiveness check;
    /// carried over as-is from the source system.
    ///
    /// Combinations drawn across two files or lines can never match, so
    /// the pool is pre-grouped by `(file, line)` and combinations are
    /// enumerated within each group. That keeps the accepted multiset
    /// identical while avoiding the `C(n, k)` blow-up over the whole pool
    /// for common short terms.
    fn search_quote(&self, words: &[String]) -> SearchResult {
        let mut pool: Vec<DocLocation> = Vec::new();
        for word in words {
            let Some(tokens) = self.index.postings(word) else {
                return SearchResult::Unsatisfiable;
            };
            for token in tokens {
                if let Some((file, line, field)) = location::parse_location(token) {
                    pool.push(DocLocation::new(file, line, field as i32));
                }
            }
        }

        let mut order: Vec<(String, u32)> = Vec::new();
        let mut groups: AHashMap<(String, u32), Vec<DocLocation>> = AHashMap::new();
        for loc in pool {
            let key = (loc.file.clone(), loc.line);
            if !groups.contains_key(&key) {
                order.push(key.clone());
            }
            groups.entry(key).or_default().push(loc);
        }

        let mut matches = Vec::new();
        for key in &order {
            let Some(group) = groups.get(key) else {
                continue;
            };
            if group.len() < words.len() {
                continue;
            }
            for combo in Combinations::new(group.len(), words.len()) {
                if consecutive(group, &combo) {
                    matches.extend(combo.iter().map(|&i| group[i].clone()));
                }
            }
        }
        SearchResult::Matches(matches)
    }
}

/// Whether the fields of the chosen entries increase by exactly 1, taken
/// in the combination's generated order.
fn consecutive(group: &[DocLocation], combo: &[usize]) -> bool {
    combo
        .windows(2)
        .all(|pair| group[pair[0]].field + 1 == group[pair[1]].field)
}

/// Ordered intersection: keys of the first list, in order, that appear in
/// every other list. Duplicate keys are emitted once.
fn intersect_keys<'t>(lists: &[Vec<&'t str>]) -> Vec<&'t str> {
    let rest: Vec<AHashSet<&str>> = lists[1..]
        .iter()
        .map(|list| list.iter().copied().collect())
        .collect();
    let mut seen = AHashSet::new();
    let mut keys = Vec::new();
    for &key in &lists[0] {
        if seen.insert(key) && rest.iter().all(|set| set.contains(key)) {
            keys.push(key);
        }
    }
    keys
}

/// Ordered union: every key, in first-appearance order across the lists.
fn union_keys<'t>(lists: &[Vec<&'t str>]) -> Vec<&'t str> {
    let mut seen = AHashSet::new();
    let mut keys = Vec::new();
    for list in lists {
        for &key in list {
            if seen.insert(key) {
                keys.push(key);
            }
        }
    }
    keys
}

/// Re-expand reduced `file:line` keys into sentinel-field locations.
/// Keys that no longer decode are dropped.
fn expand_keys(keys: &[&str]) -> Vec<DocLocation> {
    keys.iter()
        .filter_map(|key| location::parse_line_key(key))
        .map(|(file, line)| DocLocation::without_field(file, line))
        .collect()
}

/// Lexicographic k-combinations of `0..n`, as index vectors.
struct Combinations {
    indices: Vec<usize>,
    n: usize,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Combinations {
            indices: (0..k).collect(),
            n,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        let k = self.indices.len();
        if k == 0 {
            self.done = true;
            return Some(current);
        }
        // Advance the rightmost index that has room to move.
        let mut i = k;
        loop {
            i -= 1;
            if self.indices[i] != i + self.n - k {
                break;
            }
            if i == 0 {
                self.done = true;
                return Some(current);
            }
        }
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(current)
    }
}
