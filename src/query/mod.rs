// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Query word preparation.
//!
//! Candidate words arrive as an arbitrary stream of strings. Before matching,
//! each word is trimmed and upper-cased (the same canonical case as the grid),
//! empty words are dropped, and duplicates collapse to their first occurrence.

use indexmap::IndexSet;
use log::trace;

/// A deduplicated, normalized set of query words.
///
/// Iteration order is the order in which each word first appeared in the
/// input. Ranking relies on this to break ties between equal counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySet {
    words: IndexSet<String>,
}

impl QuerySet {
    /// Normalize and deduplicate `words`.
    ///
    /// # Example
    ///
    /// ```
    /// use word_grid_search::query::QuerySet;
    ///
    /// let query = QuerySet::prepare(["wind", " Wind ", "", "snow"]);
    /// assert_eq!(query.iter().collect::<Vec<_>>(), ["WIND", "SNOW"]);
    /// ```
    pub fn prepare<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = 0usize;
        let words: IndexSet<String> = words
            .into_iter()
            .inspect(|_| seen += 1)
            .map(|word| normalize_word(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        trace!("prepared {} unique words from {} supplied", words.len(), seen);
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

/// Trim surrounding whitespace and fold to upper case.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  cold\t"), "COLD");
        assert_eq!(normalize_word("ChIlL"), "CHILL");
        assert_eq!(normalize_word("   "), "");
    }

    #[test]
    fn test_duplicates_collapse_after_normalization() {
        let query = QuerySet::prepare(["wind", "WIND", " wind", "snow"]);
        assert_eq!(query.len(), 2);
        assert_eq!(query.iter().collect::<Vec<_>>(), ["WIND", "SNOW"]);
    }

    #[test]
    fn test_blank_words_are_dropped() {
        let query = QuerySet::prepare(["  ", "", "\n", "cold "]);
        assert_eq!(query.iter().collect::<Vec<_>>(), ["COLD"]);
    }

    #[test]
    fn test_all_blank_is_empty() {
        assert!(QuerySet::prepare(["", " "]).is_empty());
        assert!(QuerySet::prepare(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_first_occurrence_keeps_its_position() {
        let query = QuerySet::prepare(["b", "a", "B", "c", "a"]);
        assert_eq!(query.iter().collect::<Vec<_>>(), ["B", "A", "C"]);
    }
}
