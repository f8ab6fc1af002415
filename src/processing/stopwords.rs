//! Stopword filtering
//!
//! The English list is the NLTK list bundled with the `stop-words` crate, so
//! building a filter never touches the network or the filesystem. Build one
//! filter up front and hand it to the
//! [`TextNormalizer`](crate::processing::text_processor::TextNormalizer).

use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from token streams
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Filter backed by the NLTK English list
    pub fn english() -> Self {
        Self {
            stopwords: get(LANGUAGE::English)
                .iter()
                .map(|word| word.to_lowercase())
                .collect(),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.stopwords.insert(word.to_lowercase());
            }
        }
        self
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::english();

        assert!(filter.len() >= 179);
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("ourselves"));
        assert!(!filter.is_stopword("python"));
        assert!(!filter.is_stopword("development"));
    }

    #[test]
    fn test_extra_stopwords() {
        let english = StopwordFilter::english();
        let filter = english.clone().with_extra(["Resume", " ", "cv"]);

        assert!(filter.is_stopword("resume"));
        assert!(filter.is_stopword("CV"));
        assert_eq!(filter.len(), english.len() + 2);
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }
}
