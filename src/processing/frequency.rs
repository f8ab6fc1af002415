//! Token frequency distributions

use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;
use std::collections::HashMap;

/// Occurrence counts per distinct token, iterated in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyDistribution {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    total: usize,
}

impl FrequencyDistribution {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut distribution = Self::default();
        for token in tokens {
            distribution.add(token.as_ref());
        }
        distribution
    }

    pub fn add(&mut self, token: &str) {
        self.total += 1;
        match self.index.get(token) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    pub fn get(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Number of tokens counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tokens by descending count; equal counts stay in first-seen order
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl Serialize for FrequencyDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (token, count) in &self.entries {
            map.serialize_entry(token, count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let distribution = FrequencyDistribution::from_tokens(&["dev", "dev", "dev", "ai"]);

        assert_eq!(distribution.get("dev"), 3);
        assert_eq!(distribution.get("ai"), 1);
        assert_eq!(distribution.get("rust"), 0);
        assert_eq!(distribution.len(), 2);
        assert_eq!(distribution.total(), 4);
    }

    #[test]
    fn test_insertion_order() {
        let distribution = FrequencyDistribution::from_tokens(&["b", "a", "b", "c", "a"]);
        let order: Vec<&str> = distribution.iter().map(|(token, _)| token).collect();

        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_most_common() {
        let distribution = FrequencyDistribution::from_tokens(&["x", "y", "y", "z", "x", "w"]);

        assert_eq!(
            distribution.most_common(3),
            vec![("x".to_string(), 2), ("y".to_string(), 2), ("z".to_string(), 1)]
        );
        assert!(FrequencyDistribution::from_tokens::<&str>(&[]).most_common(5).is_empty());
    }

    #[test]
    fn test_serializes_as_map() {
        let distribution = FrequencyDistribution::from_tokens(&["dev", "dev", "ai"]);
        let json = serde_json::to_string(&distribution).unwrap();

        assert_eq!(json, r#"{"dev":2,"ai":1}"#);
    }
}
