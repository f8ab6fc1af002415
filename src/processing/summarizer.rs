//! Extractive summarization by TF-IDF sentence centrality
//!
//! Each sentence becomes an L2-normalized TF-IDF vector. A sentence's score is
//! the sum of its cosine similarity to every other sentence, and the summary is
//! the highest scoring sentences joined by a space.
//!
//! Selected sentences are emitted in score-rank order, not document order.

use crate::processing::text_processor::TextNormalizer;
use log::debug;
use ndarray::{Array1, Array2, Axis};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Texts with at most this many sentences are returned unchanged
pub const MIN_SENTENCES_TO_SUMMARIZE: usize = 3;

pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Terms are runs of two or more word characters
fn term_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("Invalid term regex"))
}

/// TF-IDF vectors for a set of sentences, one row per sentence
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    vocabulary: HashMap<String, usize>,
    vectors: Array2<f64>,
}

impl TfIdfMatrix {
    /// Fit the vocabulary and smoothed idf on `sentences` and vectorize them
    pub fn fit_transform<S: AsRef<str>>(sentences: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = sentences
            .iter()
            .map(|sentence| {
                term_pattern()
                    .find_iter(sentence.as_ref())
                    .map(|term| term.as_str().to_lowercase())
                    .collect()
            })
            .collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        for terms in &tokenized {
            for term in terms {
                let next = vocabulary.len();
                vocabulary.entry(term.clone()).or_insert(next);
            }
        }

        let n_sentences = tokenized.len();
        let mut vectors = Array2::<f64>::zeros((n_sentences, vocabulary.len()));
        let mut document_frequency = Array1::<f64>::zeros(vocabulary.len());

        for (row, terms) in tokenized.iter().enumerate() {
            for term in terms {
                vectors[[row, vocabulary[term]]] += 1.0;
            }
        }
        for column in 0..vocabulary.len() {
            document_frequency[column] = vectors
                .column(column)
                .iter()
                .filter(|&&count| count > 0.0)
                .count() as f64;
        }

        let n = n_sentences as f64;
        let idf = document_frequency.mapv(|df| ((1.0 + n) / (1.0 + df)).ln() + 1.0);
        vectors *= &idf;

        for mut row in vectors.rows_mut() {
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row /= norm;
            }
        }

        Self { vocabulary, vectors }
    }

    /// Pairwise cosine similarity; rows are unit length (or zero) already
    pub fn cosine_similarity(&self) -> Array2<f64> {
        self.vectors.dot(&self.vectors.t())
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn vectors(&self) -> &Array2<f64> {
        &self.vectors
    }
}

/// Centrality score per sentence: row sums of the similarity matrix with the
/// diagonal zeroed
pub fn sentence_scores<S: AsRef<str>>(sentences: &[S]) -> Vec<f64> {
    let matrix = TfIdfMatrix::fit_transform(sentences);
    let mut similarity = matrix.cosine_similarity();
    similarity.diag_mut().fill(0.0);

    similarity.sum_axis(Axis(1)).to_vec()
}

/// Indices of the `top_n` best scores, best first; equal scores keep index order
pub fn rank_sentences(scores: &[f64], top_n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    indices.truncate(top_n);
    indices
}

/// Extractive summary of `text` made of `top_n` sentences.
///
/// Sentences are joined in score order, not in the order they appear in
/// `text`. Texts of three sentences or fewer are returned unchanged.
pub fn summarize(text: &str, top_n: usize) -> String {
    let sentences = TextNormalizer::split_sentences(text);
    if sentences.len() <= MIN_SENTENCES_TO_SUMMARIZE {
        debug!("Only {} sentences, returning text unchanged", sentences.len());
        return text.to_string();
    }

    let scores = sentence_scores(&sentences);
    let selected = rank_sentences(&scores, top_n);
    debug!(
        "Selected sentences {:?} out of {} for the summary",
        selected,
        sentences.len()
    );

    selected
        .iter()
        .map(|&index| sentences[index].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
