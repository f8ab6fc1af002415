//! Text cleaning, tokenization and normalization

use crate::processing::stopwords::StopwordFilter;
use unicode_segmentation::UnicodeSegmentation;

pub struct TextNormalizer {
    stopwords: StopwordFilter,
}

#[derive(Debug, Clone)]
pub struct ProcessedText {
    pub original: String,
    pub cleaned: String,
    pub tokens: Vec<String>,
    pub sentences: Vec<String>,
    pub word_count: usize,
    pub character_count: usize,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(StopwordFilter::english())
    }
}

impl TextNormalizer {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Clean, tokenize and split text in one pass
    pub fn process(&self, text: &str) -> ProcessedText {
        let cleaned = Self::clean_text(text);
        let tokens = self.tokenize(&cleaned);
        let sentences = Self::split_sentences(&cleaned);

        ProcessedText {
            original: text.to_string(),
            word_count: tokens.len(),
            character_count: cleaned.chars().count(),
            cleaned,
            tokens,
            sentences,
        }
    }

    /// Tokens of `text` after cleaning and stopword removal
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.tokenize(&Self::clean_text(text))
    }

    /// Keep only ASCII alphanumerics and whitespace
    pub fn clean_text(text: &str) -> String {
        text.chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .collect()
    }

    /// Split into lowercase word tokens, dropping stopwords
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(|word| word.to_lowercase())
            .filter(|word| !self.stopwords.is_stopword(word))
            .collect()
    }

    /// Split text into sentences ending in `.`, `?` or `!`.
    ///
    /// Line breaks alone never end a sentence, so text without terminal
    /// punctuation is a single sentence.
    pub fn split_sentences(text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();

        for segment in text.unicode_sentences() {
            current.push_str(segment);
            if segment.trim_end().ends_with(SENTENCE_TERMINATORS) {
                push_sentence(&mut sentences, &current);
                current.clear();
            }
        }
        push_sentence(&mut sentences, &current);

        sentences
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }
}

const SENTENCE_TERMINATORS: [char; 3] = ['.', '?', '!'];

fn push_sentence(sentences: &mut Vec<String>, sentence: &str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}
