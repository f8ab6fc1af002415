//! Analysis engine wiring normalization, lexical analysis and summarization

use crate::config::Config;
use crate::processing::frequency::FrequencyDistribution;
use crate::processing::leaderboard::{build_leaderboard, LeaderboardEntry};
use crate::processing::lexical::{
    analyze_strengths_weaknesses, count_skill_hits, highlight_skills, suggest_job_titles, SkillSet,
    StrengthWeaknessAnalysis, Thresholds,
};
use crate::processing::stopwords::StopwordFilter;
use crate::processing::summarizer::summarize;
use crate::processing::text_processor::{ProcessedText, TextNormalizer};
use log::{debug, info};
use serde::Serialize;
use std::time::Instant;

/// Everything the pipeline derives from one document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentInsights {
    pub document: String,
    pub token_count: usize,
    pub distinct_tokens: usize,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub highlighted_text: String,
    pub job_titles: Vec<String>,
    pub skill_hits: usize,
    pub top_terms: Vec<(String, usize)>,
    pub processing_time_ms: u64,
}

pub struct AnalysisEngine {
    normalizer: TextNormalizer,
    skills: SkillSet,
    summary_sentences: usize,
    strength_thresholds: Thresholds,
    title_thresholds: Thresholds,
    top_terms: usize,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Self {
        let stopwords = StopwordFilter::english().with_extra(&config.stopwords.extra);
        debug!("Loaded {} stopwords", stopwords.len());

        Self {
            normalizer: TextNormalizer::new(stopwords),
            skills: SkillSet::new(&config.skills.keywords),
            summary_sentences: config.analysis.summary_sentences,
            strength_thresholds: Thresholds {
                min_frequency: config.analysis.strength_min_frequency,
                min_ratio: config.analysis.strength_min_ratio,
            },
            title_thresholds: Thresholds {
                min_frequency: config.analysis.title_min_frequency,
                min_ratio: config.analysis.title_min_ratio,
            },
            top_terms: config.analysis.top_terms,
        }
    }

    pub fn with_skills(mut self, skills: SkillSet) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_summary_sentences(mut self, sentences: usize) -> Self {
        self.summary_sentences = sentences.max(1);
        self
    }

    pub fn with_top_terms(mut self, top_terms: usize) -> Self {
        self.top_terms = top_terms;
        self
    }

    pub fn process(&self, text: &str) -> ProcessedText {
        self.normalizer.process(text)
    }

    /// Summary of the cleaned text
    pub fn summarize(&self, text: &str) -> String {
        summarize(&TextNormalizer::clean_text(text), self.summary_sentences)
    }

    pub fn strengths_weaknesses(&self, text: &str) -> StrengthWeaknessAnalysis {
        let tokens = self.normalizer.normalize(text);
        analyze_strengths_weaknesses(&tokens, &self.skills, self.strength_thresholds)
    }

    pub fn job_titles(&self, text: &str) -> Vec<String> {
        let tokens = self.normalizer.normalize(text);
        suggest_job_titles(&tokens, self.title_thresholds)
    }

    pub fn highlight(&self, text: &str) -> String {
        highlight_skills(&self.normalizer.normalize(text), &self.skills)
    }

    pub fn frequency(&self, text: &str) -> FrequencyDistribution {
        FrequencyDistribution::from_tokens(&self.normalizer.normalize(text))
    }

    /// Run the full pipeline over one document
    pub fn analyze(&self, document: &str, text: &str) -> DocumentInsights {
        let start_time = Instant::now();
        info!("Analyzing {}", document);

        let processed = self.normalizer.process(text);
        let summary = summarize(&processed.cleaned, self.summary_sentences);
        let analysis = analyze_strengths_weaknesses(&processed.tokens, &self.skills, self.strength_thresholds);
        let job_titles = suggest_job_titles(&processed.tokens, self.title_thresholds);
        let distribution = FrequencyDistribution::from_tokens(&processed.tokens);

        let insights = DocumentInsights {
            document: document.to_string(),
            token_count: processed.tokens.len(),
            distinct_tokens: distribution.len(),
            summary,
            strengths: analysis.strengths,
            weaknesses: analysis.weaknesses,
            highlighted_text: analysis.highlighted_text,
            job_titles,
            skill_hits: count_skill_hits(&processed.tokens, &self.skills),
            top_terms: distribution.most_common(self.top_terms),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        debug!(
            "{}: {} tokens, {} strengths, {} weaknesses, {} skill hits",
            document,
            insights.token_count,
            insights.strengths.len(),
            insights.weaknesses.len(),
            insights.skill_hits
        );

        insights
    }

    /// Rank `(name, text)` documents by skill hits
    pub fn leaderboard<N, T>(&self, documents: &[(N, T)]) -> Vec<LeaderboardEntry>
    where
        N: AsRef<str>,
        T: AsRef<str>,
    {
        info!("Ranking {} documents against {} skills", documents.len(), self.skills.len());
        build_leaderboard(documents, &self.normalizer, &self.skills)
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    pub fn summary_sentences(&self) -> usize {
        self.summary_sentences
    }

    pub fn top_terms(&self) -> usize {
        self.top_terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Roe\n\
        Senior Python developer.\n\
        Built AI tooling in Python and JavaScript.\n\
        Mentored the development team.\n\
        Maintains Python services.\n";

    #[test]
    fn test_engine_uses_config() {
        let mut config = Config::default();
        config.stopwords.extra = vec!["jane".to_string()];
        config.skills.keywords = vec!["Python".to_string()];

        let engine = AnalysisEngine::new(&config);

        assert!(engine.skills().contains("python"));
        assert!(!engine.skills().contains("ai"));
        assert!(!engine.process(RESUME).tokens.contains(&"jane".to_string()));
    }

    #[test]
    fn test_analyze() {
        let engine = AnalysisEngine::new(&Config::default());
        let insights = engine.analyze("jane.txt", RESUME);

        assert_eq!(insights.document, "jane.txt");
        assert!(insights.strengths.contains(&"python".to_string()));
        assert!(insights.job_titles.contains(&"developer".to_string()));
        // python x3, ai, javascript, development
        assert_eq!(insights.skill_hits, 6);
        assert_eq!(insights.top_terms[0], ("python".to_string(), 3));
        assert_eq!(insights.highlighted_text.matches("<mark>").count(), 6);
    }

    #[test]
    fn test_summary_uses_cleaned_text() {
        let engine = AnalysisEngine::new(&Config::default()).with_summary_sentences(2);
        let summary = engine.summarize(RESUME);

        // Cleaning strips every sentence terminator, leaving one sentence
        assert_eq!(summary, TextNormalizer::clean_text(RESUME));
        assert_eq!(engine.analyze("jane.txt", RESUME).summary, summary);
    }

    #[test]
    fn test_short_document_summary_is_verbatim_cleaned_text() {
        let engine = AnalysisEngine::new(&Config::default());
        assert_eq!(engine.summarize("Rust engineer."), "Rust engineer");
    }

    #[test]
    fn test_overrides() {
        let engine = AnalysisEngine::new(&Config::default())
            .with_skills(SkillSet::new(["kafka"]))
            .with_summary_sentences(0)
            .with_top_terms(2);

        assert_eq!(engine.summary_sentences(), 1);
        assert_eq!(engine.top_terms(), 2);
        assert_eq!(engine.highlight("Kafka streams"), "<mark>kafka</mark> streams");
    }
}
