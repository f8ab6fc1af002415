//! Report structures shared by every output format

use crate::processing::analyzer::DocumentInsights;
use crate::processing::frequency::FrequencyDistribution;
use crate::processing::leaderboard::LeaderboardEntry;
use crate::processing::lexical::{SkillSet, StrengthWeaknessAnalysis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which command produced the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    Full,
    Summary,
    Strengths,
    Weaknesses,
    JobTitles,
    Frequency,
    Leaderboard,
}

impl ReportKind {
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Full => "Resume Insight Report",
            ReportKind::Summary => "Resume Summary",
            ReportKind::Strengths => "Strength Analysis",
            ReportKind::Weaknesses => "Weakness Analysis",
            ReportKind::JobTitles => "Job Title Suggestions",
            ReportKind::Frequency => "Term Frequency",
            ReportKind::Leaderboard => "Resume Leaderboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub kind: ReportKind,
    pub generated_at: DateTime<Utc>,
    pub documents: Vec<String>,
    pub token_count: Option<usize>,
    pub skills: Vec<String>,
    pub processing_time_ms: u64,
    pub version: String,
}

/// A report holds only the sections its command produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    pub metadata: ReportMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strengths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_titles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_terms: Option<Vec<TermCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaderboard: Option<Vec<LeaderboardEntry>>,
}

impl InsightReport {
    fn empty(kind: ReportKind, documents: Vec<String>, skills: &SkillSet) -> Self {
        Self {
            metadata: ReportMetadata {
                kind,
                generated_at: Utc::now(),
                documents,
                token_count: None,
                skills: skills.sorted(),
                processing_time_ms: 0,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            summary: None,
            strengths: None,
            weaknesses: None,
            highlighted_text: None,
            job_titles: None,
            top_terms: None,
            leaderboard: None,
        }
    }

    /// Every section; the highlighted text and term list only when `detailed`
    pub fn full(insights: DocumentInsights, skills: &SkillSet, detailed: bool) -> Self {
        let mut report = Self::empty(ReportKind::Full, vec![insights.document], skills);
        report.metadata.token_count = Some(insights.token_count);
        report.metadata.processing_time_ms = insights.processing_time_ms;
        report.summary = Some(insights.summary);
        report.strengths = Some(insights.strengths);
        report.weaknesses = Some(insights.weaknesses);
        report.job_titles = Some(insights.job_titles);
        if detailed {
            report.highlighted_text = Some(insights.highlighted_text);
            report.top_terms = Some(to_term_counts(insights.top_terms));
        }
        report
    }

    pub fn summary(document: &str, summary: String) -> Self {
        let mut report = Self::empty(ReportKind::Summary, vec![document.to_string()], &SkillSet::default());
        report.summary = Some(summary);
        report
    }

    pub fn strengths(document: &str, analysis: StrengthWeaknessAnalysis, skills: &SkillSet) -> Self {
        let mut report = Self::empty(ReportKind::Strengths, vec![document.to_string()], skills);
        report.strengths = Some(analysis.strengths);
        report.highlighted_text = Some(analysis.highlighted_text);
        report
    }

    pub fn weaknesses(document: &str, analysis: StrengthWeaknessAnalysis, skills: &SkillSet) -> Self {
        let mut report = Self::empty(ReportKind::Weaknesses, vec![document.to_string()], skills);
        report.weaknesses = Some(analysis.weaknesses);
        report.highlighted_text = Some(analysis.highlighted_text);
        report
    }

    pub fn job_titles(document: &str, titles: Vec<String>) -> Self {
        let mut report = Self::empty(ReportKind::JobTitles, vec![document.to_string()], &SkillSet::default());
        report.job_titles = Some(titles);
        report
    }

    pub fn frequency(document: &str, distribution: &FrequencyDistribution, top: usize) -> Self {
        let mut report = Self::empty(ReportKind::Frequency, vec![document.to_string()], &SkillSet::default());
        report.metadata.token_count = Some(distribution.total());
        report.top_terms = Some(to_term_counts(distribution.most_common(top)));
        report
    }

    pub fn leaderboard(entries: Vec<LeaderboardEntry>, skills: &SkillSet) -> Self {
        let documents = entries.iter().map(|entry| entry.document.clone()).collect();
        let mut report = Self::empty(ReportKind::Leaderboard, documents, skills);
        report.leaderboard = Some(entries);
        report
    }

    pub fn with_processing_time(mut self, processing_time_ms: u64) -> Self {
        self.metadata.processing_time_ms = processing_time_ms;
        self
    }

    /// Name of the single analyzed document, or a batch label
    pub fn subject(&self) -> String {
        match self.metadata.documents.as_slice() {
            [single] => single.clone(),
            documents => format!("{} documents", documents.len()),
        }
    }
}

fn to_term_counts(terms: Vec<(String, usize)>) -> Vec<TermCount> {
    terms
        .into_iter()
        .map(|(term, count)| TermCount { term, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_report() {
        let distribution = FrequencyDistribution::from_tokens(&["dev", "dev", "dev", "ai"]);
        let report = InsightReport::frequency("cv.txt", &distribution, 10);

        assert_eq!(report.metadata.kind, ReportKind::Frequency);
        assert_eq!(report.metadata.token_count, Some(4));
        assert_eq!(
            report.top_terms.unwrap(),
            vec![
                TermCount { term: "dev".into(), count: 3 },
                TermCount { term: "ai".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_json_omits_missing_sections() {
        let report = InsightReport::summary("cv.txt", "Short summary".to_string());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["summary"], "Short summary");
        assert!(json.get("strengths").is_none());
        assert!(json.get("leaderboard").is_none());
        assert_eq!(json["metadata"]["kind"], "Summary");
    }

    #[test]
    fn test_subject() {
        let entries = vec![
            LeaderboardEntry { rank: 1, document: "a.pdf".into(), skill_hits: 2 },
            LeaderboardEntry { rank: 2, document: "b.pdf".into(), skill_hits: 1 },
        ];
        let report = InsightReport::leaderboard(entries, &SkillSet::new(["ai"]));

        assert_eq!(report.subject(), "2 documents");
        assert_eq!(InsightReport::summary("cv.txt", String::new()).subject(), "cv.txt");
        assert_eq!(report.metadata.skills, vec!["ai"]);
    }
}
