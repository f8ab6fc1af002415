//! Frequency-threshold keyword analysis and skill highlighting

use crate::processing::frequency::FrequencyDistribution;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lowercase skill keywords matched case-insensitively against tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: HashSet<String>,
}

impl SkillSet {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            skills: skills
                .into_iter()
                .map(|skill| skill.as_ref().trim().to_lowercase())
                .filter(|skill| !skill.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.skills.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills in alphabetical order
    pub fn sorted(&self) -> Vec<String> {
        let mut skills: Vec<String> = self.skills.iter().cloned().collect();
        skills.sort();
        skills
    }
}

/// A token passes when `count / total >= min_ratio` and `count >= min_frequency`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub min_frequency: f64,
    pub min_ratio: f64,
}

impl Thresholds {
    pub const STRENGTH: Thresholds = Thresholds {
        min_frequency: 1.5,
        min_ratio: 0.005,
    };

    pub const JOB_TITLE: Thresholds = Thresholds {
        min_frequency: 1.0,
        min_ratio: 0.005,
    };

    fn passes(&self, count: usize, total: usize) -> bool {
        let count = count as f64;
        count / total as f64 >= self.min_ratio && count >= self.min_frequency
    }

    /// Rare-token test: at most half the ratio and seen at least once
    fn below_half_ratio(&self, count: usize, total: usize) -> bool {
        (count as f64) / (total as f64) <= self.min_ratio / 2.0 && count >= 1
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::STRENGTH
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthWeaknessAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub highlighted_text: String,
}

/// Split distinct tokens into frequent "strengths" and rare "weaknesses".
///
/// Any token whose share is at most half of `min_ratio` counts as a weakness,
/// which in a typical resume is nearly every word seen once.
pub fn analyze_strengths_weaknesses(
    tokens: &[String],
    skills: &SkillSet,
    thresholds: Thresholds,
) -> StrengthWeaknessAnalysis {
    let distribution = FrequencyDistribution::from_tokens(tokens);
    let total = tokens.len();

    let strengths = distribution
        .iter()
        .filter(|&(_, count)| thresholds.passes(count, total))
        .map(|(token, _)| token.to_string())
        .collect();

    let weaknesses = distribution
        .iter()
        .filter(|&(_, count)| thresholds.below_half_ratio(count, total))
        .map(|(token, _)| token.to_string())
        .collect();

    StrengthWeaknessAnalysis {
        strengths,
        weaknesses,
        highlighted_text: highlight_skills(tokens, skills),
    }
}

pub fn suggest_job_titles(tokens: &[String], thresholds: Thresholds) -> Vec<String> {
    let distribution = FrequencyDistribution::from_tokens(tokens);
    let total = tokens.len();

    distribution
        .iter()
        .filter(|&(_, count)| thresholds.passes(count, total))
        .map(|(token, _)| token.to_string())
        .collect()
}

/// Wrap every skill token in `<mark>` tags and join all tokens with spaces
pub fn highlight_skills<S: AsRef<str>>(tokens: &[S], skills: &SkillSet) -> String {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            if skills.contains(token) {
                format!("<mark>{}</mark>", token)
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of `<mark>` pairs [`highlight_skills`] would emit
pub fn count_skill_hits<S: AsRef<str>>(tokens: &[S], skills: &SkillSet) -> usize {
    tokens
        .iter()
        .filter(|token| skills.contains((*token).as_ref()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_highlight_skills() {
        let skills = SkillSet::new(["ai"]);
        assert_eq!(highlight_skills(&["ai", "dev"], &skills), "<mark>ai</mark> dev");
        assert_eq!(highlight_skills::<&str>(&[], &skills), "");
    }

    #[test]
    fn test_skill_set_is_case_insensitive() {
        let skills = SkillSet::new(["Python", " AI "]);

        assert!(skills.contains("python"));
        assert!(skills.contains("PYTHON"));
        assert!(skills.contains("ai"));
        assert_eq!(skills.sorted(), vec!["ai", "python"]);
        assert_eq!(highlight_skills(&["Python"], &skills), "<mark>Python</mark>");
    }

    #[test]
    fn test_strengths_and_weaknesses() {
        let skills = SkillSet::new(["ai"]);
        let words = tokens(&["dev", "dev", "dev", "ai"]);
        let analysis = analyze_strengths_weaknesses(&words, &skills, Thresholds::STRENGTH);

        // ratio for "ai" is 0.25, well above half of 0.005
        assert_eq!(analysis.strengths, vec!["dev"]);
        assert!(analysis.weaknesses.is_empty());
        assert_eq!(analysis.highlighted_text, "dev dev dev <mark>ai</mark>");
    }

    #[test]
    fn test_weaknesses_in_long_documents() {
        let mut words: Vec<String> = (0..999).map(|i| format!("filler{}", i % 333)).collect();
        words.push("unique".to_string());

        let analysis = analyze_strengths_weaknesses(&words, &SkillSet::default(), Thresholds::STRENGTH);

        // 1/1000 <= 0.0025 makes every once-seen token a weakness
        assert_eq!(analysis.weaknesses, vec!["unique"]);
        // 3/1000 is below 0.005, so nothing is a strength
        assert!(analysis.strengths.is_empty());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let skills = SkillSet::new(["rust", "go"]);
        let words = tokens(&["rust", "go", "kafka", "rust", "sql", "go", "rust"]);

        let first = analyze_strengths_weaknesses(&words, &skills, Thresholds::STRENGTH);
        for _ in 0..10 {
            assert_eq!(analyze_strengths_weaknesses(&words, &skills, Thresholds::STRENGTH), first);
        }
        assert_eq!(first.strengths, vec!["rust", "go"]);
    }

    #[test]
    fn test_empty_tokens() {
        let analysis = analyze_strengths_weaknesses(&[], &SkillSet::new(["ai"]), Thresholds::STRENGTH);

        assert!(analysis.strengths.is_empty());
        assert!(analysis.weaknesses.is_empty());
        assert_eq!(analysis.highlighted_text, "");
        assert!(suggest_job_titles(&[], Thresholds::JOB_TITLE).is_empty());
    }

    #[test]
    fn test_suggest_job_titles() {
        let words = tokens(&["engineer", "backend", "engineer"]);
        assert_eq!(suggest_job_titles(&words, Thresholds::JOB_TITLE), vec!["engineer", "backend"]);

        let strict = Thresholds { min_frequency: 2.0, min_ratio: 0.005 };
        assert_eq!(suggest_job_titles(&words, strict), vec!["engineer"]);
    }

    #[test]
    fn test_count_skill_hits_matches_highlight() {
        let skills = SkillSet::new(["python", "ai"]);
        let words = tokens(&["python", "ai", "ml", "python"]);

        assert_eq!(count_skill_hits(&words, &skills), 3);
        assert_eq!(highlight_skills(&words, &skills).matches("<mark>").count(), 3);
    }
}
