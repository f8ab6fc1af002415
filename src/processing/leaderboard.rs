//! Ranking a batch of resumes by skill hits

use crate::processing::lexical::{count_skill_hits, SkillSet};
use crate::processing::text_processor::TextNormalizer;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub document: String,
    pub skill_hits: usize,
}

/// Score documents one after another, then rank by hits (best first).
///
/// The sort is stable: documents with the same hit count keep their input order.
pub fn build_leaderboard<N, T>(
    documents: &[(N, T)],
    normalizer: &TextNormalizer,
    skills: &SkillSet,
) -> Vec<LeaderboardEntry>
where
    N: AsRef<str>,
    T: AsRef<str>,
{
    let mut scored: Vec<(String, usize)> = documents
        .iter()
        .map(|(name, text)| {
            let tokens = normalizer.normalize(text.as_ref());
            let hits = count_skill_hits(&tokens, skills);
            debug!("{}: {} skill hits in {} tokens", name.as_ref(), hits, tokens.len());
            (name.as_ref().to_string(), hits)
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (document, skill_hits))| LeaderboardEntry {
            rank: index + 1,
            document,
            skill_hits,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_more_hits_rank_first() {
        let normalizer = TextNormalizer::default();
        let skills = SkillSet::new(["python", "ai", "rait", "javascript", "development"]);
        let documents = [
            ("d1.pdf", "Python developer interested in AI."),
            ("d2.pdf", "Python, JavaScript and AI development. More Python!"),
        ];

        let leaderboard = build_leaderboard(&documents, &normalizer, &skills);

        assert_eq!(leaderboard.len(), 2);
        assert_eq!(leaderboard[0], LeaderboardEntry { rank: 1, document: "d2.pdf".into(), skill_hits: 5 });
        assert_eq!(leaderboard[1], LeaderboardEntry { rank: 2, document: "d1.pdf".into(), skill_hits: 2 });
    }

    #[test]
    fn test_ties_keep_input_order() {
        let normalizer = TextNormalizer::default();
        let skills = SkillSet::new(["rust"]);
        let documents = vec![
            ("a.txt".to_string(), "Rust".to_string()),
            ("b.txt".to_string(), "Rust and rust".to_string()),
            ("c.txt".to_string(), "rust".to_string()),
            ("d.txt".to_string(), String::new()),
        ];

        let names: Vec<String> = build_leaderboard(&documents, &normalizer, &skills)
            .into_iter()
            .map(|entry| entry.document)
            .collect();

        assert_eq!(names, vec!["b.txt", "a.txt", "c.txt", "d.txt"]);
    }

    #[test]
    fn test_empty_batch() {
        let documents: Vec<(String, String)> = Vec::new();
        assert!(build_leaderboard(&documents, &TextNormalizer::default(), &SkillSet::default()).is_empty());
    }
}
