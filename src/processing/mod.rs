//! Text processing and analysis module

pub mod stopwords;
pub mod text_processor;
pub mod frequency;
pub mod summarizer;
pub mod lexical;
pub mod leaderboard;
pub mod analyzer;

pub use analyzer::{AnalysisEngine, DocumentInsights};
pub use frequency::FrequencyDistribution;
pub use leaderboard::LeaderboardEntry;
pub use lexical::{SkillSet, StrengthWeaknessAnalysis, Thresholds};
pub use text_processor::{ProcessedText, TextNormalizer};
