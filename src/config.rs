//! Configuration management for resume insight

use crate::error::{Result, ResumeInsightError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub skills: SkillsConfig,
    pub analysis: AnalysisConfig,
    pub stopwords: StopwordsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Keywords highlighted in resumes and counted for the leaderboard
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub summary_sentences: usize,
    pub strength_min_frequency: f64,
    pub strength_min_ratio: f64,
    pub title_min_frequency: f64,
    pub title_min_ratio: f64,
    pub top_terms: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopwordsConfig {
    /// Words filtered in addition to the standard English list
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub detailed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skills: SkillsConfig {
                keywords: ["python", "ai", "rait", "javascript", "development"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            analysis: AnalysisConfig {
                summary_sentences: 3,
                strength_min_frequency: 1.5,
                strength_min_ratio: 0.005,
                title_min_frequency: 1.0,
                title_min_ratio: 0.005,
                top_terms: 10,
            },
            stopwords: StopwordsConfig { extra: Vec::new() },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                detailed: false,
            },
        }
    }
}

impl Config {
    /// Load from `path`, writing defaults there on first run
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeInsightError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeInsightError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-insight")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let analysis = &self.analysis;

        if analysis.summary_sentences == 0 {
            return Err(ResumeInsightError::Configuration(
                "analysis.summary_sentences must be at least 1".to_string(),
            ));
        }

        for (key, ratio) in [
            ("analysis.strength_min_ratio", analysis.strength_min_ratio),
            ("analysis.title_min_ratio", analysis.title_min_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ResumeInsightError::Configuration(format!(
                    "{} must be between 0 and 1, got {}",
                    key, ratio
                )));
            }
        }

        for (key, frequency) in [
            ("analysis.strength_min_frequency", analysis.strength_min_frequency),
            ("analysis.title_min_frequency", analysis.title_min_frequency),
        ] {
            if !frequency.is_finite() || frequency < 0.0 {
                return Err(ResumeInsightError::Configuration(format!(
                    "{} must be a non-negative number, got {}",
                    key, frequency
                )));
            }
        }

        Ok(())
    }

    /// Set a single value addressed by its dotted key, e.g. `analysis.top_terms`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "skills.keywords" => {
                self.skills.keywords = parse_list(value);
            }
            "stopwords.extra" => {
                self.stopwords.extra = parse_list(value);
            }
            "analysis.summary_sentences" => {
                self.analysis.summary_sentences = parse_number(key, value)?;
            }
            "analysis.top_terms" => {
                self.analysis.top_terms = parse_number(key, value)?;
            }
            "analysis.strength_min_frequency" => {
                self.analysis.strength_min_frequency = parse_number(key, value)?;
            }
            "analysis.strength_min_ratio" => {
                self.analysis.strength_min_ratio = parse_number(key, value)?;
            }
            "analysis.title_min_frequency" => {
                self.analysis.title_min_frequency = parse_number(key, value)?;
            }
            "analysis.title_min_ratio" => {
                self.analysis.title_min_ratio = parse_number(key, value)?;
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeInsightError::Configuration)?;
            }
            "output.color_output" => {
                self.output.color_output = parse_bool(key, value)?;
            }
            "output.detailed" => {
                self.output.detailed = parse_bool(key, value)?;
            }
            _ => {
                return Err(ResumeInsightError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }

        self.validate()
    }
}

/// Split a comma separated list, dropping empty entries
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        ResumeInsightError::Configuration(format!("Invalid number for {}: {}", key, value))
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ResumeInsightError::Configuration(format!(
            "Invalid boolean for {}: {}",
            key, value
        ))),
    }
}
