//! CLI interface for resume insight

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-insight")]
#[command(about = "Lexical resume analysis tool")]
#[command(long_about = "Summarize resumes, surface strength and weakness keywords, suggest job titles and rank a batch of resumes by skill hits")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output options shared by every analysis command
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format: console, json, markdown, html
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file
    #[arg(short, long)]
    pub save: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every analysis on a resume
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        resume: PathBuf,

        /// Comma separated skills to highlight (overrides configuration)
        #[arg(long)]
        skills: Option<String>,

        /// Number of sentences in the summary
        #[arg(long)]
        sentences: Option<usize>,

        /// Include the highlighted text and term frequencies
        #[arg(short, long)]
        detailed: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extractive summary of a resume
    Summary {
        /// Path to resume file (PDF, TXT, MD)
        resume: PathBuf,

        /// Number of sentences in the summary
        #[arg(long)]
        sentences: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Frequent keywords and highlighted skills
    Strengths {
        /// Path to resume file (PDF, TXT, MD)
        resume: PathBuf,

        /// Comma separated skills to highlight (overrides configuration)
        #[arg(long)]
        skills: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Rare keywords and highlighted skills
    Weaknesses {
        /// Path to resume file (PDF, TXT, MD)
        resume: PathBuf,

        /// Comma separated skills to highlight (overrides configuration)
        #[arg(long)]
        skills: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Job title suggestions
    Titles {
        /// Path to resume file (PDF, TXT, MD)
        resume: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Most common terms
    Frequency {
        /// Path to resume file (PDF, TXT, MD)
        resume: PathBuf,

        /// Number of terms to list
        #[arg(long)]
        top: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Rank resumes by skill hits
    Leaderboard {
        /// Resume files or directories containing resumes
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Comma separated skills to count (overrides configuration)
        #[arg(long)]
        skills: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "analysis.summary_sentences")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "txt", "md"];
        assert!(validate_file_extension(Path::new("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("cv"), &allowed).is_err());
    }

    #[test]
    fn test_leaderboard_parsing() {
        let cli = Cli::try_parse_from([
            "resume-insight",
            "leaderboard",
            "a.pdf",
            "resumes/",
            "--skills",
            "rust,go",
            "-o",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Leaderboard { paths, skills, output } => {
                assert_eq!(paths.len(), 2);
                assert_eq!(skills.as_deref(), Some("rust,go"));
                assert_eq!(output.output.as_deref(), Some("json"));
            }
            _ => panic!("expected leaderboard command"),
        }
    }
}
