//! resume-insight: lexical resume analysis tool

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_insight::cli::{self, Cli, Commands, ConfigAction, OutputArgs};
use resume_insight::config::{self, Config, OutputFormat};
use resume_insight::error::{Result, ResumeInsightError};
use resume_insight::input::{InputManager, LoadedDocument};
use resume_insight::output::formatter::{save_report_to_file, ReportGenerator};
use resume_insight::output::InsightReport;
use resume_insight::processing::{AnalysisEngine, SkillSet};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // Load configuration
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    let input_manager = InputManager::new();

    match command {
        Commands::Analyze { resume, skills, sentences, detailed, output } => {
            let start_time = Instant::now();
            let document = load_document(&input_manager, &resume).await?;
            let engine = build_engine(&config, skills.as_deref(), sentences);

            let insights = engine.analyze(&document.name, &document.text);
            let report = InsightReport::full(insights, engine.skills(), detailed || config.output.detailed)
                .with_processing_time(elapsed_ms(start_time));

            emit_report(&report, &output, &config)?;
        }

        Commands::Summary { resume, sentences, output } => {
            let start_time = Instant::now();
            let document = load_document(&input_manager, &resume).await?;
            let engine = build_engine(&config, None, sentences);

            let report = InsightReport::summary(&document.name, engine.summarize(&document.text))
                .with_processing_time(elapsed_ms(start_time));

            emit_report(&report, &output, &config)?;
        }

        Commands::Strengths { resume, skills, output } => {
            let start_time = Instant::now();
            let document = load_document(&input_manager, &resume).await?;
            let engine = build_engine(&config, skills.as_deref(), None);

            let analysis = engine.strengths_weaknesses(&document.text);
            let report = InsightReport::strengths(&document.name, analysis, engine.skills())
                .with_processing_time(elapsed_ms(start_time));

            emit_report(&report, &output, &config)?;
        }

        Commands::Weaknesses { resume, skills, output } => {
            let start_time = Instant::now();
            let document = load_document(&input_manager, &resume).await?;
            let engine = build_engine(&config, skills.as_deref(), None);

            let analysis = engine.strengths_weaknesses(&document.text);
            let report = InsightReport::weaknesses(&document.name, analysis, engine.skills())
                .with_processing_time(elapsed_ms(start_time));

            emit_report(&report, &output, &config)?;
        }

        Commands::Titles { resume, output } => {
            let start_time = Instant::now();
            let document = load_document(&input_manager, &resume).await?;
            let engine = build_engine(&config, None, None);

            let report = InsightReport::job_titles(&document.name, engine.job_titles(&document.text))
                .with_processing_time(elapsed_ms(start_time));

            emit_report(&report, &output, &config)?;
        }

        Commands::Frequency { resume, top, output } => {
            let start_time = Instant::now();
            let document = load_document(&input_manager, &resume).await?;
            let engine = build_engine(&config, None, None);

            let distribution = engine.frequency(&document.text);
            let top = top.unwrap_or_else(|| engine.top_terms());
            let report = InsightReport::frequency(&document.name, &distribution, top)
                .with_processing_time(elapsed_ms(start_time));

            emit_report(&report, &output, &config)?;
        }

        Commands::Leaderboard { paths, skills, output } => {
            let start_time = Instant::now();
            let engine = build_engine(&config, skills.as_deref(), None);

            let document_paths = input_manager.collect_documents(&paths).await?;
            info!("Building leaderboard for {} documents", document_paths.len());

            let progress_bar = ProgressBar::new(document_paths.len() as u64);
            let style = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} resumes {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            progress_bar.set_style(style.progress_chars("█▓▒░"));

            let mut documents = Vec::with_capacity(document_paths.len());
            for path in &document_paths {
                progress_bar.set_message(path.display().to_string());
                let LoadedDocument { name, text, .. } = input_manager.load(path).await?;
                documents.push((name, text));
                progress_bar.inc(1);
            }
            progress_bar.finish_and_clear();

            let entries = engine.leaderboard(&documents);
            let report = InsightReport::leaderboard(entries, engine.skills())
                .with_processing_time(elapsed_ms(start_time));

            emit_report(&report, &output, &config)?;
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeInsightError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("⚙️  Current Configuration ({})\n", config_path.display());
                    println!("{}", content);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", config_path.display());
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(config_path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Set { key, value }) => {
                    let mut updated = config;
                    updated.set_value(&key, &value)?;
                    updated.save_to(config_path)?;
                    println!("✅ Set {} = {}", key, value);
                }
            }
        }
    }

    Ok(())
}

async fn load_document(input_manager: &InputManager, path: &Path) -> Result<LoadedDocument> {
    cli::validate_file_extension(path, SUPPORTED_EXTENSIONS)
        .map_err(|e| ResumeInsightError::InvalidInput(format!("Resume file: {}", e)))?;

    input_manager.load(path).await
}

fn build_engine(config: &Config, skills: Option<&str>, sentences: Option<usize>) -> AnalysisEngine {
    let mut engine = AnalysisEngine::new(config);
    if let Some(skills) = skills {
        engine = engine.with_skills(SkillSet::new(config::parse_list(skills)));
    }
    if let Some(sentences) = sentences {
        engine = engine.with_summary_sentences(sentences);
    }
    engine
}

fn emit_report(report: &InsightReport, output: &OutputArgs, config: &Config) -> Result<()> {
    let format = match &output.output {
        Some(format) => cli::parse_output_format(format).map_err(ResumeInsightError::InvalidInput)?,
        None => config.output.format,
    };

    let use_colors = config.output.color_output
        && output.save.is_none()
        && format == OutputFormat::Console;
    let generator = ReportGenerator::with_options(use_colors, true, true, true);
    let content = generator.generate_report(report, &format)?;

    match &output.save {
        Some(path) => {
            let path = resolve_save_path(path, &format, report);
            save_report_to_file(&content, &path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

/// A directory target gets a generated file name
fn resolve_save_path(path: &Path, format: &OutputFormat, report: &InsightReport) -> PathBuf {
    if path.is_dir() {
        let subject = report.subject();
        path.join(resume_insight::output::formatter::suggest_filename(format, &subject, true))
    } else {
        path.to_path_buf()
    }
}

fn elapsed_ms(start_time: Instant) -> u64 {
    start_time.elapsed().as_millis() as u64
}
