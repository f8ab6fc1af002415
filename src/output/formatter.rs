//! Output formatters for console, JSON, Markdown and HTML

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting insight reports
pub trait OutputFormatter {
    fn format_report(&self, report: &InsightReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter; highlighted skills are rendered with `<mark>`
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; background: #f5f7fa; color: #2d3748; }
        .container { max-width: 960px; margin: 0 auto; padding: 24px; }
        .header { background: #2b6cb0; color: white; padding: 24px; border-radius: 8px; }
        .section { background: white; margin-top: 16px; padding: 20px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); }
        .keywords span { display: inline-block; background: #ebf8ff; color: #2c5282; margin: 2px; padding: 2px 8px; border-radius: 12px; }
        mark { background: #fefcbf; padding: 0 2px; }
        table { width: 100%; border-collapse: collapse; }
        th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e2e8f0; }
        .metadata { color: #718096; font-size: 0.9em; margin-top: 16px; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ title }}</h1>
            <p>{{ subject }} | Generated: {{ generated_at }}</p>
        </div>
        {% if has_summary %}
        <div class="section">
            <h2>Summary</h2>
            <p>{{ summary }}</p>
        </div>
        {% endif %}
        {% if has_strengths %}
        <div class="section">
            <h2>Strengths ({{ strengths.len() }})</h2>
            <div class="keywords">{% for word in strengths %}<span>{{ word }}</span>{% endfor %}</div>
        </div>
        {% endif %}
        {% if has_weaknesses %}
        <div class="section">
            <h2>Weaknesses ({{ weaknesses.len() }})</h2>
            <div class="keywords">{% for word in weaknesses %}<span>{{ word }}</span>{% endfor %}</div>
        </div>
        {% endif %}
        {% if has_job_titles %}
        <div class="section">
            <h2>Suggested Job Titles</h2>
            <div class="keywords">{% for word in job_titles %}<span>{{ word }}</span>{% endfor %}</div>
        </div>
        {% endif %}
        {% if has_highlighted_text %}
        <div class="section">
            <h2>Highlighted Skills</h2>
            <p>{% for word in highlighted_words %}{% if !loop.first %} {% endif %}{% if word.marked %}<mark>{{ word.text }}</mark>{% else %}{{ word.text }}{% endif %}{% endfor %}</p>
        </div>
        {% endif %}
        {% if has_top_terms %}
        <div class="section">
            <h2>Top Terms</h2>
            <table>
                <tr><th>Term</th><th>Count</th></tr>
                {% for term in top_terms %}<tr><td>{{ term.term }}</td><td>{{ term.count }}</td></tr>{% endfor %}
            </table>
        </div>
        {% endif %}
        {% if has_leaderboard %}
        <div class="section">
            <h2>Leaderboard</h2>
            <table>
                <tr><th>Rank</th><th>Resume</th><th>Highlighted Keywords</th></tr>
                {% for entry in leaderboard %}<tr><td>{{ entry.rank }}</td><td>{{ entry.document }}</td><td>{{ entry.skill_hits }}</td></tr>{% endfor %}
            </table>
        </div>
        {% endif %}
        <div class="metadata">
            <p>Generated by resume-insight v{{ version }}{% if has_skills %} | Skills: {{ skills }}{% endif %}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    title: String,
    subject: String,
    generated_at: String,
    summary: String,
    has_summary: bool,
    strengths: Vec<String>,
    has_strengths: bool,
    weaknesses: Vec<String>,
    has_weaknesses: bool,
    job_titles: Vec<String>,
    has_job_titles: bool,
    highlighted_words: Vec<HtmlHighlightedWord>,
    has_highlighted_text: bool,
    top_terms: Vec<TermCount>,
    has_top_terms: bool,
    leaderboard: Vec<HtmlLeaderboardRow>,
    has_leaderboard: bool,
    skills: String,
    has_skills: bool,
    version: String,
}

/// One token of the highlighted text; `marked` tokens are skills
#[derive(Debug, Clone)]
struct HtmlHighlightedWord {
    text: String,
    marked: bool,
}

#[derive(Debug, Clone)]
struct HtmlLeaderboardRow {
    rank: usize,
    document: String,
    skill_hits: usize,
}

fn format_timestamp(report: &InsightReport) -> String {
    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_word_list(&self, words: &[String]) -> String {
        if words.is_empty() {
            return format!("  {}\n", self.colorize("(none)", Color::BrightBlack));
        }
        format!("  {}\n", words.join(", "))
    }

    /// Replace `<mark>` pairs with terminal highlighting, or brackets without color
    fn format_highlighted(&self, highlighted: &str) -> String {
        highlighted
            .split(' ')
            .map(|word| match word
                .strip_prefix("<mark>")
                .and_then(|rest| rest.strip_suffix("</mark>"))
            {
                Some(skill) if self.use_colors => skill.black().on_yellow().bold().to_string(),
                Some(skill) => format!("[{}]", skill),
                None => word.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &InsightReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header(report.metadata.kind.title(), 1));
        output.push_str(&format!("Document: {} | Generated: {}\n",
            self.colorize(&report.subject(), Color::Cyan),
            format_timestamp(report)
        ));
        if let Some(token_count) = report.metadata.token_count {
            output.push_str(&format!("Tokens analyzed: {}\n", token_count));
        }

        if let Some(summary) = &report.summary {
            output.push_str(&self.format_header("Summary", 2));
            output.push_str(&format!("{}\n", summary));
        }

        if let Some(strengths) = &report.strengths {
            output.push_str(&self.format_header(&format!("Strengths ({})", strengths.len()), 2));
            output.push_str(&self.format_word_list(strengths));
        }

        if let Some(weaknesses) = &report.weaknesses {
            output.push_str(&self.format_header(&format!("Weaknesses ({})", weaknesses.len()), 2));
            output.push_str(&self.format_word_list(weaknesses));
        }

        if let Some(job_titles) = &report.job_titles {
            output.push_str(&self.format_header("Suggested Job Titles", 2));
            output.push_str(&self.format_word_list(job_titles));
        }

        if let Some(highlighted) = &report.highlighted_text {
            output.push_str(&self.format_header("Highlighted Skills", 3));
            output.push_str(&format!("{}\n", self.format_highlighted(highlighted)));
        }

        if let Some(top_terms) = &report.top_terms {
            output.push_str(&self.format_header("Top Terms", 3));
            for (i, term) in top_terms.iter().enumerate() {
                output.push_str(&format!("  {}. {} ({})\n", i + 1, term.term, term.count));
            }
        }

        if let Some(leaderboard) = &report.leaderboard {
            output.push_str(&self.format_header("Leaderboard", 2));
            if leaderboard.is_empty() {
                output.push_str(&format!("  {}\n", self.colorize("(no documents)", Color::BrightBlack)));
            }
            for entry in leaderboard {
                output.push_str(&format!("{}. {} - Highlighted Keywords Count: {}\n",
                    entry.rank,
                    self.colorize(&entry.document, Color::Cyan),
                    entry.skill_hits
                ));
            }
        }

        if !report.metadata.skills.is_empty() {
            output.push_str(&format!("\nSkills: {}\n", report.metadata.skills.join(", ")));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &InsightReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_list(words: &[String]) -> String {
        if words.is_empty() {
            return "_None_\n\n".to_string();
        }
        let items: Vec<String> = words.iter().map(|word| format!("`{}`", word)).collect();
        format!("{}\n\n", items.join(", "))
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &InsightReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", report.metadata.kind.title()));

        if self.include_metadata {
            output.push_str(&format!("**Document:** `{}` | **Generated:** {}\n\n",
                report.subject(),
                format_timestamp(report)
            ));
            if let Some(token_count) = report.metadata.token_count {
                output.push_str(&format!("**Tokens analyzed:** {}\n\n", token_count));
            }
        }

        if let Some(summary) = &report.summary {
            output.push_str("## Summary\n\n");
            output.push_str(&format!("> {}\n\n", summary.replace('\n', "\n> ")));
        }

        if let Some(strengths) = &report.strengths {
            output.push_str(&format!("## Strengths ({})\n\n", strengths.len()));
            output.push_str(&Self::markdown_list(strengths));
        }

        if let Some(weaknesses) = &report.weaknesses {
            output.push_str(&format!("## Weaknesses ({})\n\n", weaknesses.len()));
            output.push_str(&Self::markdown_list(weaknesses));
        }

        if let Some(job_titles) = &report.job_titles {
            output.push_str("## Suggested Job Titles\n\n");
            output.push_str(&Self::markdown_list(job_titles));
        }

        if let Some(highlighted) = &report.highlighted_text {
            output.push_str("## Highlighted Skills\n\n");
            output.push_str(&format!("{}\n\n", highlighted));
        }

        if let Some(top_terms) = &report.top_terms {
            output.push_str("## Top Terms\n\n");
            output.push_str("| Term | Count |\n");
            output.push_str("|------|-------|\n");
            for term in top_terms {
                output.push_str(&format!("| {} | {} |\n", term.term, term.count));
            }
            output.push('\n');
        }

        if let Some(leaderboard) = &report.leaderboard {
            output.push_str("## Leaderboard\n\n");
            output.push_str("| Rank | Resume | Highlighted Keywords |\n");
            output.push_str("|------|--------|----------------------|\n");
            for entry in leaderboard {
                output.push_str(&format!("| {} | {} | {} |\n", entry.rank, entry.document, entry.skill_hits));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by resume-insight v{}*\n", report.metadata.version));
            if !report.metadata.skills.is_empty() {
                output.push_str(&format!("*Skills: {}*\n", report.metadata.skills.join(", ")));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &InsightReport) -> HtmlTemplate {
        HtmlTemplate {
            include_styles: self.include_styles,
            title: report.metadata.kind.title().to_string(),
            subject: report.subject(),
            generated_at: format_timestamp(report),
            has_summary: report.summary.is_some(),
            summary: report.summary.clone().unwrap_or_default(),
            has_strengths: report.strengths.is_some(),
            strengths: report.strengths.clone().unwrap_or_default(),
            has_weaknesses: report.weaknesses.is_some(),
            weaknesses: report.weaknesses.clone().unwrap_or_default(),
            has_job_titles: report.job_titles.is_some(),
            job_titles: report.job_titles.clone().unwrap_or_default(),
            has_highlighted_text: report.highlighted_text.is_some(),
            highlighted_words: report
                .highlighted_text
                .as_deref()
                .map(highlighted_words)
                .unwrap_or_default(),
            has_top_terms: report.top_terms.is_some(),
            top_terms: report.top_terms.clone().unwrap_or_default(),
            has_leaderboard: report.leaderboard.is_some(),
            leaderboard: report
                .leaderboard
                .iter()
                .flatten()
                .map(|entry| HtmlLeaderboardRow {
                    rank: entry.rank,
                    document: entry.document.clone(),
                    skill_hits: entry.skill_hits,
                })
                .collect(),
            has_skills: !report.metadata.skills.is_empty(),
            skills: report.metadata.skills.join(", "),
            version: report.metadata.version.clone(),
        }
    }
}

/// Split highlighted text into words, unwrapping the `<mark>` pairs
fn highlighted_words(highlighted: &str) -> Vec<HtmlHighlightedWord> {
    highlighted
        .split(' ')
        .map(|word| match word
            .strip_prefix("<mark>")
            .and_then(|rest| rest.strip_suffix("</mark>"))
        {
            Some(skill) => HtmlHighlightedWord { text: skill.to_string(), marked: true },
            None => HtmlHighlightedWord { text: word.to_string(), marked: false },
        })
        .collect()
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &InsightReport) -> Result<String> {
        let template_data = self.create_template_data(report);
        Ok(template_data.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &InsightReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, document_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(document_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_insight{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_insight{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_insight{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_insight{}.html", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::leaderboard::LeaderboardEntry;
    use crate::processing::lexical::{SkillSet, StrengthWeaknessAnalysis};

    fn strengths_report() -> InsightReport {
        let analysis = StrengthWeaknessAnalysis {
            strengths: vec!["python".into(), "developer".into()],
            weaknesses: vec!["hiking".into()],
            highlighted_text: "<mark>python</mark> developer <mark>python</mark>".into(),
        };
        InsightReport::strengths("jane.pdf", analysis, &SkillSet::new(["python"]))
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false).format_report(&strengths_report()).unwrap();

        assert!(output.contains("█ Strength Analysis"));
        assert!(output.contains("Strengths (2)"));
        assert!(output.contains("python, developer"));
        assert!(output.contains("[python] developer [python]"));
        assert!(!output.contains("Weaknesses"));
    }

    #[test]
    fn test_console_leaderboard_lines() {
        let entries = vec![
            LeaderboardEntry { rank: 1, document: "d2.pdf".into(), skill_hits: 5 },
            LeaderboardEntry { rank: 2, document: "d1.pdf".into(), skill_hits: 2 },
        ];
        let report = InsightReport::leaderboard(entries, &SkillSet::new(["ai"]));
        let output = ConsoleFormatter::new(false).format_report(&report).unwrap();

        let first = output.find("1. d2.pdf - Highlighted Keywords Count: 5").unwrap();
        let second = output.find("2. d1.pdf - Highlighted Keywords Count: 2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_json_output() {
        let output = JsonFormatter::new(false).format_report(&strengths_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["strengths"][0], "python");
        assert_eq!(value["metadata"]["documents"][0], "jane.pdf");
    }

    #[test]
    fn test_markdown_output() {
        let output = MarkdownFormatter::new(true).format_report(&strengths_report()).unwrap();

        assert!(output.starts_with("# Strength Analysis"));
        assert!(output.contains("`python`, `developer`"));
        assert!(output.contains("<mark>python</mark> developer"));
        assert!(output.contains("*Skills: python*"));
    }

    #[test]
    fn test_html_keeps_marks_and_escapes_text() {
        let mut report = strengths_report();
        report.highlighted_text = Some("<mark>python</mark> a<b".into());
        report.metadata.documents = vec!["<cv>.pdf".into()];

        let output = HtmlFormatter::new(false).format_report(&report).unwrap();

        assert!(output.contains("<mark>python</mark> a&"));
        assert!(!output.contains("a<b"));
        assert!(!output.contains("<cv>"));
        assert!(!output.contains("<style>"));
        assert!(output.contains("<span>developer</span>"));
    }

    #[test]
    fn test_highlighted_words() {
        let words = highlighted_words("<mark>rust</mark> and <mark>ai</mark>");

        assert_eq!(words.len(), 3);
        assert!(words[0].marked && words[0].text == "rust");
        assert!(!words[1].marked && words[1].text == "and");
        assert!(words[2].marked && words[2].text == "ai");
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "uploads/jane.pdf", false), "jane_insight.json");
        assert_eq!(suggest_filename(&OutputFormat::Html, "jane.pdf", false), "jane_insight.html");
        assert!(suggest_filename(&OutputFormat::Markdown, "jane.pdf", true).ends_with(".md"));
    }
}
