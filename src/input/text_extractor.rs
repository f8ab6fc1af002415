//! Text extraction from various file formats

use crate::error::{Result, ResumeInsightError};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract the text of every page, concatenated in page order
    pub fn extract_bytes(&self, bytes: &[u8], source: &str) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ResumeInsightError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", source, e))
        })
    }
}

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        self.extract_bytes(&bytes, &path.display().to_string())
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        self.markdown_to_text(&markdown_content)
    }
}

impl MarkdownExtractor {
    pub fn markdown_to_text(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        self.html_to_text(&html_output)
    }

    fn html_to_text(&self, html: &str) -> Result<String> {
        let text = html
            .replace("<br>", "\n")
            .replace("<br />", "\n")
            .replace("</p>", "\n\n")
            .replace("</li>", "\n")
            .replace("&nbsp;", " ");

        let tag_regex = Regex::new(r"<[^>]*>").map_err(|e| {
            ResumeInsightError::InvalidInput(format!("Invalid tag pattern: {}", e))
        })?;
        // Entities are decoded only once real tags are gone; `&amp;` goes last
        let clean_text = tag_regex
            .replace_all(&text, "")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");

        let lines: Vec<&str> = clean_text
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text() {
        let markdown = "# Jane Roe\n\n**Senior** developer & mentor.\n\n- Python\n- Rust\n";
        let text = MarkdownExtractor.markdown_to_text(markdown).unwrap();

        assert!(text.contains("Jane Roe"));
        assert!(text.contains("Senior developer & mentor."));
        assert!(text.contains("Python\nRust"));
        assert!(!text.contains('#'));
        assert!(!text.contains("**"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_escaped_angle_brackets_survive() {
        let markdown = "Latency 5 < 10 > 2 ms\n\nKnows \\<b\\> tags and &amp;lt;\n";
        let text = MarkdownExtractor.markdown_to_text(markdown).unwrap();

        assert!(text.contains("Latency 5 < 10 > 2 ms"));
        assert!(text.contains("Knows <b> tags and &lt;"));
    }

    #[test]
    fn test_invalid_pdf_bytes() {
        let result = PdfExtractor.extract_bytes(b"definitely not a pdf", "broken.pdf");
        assert!(matches!(result, Err(ResumeInsightError::PdfExtraction(_))));
    }
}
