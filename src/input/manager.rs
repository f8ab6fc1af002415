//! Input manager for handling different file types

use crate::error::{Result, ResumeInsightError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Text extracted from one document on disk
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub name: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        // Validate file exists
        if !path.exists() {
            return Err(ResumeInsightError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let file_type = self.detect_file_type(path)?;

        // Route to appropriate extractor
        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ResumeInsightError::UnsupportedFormat(
                    format!("Unsupported file type for: {}", path.display())
                ));
            }
        };

        debug!("Extracted {} characters from {}", text.len(), path.display());
        Ok(text)
    }

    pub async fn load(&self, path: &Path) -> Result<LoadedDocument> {
        let text = self.extract_text(path).await?;
        Ok(LoadedDocument {
            path: path.to_path_buf(),
            name: document_name(path),
            text,
        })
    }

    /// Expand files and directories into the supported documents they name.
    ///
    /// Directory entries are sorted by file name; unsupported files inside a
    /// directory are skipped, while an unsupported file named directly is an error.
    pub async fn collect_documents(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut documents = Vec::new();

        for path in paths {
            if path.is_dir() {
                let mut entries = tokio::fs::read_dir(path).await?;
                let mut found = Vec::new();

                while let Some(entry) = entries.next_entry().await? {
                    let entry_path = entry.path();
                    if !entry_path.is_file() {
                        continue;
                    }
                    if FileType::from_path(&entry_path).is_supported() {
                        found.push(entry_path);
                    } else {
                        warn!("Skipping unsupported file: {}", entry_path.display());
                    }
                }

                found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
                info!("Found {} documents in {}", found.len(), path.display());
                documents.extend(found);
            } else {
                self.detect_file_type(path).and_then(|file_type| {
                    if file_type.is_supported() {
                        Ok(())
                    } else {
                        Err(ResumeInsightError::UnsupportedFormat(
                            format!("Unsupported file type for: {}", path.display())
                        ))
                    }
                })?;
                documents.push(path.clone());
            }
        }

        Ok(documents)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ResumeInsightError::InvalidInput(
                format!("File has no extension: {}", path.display())
            ))?;

        Ok(FileType::from_extension(extension))
    }
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
