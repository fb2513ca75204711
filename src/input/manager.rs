//! Input manager routing uploaded documents to the right extractor

use crate::error::{OptiScoreError, Result};
use crate::input::file_detector::DocumentFormat;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use log::info;
use std::path::Path;

/// Upload interface carrier: binary content plus the declared filename.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| {
                OptiScoreError::InvalidInput(format!("Not a file path: {}", path.display()))
            })?;

        let bytes = tokio::fs::read(path).await?;
        Ok(Self { file_name, bytes })
    }
}

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Extracts plain text from an upload. Unsupported formats are rejected
    /// here, before any downstream work happens.
    pub fn extract_text(&self, upload: &DocumentUpload) -> Result<String> {
        match DocumentFormat::from_file_name(&upload.file_name) {
            DocumentFormat::Pdf => {
                info!("Extracting text from PDF: {}", upload.file_name);
                PdfExtractor.extract(&upload.bytes)
            }
            DocumentFormat::Docx => {
                info!("Extracting text from DOCX: {}", upload.file_name);
                DocxExtractor.extract(&upload.bytes)
            }
            DocumentFormat::Unknown => Err(OptiScoreError::UnsupportedFormat(format!(
                "'{}' is not a PDF or DOCX file",
                upload.file_name
            ))),
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
