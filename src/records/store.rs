//! Append-only CSV log of completed analyses
//!
//! The header names and their order are a persisted wire contract; the
//! aggregator reads columns by name, so new fields may only be added at
//! the end.

use crate::error::{OptiScoreError, Result};
use crate::llm::parser::AnalysisResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

pub const RECORD_HEADERS: [&str; 5] = [
    "timestamp",
    "resume_name",
    "jd_match",
    "missing_keywords_count",
    "missing_keywords",
];

/// At most this many keywords are kept in the preview column.
pub const KEYWORD_PREVIEW_LIMIT: usize = 5;

/// One persisted row. `missing_keywords` holds only a preview;
/// `missing_keywords_count` is the authoritative keyword count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub timestamp: String,
    pub resume_name: String,
    pub jd_match: String,
    pub missing_keywords_count: u64,
    pub missing_keywords: String,
}

impl AnalysisRecord {
    pub fn from_analysis(resume_name: &str, result: &AnalysisResult) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            resume_name: resume_name.to_string(),
            jd_match: result.match_percentage.clone(),
            missing_keywords_count: result.missing_keywords.len() as u64,
            missing_keywords: result
                .missing_keywords
                .iter()
                .take(KEYWORD_PREVIEW_LIMIT)
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends exactly one row, creating the log and its header lazily.
    /// Prior rows are never rewritten or reordered.
    pub fn append(&self, record: &AnalysisRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| OptiScoreError::Persistence(e.to_string()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| OptiScoreError::Persistence(e.to_string()))?;

        let needs_header = file.metadata().map(|m| m.len() == 0).unwrap_or(true);

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer.write_record(RECORD_HEADERS)?;
        }
        writer.serialize(record)?;
        writer
            .flush()
            .map_err(|e| OptiScoreError::Persistence(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(keywords: &[&str]) -> AnalysisResult {
        AnalysisResult {
            match_percentage: "75%".to_string(),
            missing_keywords: keywords.iter().map(|k| k.to_string()).collect(),
            profile_summary: "Solid candidate.".to_string(),
        }
    }

    #[test]
    fn test_record_preview_capped_at_five() {
        let result = sample_result(&["a", "b", "c", "d", "e", "f", "g"]);
        let record = AnalysisRecord::from_analysis("resume.pdf", &result);

        assert_eq!(record.missing_keywords_count, 7);
        assert_eq!(record.missing_keywords, "a, b, c, d, e");
    }

    #[test]
    fn test_record_count_matches_true_length() {
        let result = sample_result(&["Docker", "Kubernetes"]);
        let record = AnalysisRecord::from_analysis("resume.docx", &result);

        assert_eq!(record.missing_keywords_count, 2);
        assert_eq!(record.missing_keywords, "Docker, Kubernetes");
    }

    #[test]
    fn test_append_creates_log_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        let store = RecordStore::new(&path);

        let record = AnalysisRecord::from_analysis("resume.pdf", &sample_result(&["Rust"]));
        store.append(&record).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "timestamp,resume_name,jd_match,missing_keywords_count,missing_keywords"
        );
    }

    #[test]
    fn test_append_n_times_yields_n_plus_one_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        let store = RecordStore::new(&path);

        for i in 0..4 {
            let record =
                AnalysisRecord::from_analysis(&format!("resume_{}.pdf", i), &sample_result(&[]));
            store.append(&record).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 5);
        // Header appears exactly once
        assert_eq!(content.matches("timestamp").count(), 1);
    }

    #[test]
    fn test_append_into_missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("records.csv");
        let store = RecordStore::new(&path);

        let record = AnalysisRecord::from_analysis("resume.pdf", &sample_result(&[]));
        store.append(&record).unwrap();
        assert!(path.exists());
    }
}
