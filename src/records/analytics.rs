//! Aggregate reporting over the persisted analysis log

use crate::config::RecordsConfig;
use crate::error::{OptiScoreError, Result};
use crate::llm::parser::NOT_AVAILABLE;
use crate::records::store::AnalysisRecord;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct AnalyticsSummary {
    pub total_analyses: usize,
    /// Mean of the numeric match values; None when every record is "N/A"
    pub average_match: Option<f64>,
    pub total_missing_keywords: u64,
    pub histogram: Vec<HistogramBin>,
    /// Most recent records, oldest first
    pub recent: Vec<AnalysisRecord>,
}

pub struct Aggregator {
    path: PathBuf,
    tail_size: usize,
    histogram_bins: usize,
}

impl Aggregator {
    pub fn new(path: impl Into<PathBuf>, tail_size: usize, histogram_bins: usize) -> Self {
        Self {
            path: path.into(),
            tail_size,
            histogram_bins: histogram_bins.max(1),
        }
    }

    pub fn from_config(config: &RecordsConfig) -> Self {
        Self::new(&config.path, config.tail_size, config.histogram_bins)
    }

    /// Reads the whole log and computes the report. An absent or empty log
    /// is the soft empty-dataset signal, never a hard failure.
    pub fn summarize(&self) -> Result<AnalyticsSummary> {
        if !self.path.exists() {
            return Err(OptiScoreError::EmptyDataset);
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<AnalysisRecord>, _>>()?;

        if records.is_empty() {
            return Err(OptiScoreError::EmptyDataset);
        }

        let matches: Vec<f64> = records
            .iter()
            .filter_map(|r| parse_match_value(&r.jd_match))
            .collect();

        let average_match = if matches.is_empty() {
            None
        } else {
            Some(matches.iter().sum::<f64>() / matches.len() as f64)
        };

        let total_missing_keywords = records.iter().map(|r| r.missing_keywords_count).sum();

        let tail_start = records.len().saturating_sub(self.tail_size);
        let recent = records[tail_start..].to_vec();

        Ok(AnalyticsSummary {
            total_analyses: records.len(),
            average_match,
            total_missing_keywords,
            histogram: build_histogram(&matches, self.histogram_bins),
            recent,
        })
    }
}

/// Parses a stored match value like "78%" into a float. The "N/A" sentinel
/// and anything unparseable yield None and are excluded from averages.
pub fn parse_match_value(jd_match: &str) -> Option<f64> {
    let trimmed = jd_match.trim();
    if trimmed.eq_ignore_ascii_case(NOT_AVAILABLE) {
        return None;
    }
    trimmed.trim_end_matches('%').trim().parse::<f64>().ok()
}

/// Equal-width bins over the observed range. A degenerate range (all values
/// identical) collapses to a single bin holding everything.
fn build_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        histogram[index].count += 1;
    }

    histogram
}
