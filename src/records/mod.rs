//! Analysis record persistence and aggregate reporting

pub mod analytics;
pub mod store;

pub use analytics::{Aggregator, AnalyticsSummary, HistogramBin};
pub use store::{AnalysisRecord, RecordStore};
