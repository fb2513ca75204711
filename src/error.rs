//! Error handling for the optiscore analysis pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptiScoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Corrupt document: {0}")]
    CorruptDocument(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Model service error: {0}")]
    TransientService(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("No analysis records available")]
    EmptyDataset,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OptiScoreError>;

impl OptiScoreError {
    /// Non-fatal kinds never abort the user-facing flow; they are logged
    /// (persistence) or rendered as an informational state (empty dataset).
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            OptiScoreError::Persistence(_) | OptiScoreError::EmptyDataset
        )
    }
}

impl From<csv::Error> for OptiScoreError {
    fn from(err: csv::Error) -> Self {
        OptiScoreError::Persistence(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(OptiScoreError::MalformedResponse("not json".into()).is_fatal());
        assert!(OptiScoreError::RateLimit("quota".into()).is_fatal());
        assert!(!OptiScoreError::Persistence("disk full".into()).is_fatal());
        assert!(!OptiScoreError::EmptyDataset.is_fatal());
    }
}
