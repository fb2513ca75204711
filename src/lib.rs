//! OptiScore: ATS-style resume and job description scoring

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod records;

pub use config::Config;
pub use error::{OptiScoreError, Result};
