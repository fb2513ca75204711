//! CLI interface for optiscore

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "optiscore")]
#[command(about = "ATS-style resume scoring against a job description")]
#[command(
    long_about = "Score a resume against a job description with a hosted LLM: match percentage, missing keywords, and a profile summary, with local analytics over past analyses"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to the resume file (PDF or DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to the job description text file
        #[arg(short, long)]
        jd: PathBuf,
    },

    /// Show the analytics dashboard over past analyses
    Report {
        /// Override how many recent records to show
        #[arg(short, long)]
        tail: Option<usize>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Validate file extension before any extraction or network work happens.
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
