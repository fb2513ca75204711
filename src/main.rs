//! OptiScore: ATS-style resume scoring against a job description

use clap::Parser;
use log::{error, info};
use optiscore::cli::{self, Cli, Commands, ConfigAction};
use optiscore::config::Config;
use optiscore::error::{OptiScoreError, Result};
use optiscore::input::DocumentUpload;
use optiscore::llm::client::GeminiClient;
use optiscore::output::ConsoleFormatter;
use optiscore::pipeline::{AnalysisPipeline, SessionState};
use optiscore::records::analytics::Aggregator;
use optiscore::records::store::RecordStore;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let formatter = ConsoleFormatter::new(!cli.no_color);

    if let Err(e) = run_command(cli.command, config, &formatter).await {
        print_failure(&e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, formatter: &ConsoleFormatter) -> Result<()> {
    match command {
        Commands::Analyze { resume, jd } => {
            info!("Starting resume analysis");

            // Reject unsupported uploads before touching the network
            cli::validate_file_extension(&resume, &["pdf", "docx"])
                .map_err(OptiScoreError::UnsupportedFormat)?;

            let job_description = tokio::fs::read_to_string(&jd).await?;

            // Missing credential is a fatal startup condition
            let client = GeminiClient::new(&config.model)?;

            println!("📄 Resume: {}", resume.display());
            println!("💼 Job Description: {}", jd.display());
            println!("\n📊 Analyzing your resume...");

            let upload = DocumentUpload::from_path(&resume).await?;
            let store = RecordStore::new(&config.records.path);
            let pipeline = AnalysisPipeline::new(client, store);
            let mut session = SessionState::new();

            let result = pipeline.run(&mut session, &upload, &job_description).await?;
            print!("{}", formatter.render_analysis(&result));
            Ok(())
        }

        Commands::Report { tail } => {
            let mut records_config = config.records.clone();
            if let Some(tail) = tail {
                records_config.tail_size = tail;
            }
            let aggregator = Aggregator::from_config(&records_config);

            match aggregator.summarize() {
                Ok(summary) => {
                    print!("{}", formatter.render_report(&summary));
                    Ok(())
                }
                // Informational empty state, not a failure
                Err(OptiScoreError::EmptyDataset) => {
                    print!("{}", formatter.render_empty_report());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    OptiScoreError::Configuration(format!("Failed to render config: {}", e))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

/// Surfaces each failure kind with its corrective message.
fn print_failure(err: &OptiScoreError) {
    match err {
        OptiScoreError::UnsupportedFormat(msg) => {
            eprintln!("❌ {}. Please provide a PDF or DOCX resume.", msg);
        }
        OptiScoreError::CorruptDocument(msg) => {
            eprintln!("❌ Could not read the document: {}", msg);
        }
        OptiScoreError::RateLimit(_) => {
            eprintln!(
                "⏳ Quota exceeded. Please wait a minute and try again, or upgrade your API plan for more requests."
            );
        }
        OptiScoreError::Authentication(msg) => {
            eprintln!("🔑 {}", msg);
        }
        OptiScoreError::MalformedResponse(_) => {
            eprintln!("❌ The analysis failed. Please try again.");
        }
        other => {
            eprintln!("❌ An error occurred: {}", other);
        }
    }
}
