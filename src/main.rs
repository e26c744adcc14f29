//! Resume analyzer: resume and job description analysis tool

mod analysis;
mod cli;
mod config;
mod error;
mod input;
mod output;

use analysis::engine::AnalysisEngine;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeAnalyzerError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::ReportGenerator;
use output::report::AnalysisReport;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
        } => {
            info!("Starting resume analysis");

            // Validate input files
            cli::validate_file_extension(&resume, &["pdf", "docx", "txt", "md"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            // Parse output format
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeAnalyzerError::InvalidInput)?;

            // Extract text from both files
            let mut input_manager =
                InputManager::new().with_cache(config.processing.enable_caching);

            info!("Extracting text from resume: {}", resume.display());
            let resume_text = input_manager.extract_text(&resume).await?;

            info!("Extracting text from job description: {}", job.display());
            let job_text = input_manager.extract_text(&job).await?;

            info!(
                "Extracted {} resume characters, {} job description characters",
                resume_text.len(),
                job_text.len()
            );

            // Run the analysis pipeline
            let engine = AnalysisEngine::new(&config)?;
            let started = Instant::now();
            let analysis = engine.analyze(&resume_text, &job_text)?;
            let elapsed_ms = started.elapsed().as_millis() as u64;

            info!("Analysis completed in {}ms", elapsed_ms);

            // Assemble and format the report
            let report = AnalysisReport::new(
                analysis,
                resume.to_string_lossy().to_string(),
                job.to_string_lossy().to_string(),
                elapsed_ms,
            );

            let generator =
                ReportGenerator::new(config.output.color_output, detailed || config.output.detailed);
            let rendered = generator.generate(&report, &output_format)?;

            println!("{}", rendered);

            if let Some(save_path) = save {
                generator.save_to_file(&rendered, &save_path)?;
                info!("Report saved to: {}", save_path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current Configuration\n");
                println!("Caching enabled: {}", config.processing.enable_caching);
                println!("\nAnalysis thresholds:");
                println!(
                    "  Clarity (avg words/sentence): {} - {}",
                    config.analysis.clarity_min_avg_words, config.analysis.clarity_max_avg_words
                );
                println!(
                    "  Length (words): {} - {}",
                    config.analysis.length_min_words, config.analysis.length_max_words
                );
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
