//! resume-scorer: score a resume and print prioritized feedback

use clap::Parser;
use log::{error, info};
use resume_scorer::backend::{Backend, ResumeAnalyzer};
use resume_scorer::cli::{self, Cli, Commands, ConfigAction, RESUME_EXTENSIONS};
use resume_scorer::config::OutputFormat;
use resume_scorer::input::InputManager;
use resume_scorer::output::{resolve_save_path, save_report_to_file, Report, ReportGenerator};
use resume_scorer::{Config, Result, ResumeScorerError};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(
    command: Commands,
    mut config: Config,
    config_path: Option<PathBuf>,
) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            backend,
            output,
            save,
            detailed,
            api_key,
        } => {
            cli::validate_file_extension(&resume, RESUME_EXTENSIONS)
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Resume file: {}", e)))?;

            if let Some(backend) = backend {
                config.engine.backend =
                    cli::parse_backend(&backend).map_err(ResumeScorerError::InvalidInput)?;
            }
            let output_format = match output {
                Some(output) => {
                    cli::parse_output_format(&output).map_err(ResumeScorerError::InvalidInput)?
                }
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            info!("Analyzing {}", resume.display());

            // One file per run, nothing to reuse
            let mut input_manager = InputManager::new().with_cache(false);
            let text = input_manager.extract_text(&resume).await?;

            let analyzer = Backend::from_config(&config, api_key)?;

            let start = Instant::now();
            let analysis = analyzer.analyze(&text).await?;
            let elapsed = start.elapsed().as_millis() as u64;

            let report = Report::new(
                analysis,
                &resume.to_string_lossy(),
                analyzer.name(),
                elapsed,
            );

            // Colours never go into saved files.
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
            let content = generator.generate_report(&report, &output_format)?;

            match save {
                Some(save) => {
                    let path = resolve_save_path(&save, &output_format, &resume.to_string_lossy());
                    save_report_to_file(&content, &path)?;
                    println!("Report saved to {}", path.display());
                    if output_format != OutputFormat::Console {
                        println!(
                            "Overall score: {}/100 ({})",
                            report.analysis.score.overall,
                            report.rating()
                        );
                    }
                }
                None => println!("{}", content),
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeScorerError::Configuration(format!(
                            "Failed to serialize config: {}",
                            e
                        ))
                    })?;
                    println!("# {}", path.display());
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset to defaults at {}", path.display());
                }
                ConfigAction::Path => {
                    println!("{}", path.display());
                }
                ConfigAction::Set { key, value } => {
                    config.set(&key, &value)?;
                    config.save_to(&path)?;
                    println!("Set {} = {}", key, value);
                }
            }
        }
    }

    Ok(())
}
