//! Skill matcher: score a candidate's skills against a job description

mod cli;
mod config;
mod error;
mod input;
mod matching;
mod output;

use clap::Parser;
use cli::{CatalogAction, Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, SkillMatcherError};
use indicatif::ProgressBar;
use input::manager::InputManager;
use log::{error, info};
use output::{save_report_to_file, ReportGenerator};
use std::process;
use std::time::Duration;

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

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            job,
            skills,
            output,
            detailed,
            save,
        } => {
            info!("Starting skill match analysis");

            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| SkillMatcherError::InvalidInput(format!("Job description file: {}", e)))?;
            cli::validate_file_extension(&skills, &["json", "txt"])
                .map_err(|e| SkillMatcherError::InvalidInput(format!("Skills file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(SkillMatcherError::InvalidInput)?;

            let mut input_manager = InputManager::new();
            let job_text = input_manager.extract_text(&job).await?;
            let candidate_skills = input_manager.load_candidate_skills(&skills).await?;

            info!(
                "Loaded job description ({} characters) and {} candidate skills",
                job_text.len(),
                candidate_skills.len()
            );

            let catalog = config.skill_catalog();

            // The spinner is cosmetic; scoring itself is synchronous and
            // its output does not depend on elapsed time.
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Analyzing skill match...");
            spinner.enable_steady_tick(Duration::from_millis(80));

            let report = matching::score(&job_text, &candidate_skills, &catalog)?;

            spinner.finish_and_clear();

            let generator = ReportGenerator::new(
                config.output.color_output,
                detailed || config.output.detailed,
                config.output.include_recommendations,
            );
            let rendered = generator.format(&report, output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            Ok(())
        }

        Commands::Catalog { action } => {
            let catalog = config.skill_catalog();
            match action {
                CatalogAction::List => {
                    println!("Recognized skills ({}):", catalog.len());
                    for name in catalog.iter() {
                        println!("  {}", name);
                    }
                }
                CatalogAction::Check { name } => {
                    if catalog.contains(&name) {
                        println!("\"{}\" is a recognized skill", name);
                    } else {
                        println!(
                            "\"{}\" is not in the catalog (names are case-sensitive)",
                            name
                        );
                    }
                }
            }
            Ok(())
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        SkillMatcherError::Configuration(format!(
                            "Failed to serialize config: {}",
                            e
                        ))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::default().save()?;
                    println!("Configuration reset to defaults");
                }
                ConfigAction::Path => {
                    println!("{}", Config::config_path().display());
                }
            }
            Ok(())
        }
    }
}
