//! CLI interface for the skill matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skill-matcher")]
#[command(about = "Skill-based job description compatibility scoring tool")]
#[command(
    long_about = "Extract required skills from a job description and score them against a candidate's declared skill list"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a candidate skill list against a job description
    Match {
        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Path to candidate skills file (JSON, TXT)
        #[arg(short, long)]
        skills: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Output detailed report
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Inspect the configured skill catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List recognized skill names
    List,

    /// Check whether a skill name is recognized
    Check {
        /// Canonical skill name to look up
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let path = PathBuf::from("skills.json");
        assert!(validate_file_extension(&path, &["json", "txt"]).is_ok());
        assert!(validate_file_extension(&path, &["txt"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("skills"), &["json"]).is_err());
    }
}
