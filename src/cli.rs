//! CLI interface for the portfolio mapper

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-mapper")]
#[command(about = "Map extracted CV JSON into portfolio page sections")]
#[command(
    long_about = "Reshape a CV JSON document into the ordered section view models a portfolio site renders, with heuristic achievement mining over experience prose"
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
    /// Map a CV JSON document to portfolio sections
    Map {
        /// Path to the CV JSON file
        #[arg(short, long)]
        cv: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Skip achievement mining over experience prose
        #[arg(long)]
        no_achievements: bool,

        /// List every section's entries
        #[arg(short, long)]
        detailed: bool,
    },

    /// Mine achievements from job-description text
    Extract {
        /// Path to a plain-text file to mine (TXT, MD)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Inline text to mine
        #[arg(short, long)]
        text: Option<String>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
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
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(&PathBuf::from("cv.json"), &["json"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.pdf"), &["json"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("cv"), &["json"]).is_err());
    }
}
