//! Portfolio mapper: CV JSON to portfolio section view models

use clap::Parser;
use log::{error, info};
use portfolio_mapper::cli::{self, Cli, Commands, ConfigAction};
use portfolio_mapper::config::Config;
use portfolio_mapper::error::{PortfolioMapperError, Result};
use portfolio_mapper::extraction::AchievementExtractor;
use portfolio_mapper::model::cv::CvDocument;
use portfolio_mapper::output::formatter::formatter_for;
use portfolio_mapper::pipeline::PortfolioPipeline;
use std::process;

fn main() {
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

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Map {
            cv,
            output,
            save,
            no_achievements,
            detailed,
        } => {
            cli::validate_file_extension(&cv, &["json"])
                .map_err(|e| PortfolioMapperError::InvalidInput(format!("CV file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(PortfolioMapperError::InvalidInput)?;

            info!("Mapping CV document: {}", cv.display());
            let raw = std::fs::read_to_string(&cv)?;
            let document: CvDocument = serde_json::from_str(&raw)?;

            let pipeline = PortfolioPipeline::new(&config)
                .with_enrichment(config.mapping.enrich_achievements && !no_achievements);
            let portfolio = pipeline.run(Some(&document));

            println!("📄 CV: {}", cv.display());
            println!("🧩 Sections mapped: {}\n", portfolio.sections.len());

            let formatter = formatter_for(
                &output_format,
                config.output.color_output,
                detailed || config.output.detailed,
            );
            let rendered = formatter.format_portfolio(&portfolio)?;

            match save {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    println!("✅ Saved output to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Extract { file, text, output } => {
            let output_format =
                cli::parse_output_format(&output).map_err(PortfolioMapperError::InvalidInput)?;

            let prose = match (file, text) {
                (Some(path), _) => {
                    cli::validate_file_extension(&path, &["txt", "md"])
                        .map_err(|e| PortfolioMapperError::InvalidInput(format!("Text file: {}", e)))?;
                    std::fs::read_to_string(&path)?
                }
                (None, Some(text)) => text,
                (None, None) => {
                    return Err(PortfolioMapperError::InvalidInput(
                        "Provide --file or --text to extract from".to_string(),
                    ))
                }
            };

            let extractor = AchievementExtractor::with_config(config.extraction.clone());
            let achievements = extractor.extract_achievements(&prose);
            info!("Extracted {} achievements", achievements.len());

            let formatter = formatter_for(&output_format, config.output.color_output, true);
            println!("{}", formatter.format_achievements(&achievements)?);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Extraction:");
                println!("  Base confidence: {:.2}", config.extraction.base_confidence);
                println!("  Keyword bonus: {:.2}", config.extraction.keyword_bonus);
                println!("  Buzzword penalty: {:.2}", config.extraction.buzzword_penalty);
                println!("  Numeric bonus: {:.2}", config.extraction.numeric_bonus);
                println!(
                    "  Confidence threshold: {:.2}",
                    config.extraction.confidence_threshold
                );
                println!("  Max achievements: {}", config.extraction.max_achievements);
                println!("\nMapping:");
                println!(
                    "  Achievement enrichment: {}",
                    config.mapping.enrich_achievements
                );
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
