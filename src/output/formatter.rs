//! Console and JSON formatters for pipeline output

use crate::config::OutputFormat;
use crate::error::{PortfolioMapperError, Result};
use crate::model::view::{ExtractedAchievement, MappedPortfolio, SectionData};
use colored::Colorize;

/// Trait for rendering pipeline output in one format
pub trait OutputFormatter {
    fn format_portfolio(&self, portfolio: &MappedPortfolio) -> Result<String>;
    fn format_achievements(&self, achievements: &[ExtractedAchievement]) -> Result<String>;
}

/// Human-readable console output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// Structured output for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

pub fn formatter_for(
    format: &OutputFormat,
    use_colors: bool,
    detailed: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, detailed)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_portfolio(&self, portfolio: &MappedPortfolio) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.heading("Portfolio"));
        out.push('\n');
        if let Some(name) = &portfolio.hero.name {
            out.push_str(&format!("  {}", name));
            if let Some(title) = &portfolio.hero.title {
                out.push_str(&format!(" {}", self.dim(&format!("({})", title))));
            }
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&self.heading(&format!("Sections ({})", portfolio.sections.len())));
        out.push('\n');

        for section in &portfolio.sections {
            out.push_str(&format!(
                "  • {} {} — {} {}\n",
                section.title,
                self.dim(&format!("[{}]", section.kind)),
                section.data.len(),
                if section.data.len() == 1 { "entry" } else { "entries" },
            ));

            if self.detailed {
                match &section.data {
                    SectionData::Paragraph(text) => {
                        out.push_str(&format!("      {}\n", text));
                    }
                    SectionData::Timeline(entries) => {
                        for entry in entries {
                            out.push_str(&format!(
                                "      {} — {} ({})\n",
                                entry.title, entry.subtitle, entry.period
                            ));
                        }
                    }
                    SectionData::Bento(groups) => {
                        for group in groups {
                            out.push_str(&format!(
                                "      {}: {}\n",
                                group.name,
                                group.skills.join(", ")
                            ));
                        }
                    }
                    SectionData::Accomplishments(items) => {
                        for item in items {
                            let badge = item
                                .badge
                                .as_deref()
                                .map(|badge| format!(" [{}]", badge))
                                .unwrap_or_default();
                            out.push_str(&format!("      {}{}\n", item.title, badge));
                        }
                    }
                    SectionData::Contact(items) => {
                        for item in items {
                            out.push_str(&format!("      {}: {}\n", item.label, item.value));
                        }
                    }
                    _ => {}
                }
            }
        }

        Ok(out)
    }

    fn format_achievements(&self, achievements: &[ExtractedAchievement]) -> Result<String> {
        if achievements.is_empty() {
            return Ok("No achievements found.".to_string());
        }

        let mut out = String::new();
        out.push_str(&self.heading(&format!("Achievements ({})", achievements.len())));
        out.push('\n');

        for (i, achievement) in achievements.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} {} — {:.0}% confidence\n",
                i + 1,
                achievement.title,
                self.dim(&format!("[{}]", achievement.icon)),
                achievement.confidence * 100.0
            ));
            if self.detailed {
                out.push_str(&format!("     {}\n", achievement.description));
            }
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.map_err(|e| {
            PortfolioMapperError::OutputFormatting(format!("Failed to render JSON: {}", e))
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_portfolio(&self, portfolio: &MappedPortfolio) -> Result<String> {
        self.to_json(portfolio)
    }

    fn format_achievements(&self, achievements: &[ExtractedAchievement]) -> Result<String> {
        self.to_json(&achievements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::view::{HeroViewModel, SectionKind, SectionViewModel};

    fn sample_portfolio() -> MappedPortfolio {
        MappedPortfolio {
            hero: HeroViewModel {
                name: Some("Jane Doe".to_string()),
                title: Some("Engineer".to_string()),
                tagline: None,
            },
            sections: vec![SectionViewModel {
                id: "summary".to_string(),
                kind: SectionKind::Paragraph,
                title: "Summary".to_string(),
                data: SectionData::Paragraph("A decade of plumbing data.".to_string()),
            }],
        }
    }

    #[test]
    fn test_console_portfolio_output() {
        let formatter = ConsoleFormatter::new(false, true);
        let rendered = formatter.format_portfolio(&sample_portfolio()).unwrap();

        assert!(rendered.contains("Jane Doe"));
        assert!(rendered.contains("Summary [paragraph]"));
        assert!(rendered.contains("A decade of plumbing data."));
    }

    #[test]
    fn test_json_portfolio_output() {
        let formatter = JsonFormatter::new(false);
        let rendered = formatter.format_portfolio(&sample_portfolio()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["hero"]["name"], "Jane Doe");
        assert_eq!(value["sections"][0]["type"], "paragraph");
    }

    #[test]
    fn test_unserializable_value_is_an_output_formatting_error() {
        let formatter = JsonFormatter::new(false);
        // JSON object keys must be strings, so this map cannot serialize
        let mut bad = std::collections::HashMap::new();
        bad.insert(vec![1u8], "x");

        assert!(matches!(
            formatter.to_json(&bad),
            Err(PortfolioMapperError::OutputFormatting(_))
        ));
    }

    #[test]
    fn test_console_empty_achievements() {
        let formatter = ConsoleFormatter::new(false, false);
        let rendered = formatter.format_achievements(&[]).unwrap();
        assert_eq!(rendered, "No achievements found.");
    }
}
