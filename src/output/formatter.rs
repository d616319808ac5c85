//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::matching::{MatchReport, MatchTier};
use chrono::Utc;
use colored::Colorize;
use std::path::Path;

/// Trait for rendering match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    include_recommendations: bool,
}

/// JSON formatter for structured consumption
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Coordinates the individual formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, include_recommendations: bool) -> Self {
        Self {
            use_colors,
            detailed,
            include_recommendations,
        }
    }

    fn colorize(&self, text: &str, tier: MatchTier) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match tier {
            MatchTier::Strong => text.green().bold().to_string(),
            MatchTier::Moderate => text.yellow().bold().to_string(),
            MatchTier::Weak => text.red().bold().to_string(),
        }
    }

    fn bullet_list(items: &[String], marker: &str) -> String {
        items
            .iter()
            .map(|item| format!("  {} {}", marker, item))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let tier = report.tier();
        let mut out = String::new();

        out.push_str("\nSkill Match Report\n");
        out.push_str("==================\n\n");
        out.push_str(&format!(
            "Match: {} ({})\n",
            self.colorize(&format!("{}%", report.percentage), tier),
            tier.label()
        ));

        if report.required_skills.is_empty() {
            out.push_str("\nNo recognized skills were found in the job description.\n");
            return Ok(out);
        }

        if !report.matching_skills.is_empty() {
            out.push_str("\nMatching skills:\n");
            let marker = if self.use_colors {
                "✓".green().to_string()
            } else {
                "✓".to_string()
            };
            out.push_str(&Self::bullet_list(&report.matching_skills, &marker));
            out.push('\n');
        }

        if !report.missing_skills.is_empty() {
            out.push_str("\nMissing skills:\n");
            let marker = if self.use_colors {
                "✗".red().to_string()
            } else {
                "✗".to_string()
            };
            out.push_str(&Self::bullet_list(&report.missing_skills, &marker));
            out.push('\n');
        }

        if self.detailed {
            out.push_str("\nRequired by the job description:\n");
            out.push_str(&Self::bullet_list(&report.required_skills, "-"));
            out.push('\n');

            out.push_str("\nRecognized candidate skills:\n");
            if report.candidate_recognized_skills.is_empty() {
                out.push_str("  (none)\n");
            } else {
                out.push_str(&Self::bullet_list(&report.candidate_recognized_skills, "-"));
                out.push('\n');
            }
        }

        if !report.unrecognized_candidate_skills.is_empty() {
            out.push_str("\nNot in the skill catalog (ignored for scoring):\n");
            out.push_str(&Self::bullet_list(&report.unrecognized_candidate_skills, "-"));
            out.push('\n');
        }

        if self.include_recommendations && !report.missing_skills.is_empty() {
            out.push_str(&format!(
                "\nRecommendation: add or gain experience with {} to improve the match.\n",
                report.missing_skills.join(", ")
            ));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_list(items: &[String]) -> String {
        if items.is_empty() {
            "_none_".to_string()
        } else {
            items
                .iter()
                .map(|item| format!("- {}", item))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Skill Match Report\n\n");
        if self.include_metadata {
            out.push_str(&format!(
                "Generated: {}\n\n",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        out.push_str(&format!(
            "**Match: {}%** ({})\n\n",
            report.percentage,
            report.tier().label()
        ));

        out.push_str("## Required Skills\n\n");
        out.push_str(&Self::markdown_list(&report.required_skills));
        out.push_str("\n\n## Matching Skills\n\n");
        out.push_str(&Self::markdown_list(&report.matching_skills));
        out.push_str("\n\n## Missing Skills\n\n");
        out.push_str(&Self::markdown_list(&report.missing_skills));

        if !report.unrecognized_candidate_skills.is_empty() {
            out.push_str("\n\n## Unrecognized Candidate Skills\n\n");
            out.push_str(&Self::markdown_list(&report.unrecognized_candidate_skills));
        }

        out.push('\n');
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool, include_recommendations: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed, include_recommendations),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn format(&self, report: &MatchReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

/// Write formatted report content to a file
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
