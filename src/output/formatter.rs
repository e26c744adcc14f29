//! Output formatters: console, JSON, and markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use colored::Colorize;
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored, human-readable presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured data and downstream consumers
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and shareable reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Coordinates the individual formatters and handles saving to disk
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize_score(&self, score: f64) -> String {
        let text = format!("{:.2}%", score);
        if !self.use_colors {
            return text;
        }
        if score >= 80.0 {
            text.green().bold().to_string()
        } else if score >= 50.0 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut out = String::new();

        out.push_str(&format!("{}\n", self.heading("Resume Analysis Report")));
        out.push_str(&format!(
            "Match score: {}\n\n",
            self.colorize_score(analysis.score)
        ));

        out.push_str(&format!("{}\n", self.heading("Skills")));
        if analysis.skills_match.matched.is_empty() {
            out.push_str("  Matched: none\n");
        } else {
            out.push_str(&format!(
                "  Matched: {}\n",
                analysis.skills_match.matched.join(", ")
            ));
        }
        if analysis.skills_match.missing.is_empty() {
            out.push_str("  Missing: none\n");
        } else {
            out.push_str(&format!(
                "  Missing: {}\n",
                analysis.skills_match.missing.join(", ")
            ));
        }

        out.push_str(&format!("\n{}\n", self.heading("Format")));
        out.push_str(&format!("  Structure: {}\n", analysis.format.structure));
        out.push_str(&format!("  Clarity:   {}\n", analysis.format.clarity));
        out.push_str(&format!("  Length:    {}\n", analysis.format.length));

        out.push_str(&format!("\n{}\n", self.heading("Suggestions")));
        for (i, suggestion) in analysis.suggestions.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }

        if self.detailed {
            out.push_str(&format!("\n{}\n", self.heading("Chart Axes")));
            out.push_str(&format!(
                "  Technical Skills: {:.1}\n",
                report.radar.technical_skills
            ));
            out.push_str(&format!("  Format:           {:.1}\n", report.radar.format));
            out.push_str(&format!(
                "  Overall Match:    {:.1}\n",
                report.radar.overall_match
            ));

            out.push_str(&format!("\n{}\n", self.heading("Metadata")));
            out.push_str(&format!("  Resume: {}\n", report.metadata.resume_file));
            out.push_str(&format!("  Job:    {}\n", report.metadata.job_file));
            out.push_str(&format!(
                "  Generated: {} (v{}, {}ms)\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.analyzer_version,
                report.metadata.processing_time_ms
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
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut out = String::new();

        out.push_str("# Resume Analysis Report\n\n");
        out.push_str(&format!("**Match score:** {:.2}%\n\n", analysis.score));

        out.push_str("## Skills\n\n");
        out.push_str(&format!(
            "- **Matched:** {}\n",
            if analysis.skills_match.matched.is_empty() {
                "none".to_string()
            } else {
                analysis.skills_match.matched.join(", ")
            }
        ));
        out.push_str(&format!(
            "- **Missing:** {}\n\n",
            if analysis.skills_match.missing.is_empty() {
                "none".to_string()
            } else {
                analysis.skills_match.missing.join(", ")
            }
        ));

        out.push_str("## Format\n\n");
        out.push_str("| Aspect | Rating |\n|--------|--------|\n");
        out.push_str(&format!("| Structure | {} |\n", analysis.format.structure));
        out.push_str(&format!("| Clarity | {} |\n", analysis.format.clarity));
        out.push_str(&format!("| Length | {} |\n\n", analysis.format.length));

        out.push_str("## Suggestions\n\n");
        for (i, suggestion) in analysis.suggestions.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, suggestion));
        }

        if self.include_metadata {
            out.push_str(&format!(
                "\n---\n\n*Generated {} by resume-analyzer v{} in {}ms*\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
                report.metadata.analyzer_version,
                report.metadata.processing_time_ms
            ));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn generate(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    pub fn save_to_file(&self, content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, content)?;
        Ok(())
    }
}
