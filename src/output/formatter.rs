//! Output formatters for console, JSON and Markdown reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeScorerError};
use crate::output::report::Report;
use crate::scoring::analysis::{AdviceItem, Impact, Insights};
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal report with optional colours
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn score_color(score: u8) -> Color {
        match score {
            80..=u8::MAX => Color::Green,
            60..=79 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn format_score(&self, label: &str, score: u8) -> String {
        let value = format!("{:>3}", score);
        format!(
            "  {:<16} {} {}\n",
            label,
            self.colorize(&value, Self::score_color(score)),
            Self::score_bar(score)
        )
    }

    fn score_bar(score: u8) -> String {
        let filled = usize::from(score.min(100)) / 5;
        format!("{}{}", "■".repeat(filled), "·".repeat(20 - filled))
    }

    fn format_impact(&self, impact: Impact) -> String {
        let (label, color) = match impact {
            Impact::Critical => ("[CRITICAL]", Color::BrightRed),
            Impact::High => ("[HIGH]", Color::Red),
            Impact::Medium => ("[MEDIUM]", Color::Yellow),
            Impact::Low => ("[LOW]", Color::Green),
        };

        if self.use_colors {
            label.color(color).bold().to_string()
        } else {
            label.to_string()
        }
    }

    fn format_advice(&self, index: usize, item: &AdviceItem) -> String {
        let mut output = format!(
            "{}. {} {}\n",
            index + 1,
            self.format_impact(item.impact),
            self.colorize(&item.category, Color::Cyan)
        );
        output.push_str(&format!("   Issue: {}\n", item.issue));
        output.push_str(&format!("   Suggestion: {}\n", item.suggestion));

        if self.detailed {
            if let Some(examples) = &item.examples {
                for example in examples {
                    output.push_str(&format!("     e.g. {}\n", example));
                }
            }
        }
        output
    }

    fn format_insights(&self, insights: &Insights) -> String {
        let contact = if insights.contact_info_complete { "complete" } else { "incomplete" };
        let sections = if insights.sections_found.is_empty() {
            "none".to_string()
        } else {
            insights.sections_found.join(", ")
        };

        let mut output = String::new();
        output.push_str(&format!(
            "  Word count:              {}\n",
            insights.word_count
        ));
        output.push_str(&format!(
            "  Estimated pages:         {}\n",
            insights.page_estimate
        ));
        output.push_str(&format!(
            "  Experience (years):      {}\n",
            insights.experience_years
        ));
        output.push_str(&format!(
            "  Skills found:            {}\n",
            insights.skills_count
        ));
        output.push_str(&format!(
            "  Quantified achievements: {}\n",
            insights.quantified_achievements
        ));
        output.push_str(&format!(
            "  Action verbs used:       {}\n",
            insights.action_verbs_used
        ));
        output.push_str(&format!("  Contact information:     {}\n", contact));
        output.push_str(&format!("  Sections found:          {}\n", sections));
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let analysis = &report.analysis;
        let score = &analysis.score;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME SCORE REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Backend: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.backend,
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Overall", 2));
        let overall = format!("{}/100", score.overall);
        output.push_str(&format!(
            "Score: {} ({})\n",
            self.colorize(&overall, Self::score_color(score.overall)),
            report.rating()
        ));
        output.push_str(&format!("Industry match: {}%\n", analysis.industry_match));

        output.push_str(&self.format_header("Content", 3));
        output.push_str(&self.format_score("Experience", score.content.experience));
        output.push_str(&self.format_score("Skills", score.content.skills));
        output.push_str(&self.format_score("Education", score.content.education));
        output.push_str(&self.format_score(
            "Achievements",
            score.content.achievements,
        ));

        output.push_str(&self.format_header("Structure", 3));
        output.push_str(&self.format_score("Formatting", score.structure.formatting));
        output.push_str(&self.format_score("Sections", score.structure.sections));
        output.push_str(&self.format_score("Length", score.structure.length));
        output.push_str(&self.format_score(
            "Readability",
            score.structure.readability,
        ));

        output.push_str(&self.format_header("Optimization", 3));
        output.push_str(&self.format_score("Keywords", score.optimization.keywords));
        output.push_str(&self.format_score(
            "Action verbs",
            score.optimization.action_verbs,
        ));
        output.push_str(&self.format_score(
            "Quantification",
            score.optimization.quantification,
        ));
        output.push_str(&self.format_score(
            "Relevance",
            score.optimization.relevance,
        ));

        if !analysis.critical_issues.is_empty() {
            output.push_str(&self.format_header("Critical Issues", 2));
            for issue in &analysis.critical_issues {
                output.push_str(&format!("  • {}\n", self.colorize(issue, Color::Red)));
            }
        }

        if !analysis.strengths.is_empty() {
            output.push_str(&self.format_header("Strengths", 2));
            for strength in &analysis.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        if !analysis.advice.is_empty() {
            output.push_str(&self.format_header("Advice", 2));
            for (i, item) in analysis.advice.iter().enumerate() {
                output.push_str(&self.format_advice(i, item));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Insights", 2));
            output.push_str(&self.format_insights(&analysis.insights));
        }

        Ok(output)
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
    fn format_report(&self, report: &Report) -> Result<String> {
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

    fn impact_badge(impact: Impact) -> &'static str {
        match impact {
            Impact::Critical => "🔴 Critical",
            Impact::High => "🟠 High",
            Impact::Medium => "🟡 Medium",
            Impact::Low => "🟢 Low",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let analysis = &report.analysis;
        let score = &analysis.score;
        let mut output = String::new();

        output.push_str("# Resume Score Report\n\n");

        if self.include_metadata {
            let source = Path::new(&report.metadata.source_file)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| report.metadata.source_file.clone());
            output.push_str(&format!(
                "**Generated:** {} | **Backend:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.backend,
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Version:** {} | **Catalog:** {}\n\n",
                source, report.metadata.version, report.metadata.catalog_version
            ));
        }

        output.push_str("## Overall\n\n");
        output.push_str(&format!(
            "**Score:** {}/100 ({})\n\n",
            score.overall,
            report.rating()
        ));
        output.push_str(&format!(
            "**Industry Match:** {}%\n\n",
            analysis.industry_match
        ));

        output.push_str("## Score Breakdown\n\n");
        output.push_str("| Category | Criterion | Score |\n");
        output.push_str("|----------|-----------|-------|\n");
        let rows: [(&str, &str, u8); 12] = [
            ("Content", "Experience", score.content.experience),
            ("Content", "Skills", score.content.skills),
            ("Content", "Education", score.content.education),
            ("Content", "Achievements", score.content.achievements),
            ("Structure", "Formatting", score.structure.formatting),
            ("Structure", "Sections", score.structure.sections),
            ("Structure", "Length", score.structure.length),
            ("Structure", "Readability", score.structure.readability),
            ("Optimization", "Keywords", score.optimization.keywords),
            ("Optimization", "Action Verbs", score.optimization.action_verbs),
            ("Optimization", "Quantification", score.optimization.quantification),
            ("Optimization", "Relevance", score.optimization.relevance),
        ];
        for (category, criterion, value) in rows {
            output.push_str(&format!("| {} | {} | {} |\n", category, criterion, value));
        }
        output.push('\n');

        if !analysis.critical_issues.is_empty() {
            output.push_str("## Critical Issues\n\n");
            for issue in &analysis.critical_issues {
                output.push_str(&format!("- {}\n", issue));
            }
            output.push('\n');
        }

        if !analysis.strengths.is_empty() {
            output.push_str("## Strengths\n\n");
            for strength in &analysis.strengths {
                output.push_str(&format!("- {}\n", strength));
            }
            output.push('\n');
        }

        if !analysis.advice.is_empty() {
            output.push_str("## Advice\n\n");
            for (i, item) in analysis.advice.iter().enumerate() {
                output.push_str(&format!(
                    "### {}. {} ({})\n\n",
                    i + 1,
                    item.category,
                    Self::impact_badge(item.impact)
                ));
                output.push_str(&format!("**Issue:** {}\n\n", item.issue));
                output.push_str(&format!("**Suggestion:** {}\n\n", item.suggestion));
                if let Some(examples) = &item.examples {
                    output.push_str("**Examples:**\n\n");
                    for example in examples {
                        output.push_str(&format!("- {}\n", example));
                    }
                    output.push('\n');
                }
            }
        }

        let insights = &analysis.insights;
        output.push_str("## Insights\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Word count | {} |\n", insights.word_count));
        output.push_str(&format!(
            "| Estimated pages | {} |\n",
            insights.page_estimate
        ));
        output.push_str(&format!(
            "| Experience (years) | {} |\n",
            insights.experience_years
        ));
        output.push_str(&format!("| Skills found | {} |\n", insights.skills_count));
        output.push_str(&format!(
            "| Quantified achievements | {} |\n",
            insights.quantified_achievements
        ));
        output.push_str(&format!(
            "| Action verbs used | {} |\n",
            insights.action_verbs_used
        ));
        output.push_str(&format!(
            "| Contact information | {} |\n",
            if insights.contact_info_complete { "complete" } else { "incomplete" }
        ));
        output.push_str(&format!(
            "| Sections found | {} |\n",
            insights.sections_found.join(", ")
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &Report, format: &OutputFormat) -> Result<String> {
        let formatters: [&dyn OutputFormatter; 3] = [
            &self.console_formatter,
            &self.json_formatter,
            &self.markdown_formatter,
        ];

        formatters
            .iter()
            .find(|formatter| formatter.supports_format() == *format)
            .ok_or_else(|| {
                ResumeScorerError::OutputFormatting(format!("No formatter for {:?} output", format))
            })?
            .format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Where to write a report: `--save` names either a file or a directory
pub fn resolve_save_path(save: &Path, format: &OutputFormat, resume_name: &str) -> PathBuf {
    if save.is_dir() {
        save.join(suggest_filename(format, resume_name, true))
    } else {
        save.to_path_buf()
    }
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_score{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_score{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_score{}.md", base_name, timestamp_suffix),
    }
}
