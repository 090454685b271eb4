use crate::core::types::{GapTier, Language, MaturityReport};
use crate::formatting::FormattingConfig;
use colored::*;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::analysis::trend::CHECKPOINT_LABELS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &MaturityReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    language: Language,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        if report.summary.is_empty() {
            if self.language != Language::Id {
                writeln!(self.writer, "No assessment data available.")?;
                writeln!(self.writer)?;
            }
            if self.language != Language::En {
                writeln!(self.writer, "Belum ada data penilaian yang tersedia.")?;
            }
            return Ok(());
        }
        self.write_summary(report)?;
        self.write_maturity(report)?;
        self.write_heat_map(report)?;
        self.write_trend(report)?;
        self.write_recommendations(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Governance Maturity Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "## Executive Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Domains assessed | {} |", summary.domain_count)?;
        writeln!(
            self.writer,
            "| Overall average maturity | {:.2} |",
            summary.overall_average
        )?;
        if let Some(best) = &summary.best_domain {
            writeln!(
                self.writer,
                "| Strongest domain | {} ({:.2}) |",
                best.domain_id, best.level
            )?;
        }
        if let Some(worst) = &summary.worst_domain {
            writeln!(
                self.writer,
                "| Weakest domain | {} ({:.2}) |",
                worst.domain_id, worst.level
            )?;
        }
        writeln!(self.writer, "| Average gap | {:.2} |", summary.average_gap)?;
        writeln!(self.writer)?;
        for paragraph in summary.narrative_for(self.language).split("\n\n") {
            writeln!(self.writer, "{paragraph}")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_maturity(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Maturity by Domain")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Domain | Name | Current | Target | Gap |")?;
        writeln!(self.writer, "|--------|------|---------|--------|-----|")?;
        for domain in &report.domains {
            writeln!(
                self.writer,
                "| {} | {} | {:.2} | {:.2} | {:.2} |",
                domain.domain_id,
                domain.domain_name,
                domain.current_level,
                domain.target_level,
                domain.gap()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_heat_map(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Gap Heat Map")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Domain | Gap | Tier |")?;
        writeln!(self.writer, "|--------|-----|------|")?;
        for gap in &report.gaps {
            writeln!(
                self.writer,
                "| {} | {:.2} | {} |",
                gap.domain_id,
                gap.gap,
                gap.tier.label()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_trend(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Improvement Trend (illustrative)")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Simulated gap closure at fixed checkpoints, not a forecast."
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Domain | {} |",
            CHECKPOINT_LABELS.join(" | ")
        )?;
        writeln!(
            self.writer,
            "|--------|{}|",
            CHECKPOINT_LABELS.map(|_| "------").join("|")
        )?;
        for trend in &report.trends {
            let levels: Vec<String> = trend.levels.iter().map(|l| format!("{l:.2}")).collect();
            writeln!(
                self.writer,
                "| {} | {} |",
                trend.domain_id,
                levels.join(" | ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        for (i, rec) in report.recommendations.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. **{}** - priority {}",
                i + 1,
                rec.domain_id,
                rec.priority.label_for(self.language)
            )?;
            writeln!(self.writer, "   - {}", rec.description)?;
            writeln!(self.writer, "   - Impact: {}", rec.impact)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter {
    formatting: FormattingConfig,
    language: Language,
}

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new(FormattingConfig::default())
    }
}

impl TerminalWriter {
    pub fn new(formatting: FormattingConfig) -> Self {
        Self {
            formatting,
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        if !self.formatting.color.should_use_color() {
            colored::control::set_override(false);
        }

        print_header(report, &self.formatting);
        if report.summary.is_empty() {
            match self.language {
                Language::Id => println!("Belum ada data penilaian yang tersedia."),
                Language::En => println!("No assessment data available."),
                Language::Both => println!(
                    "No assessment data available. Belum ada data penilaian yang tersedia."
                ),
            }
            return Ok(());
        }
        print_summary(report, &self.formatting, self.language);
        print_maturity_table(report);
        print_heat_map(report, &self.formatting);
        print_trend_table(report);
        print_recommendations(report, &self.formatting, self.language);
        Ok(())
    }
}

fn print_header(report: &MaturityReport, _fmt: &FormattingConfig) {
    println!("{}", "Governance Maturity Report".bold().blue());
    println!("{}", "==========================".blue());
    println!(
        "Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
}

fn print_summary(report: &MaturityReport, fmt: &FormattingConfig, language: Language) {
    let summary = &report.summary;
    println!("{} Summary:", fmt.emoji("📊", "#"));
    println!("  Domains assessed: {}", summary.domain_count);
    println!("  Overall average maturity: {:.2}", summary.overall_average);
    if let Some(best) = &summary.best_domain {
        println!(
            "  Strongest domain: {} ({}) at {:.2}",
            best.domain_id, best.domain_name, best.level
        );
    }
    if let Some(worst) = &summary.worst_domain {
        println!(
            "  Weakest domain: {} ({}) at {:.2}",
            worst.domain_id, worst.domain_name, worst.level
        );
    }
    println!("  Average gap: {:.2}", summary.average_gap);
    println!();
    println!("{}", summary.narrative_for(language));
    println!();
}

fn print_maturity_table(report: &MaturityReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["Domain", "Name", "Current", "Target", "Gap"]);
    for domain in &report.domains {
        table.add_row(vec![
            Cell::new(&domain.domain_id),
            Cell::new(&domain.domain_name),
            Cell::new(format!("{:.2}", domain.current_level)),
            Cell::new(format!("{:.2}", domain.target_level)),
            Cell::new(format!("{:.2}", domain.gap())),
        ]);
    }
    println!("Maturity by Domain:");
    println!("{table}");
    println!();
}

fn print_heat_map(report: &MaturityReport, fmt: &FormattingConfig) {
    println!("{} Gap Heat Map:", fmt.emoji("🔥", "!"));
    for gap in &report.gaps {
        let tier = match gap.tier {
            GapTier::Critical => gap.tier.label().red().bold(),
            GapTier::High => gap.tier.label().red(),
            GapTier::Medium => gap.tier.label().yellow(),
            GapTier::Low => gap.tier.label().green(),
        };
        println!("  {:<6} gap {:>5.2}  [{}]", gap.domain_id, gap.gap, tier);
    }
    println!();
}

fn print_trend_table(report: &MaturityReport) {
    let mut table = Table::new();
    let mut header = vec!["Domain".to_string()];
    header.extend(CHECKPOINT_LABELS.iter().map(|l| l.to_string()));
    table.load_preset(UTF8_FULL_CONDENSED).set_header(header);
    for trend in &report.trends {
        let mut row = vec![trend.domain_id.clone()];
        row.extend(trend.levels.iter().map(|l| format!("{l:.2}")));
        table.add_row(row);
    }
    println!("Improvement Trend (illustrative, not a forecast):");
    println!("{table}");
    println!();
}

fn print_recommendations(report: &MaturityReport, fmt: &FormattingConfig, language: Language) {
    println!("{} Recommendations:", fmt.emoji("🎯", ">"));
    for (i, rec) in report.recommendations.iter().enumerate() {
        let label = rec.priority.label_for(language);
        let priority = match rec.priority.weight() {
            3 => label.red().bold(),
            2 => label.yellow(),
            _ => label.green(),
        };
        println!("  {}. [{}] {}", i + 1, priority, rec.domain_id);
        println!("     {}", rec.description);
        println!("     Impact: {}", rec.impact);
    }
    println!();
}

/// Build a writer for the requested format and destination.
/// Terminal output always goes to stdout; JSON and Markdown honor `output`.
/// JSON always carries the full bilingual payload; `language` only shapes
/// the rendered formats.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    language: Language,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let destination: Box<dyn Write> = match output {
        Some(path) if format != OutputFormat::Terminal => Box::new(File::create(path)?),
        _ => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => {
            Box::new(MarkdownWriter::new(destination).with_language(language))
        }
        OutputFormat::Terminal => Box::new(TerminalWriter::default().with_language(language)),
    })
}
