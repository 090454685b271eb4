//! The `analyze` subcommand: load answers, run the pipeline, render.

use crate::analysis::pipeline::build_report;
use crate::config;
use crate::core::errors::Error;
use crate::core::types::Language;
use crate::formatting::FormattingConfig;
use crate::io::input::read_answer_file;
use crate::io::output::{create_writer, OutputFormat, TerminalWriter};
use anyhow::Result;
use std::path::PathBuf;

/// Resolved configuration for one analyze run
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub target_level: Option<f64>,
    pub top: Option<usize>,
    pub language: Language,
    pub formatting: FormattingConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = config::get_config();

    let target_level = config.target_level.unwrap_or(file_config.target.level);
    if !(0.0..=5.0).contains(&target_level) {
        return Err(Error::Configuration(format!(
            "target level must be between 0.0 and 5.0, got {target_level}"
        ))
        .into());
    }

    let format = config
        .format
        .unwrap_or_else(|| parse_format(&file_config.output.default_format));

    let records = read_answer_file(&config.input)?;
    let mut report = build_report(&records, target_level)?;

    if let Some(top) = config.top {
        report.recommendations.truncate(top);
    }

    let mut writer: Box<dyn crate::io::output::OutputWriter> = match format {
        OutputFormat::Terminal => {
            Box::new(TerminalWriter::new(config.formatting).with_language(config.language))
        }
        _ => create_writer(format, config.output.as_deref(), config.language)?,
    };
    writer.write_report(&report)
}

fn parse_format(name: &str) -> OutputFormat {
    match name {
        "json" => OutputFormat::Json,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Terminal,
    }
}
