use anyhow::Result;
use clap::Parser;
use govgap::cli::{Cli, Commands, Lang, OutputFormat as CliFormat};
use govgap::commands::analyze::{handle_analyze, AnalyzeConfig};
use govgap::core::types::Language;
use govgap::formatting::FormattingConfig;
use govgap::io::output::OutputFormat;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            format,
            output,
            target_level,
            top,
            lang,
            plain,
        } => {
            let config = AnalyzeConfig {
                input,
                format: format.map(convert_format),
                output,
                target_level,
                top,
                language: convert_lang(lang),
                formatting: create_formatting_config(plain),
            };
            handle_analyze(config)
        }
        Commands::Init { force } => govgap::commands::init::init_config(force),
    }
}

fn convert_format(format: CliFormat) -> OutputFormat {
    match format {
        CliFormat::Terminal => OutputFormat::Terminal,
        CliFormat::Json => OutputFormat::Json,
        CliFormat::Markdown => OutputFormat::Markdown,
    }
}

fn convert_lang(lang: Lang) -> Language {
    match lang {
        Lang::Id => Language::Id,
        Lang::En => Language::En,
        Lang::Both => Language::Both,
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
