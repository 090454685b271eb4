use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report on stdout
    Terminal,
    /// Full report payload as JSON
    Json,
    /// Markdown report document
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    /// Indonesian only
    Id,
    /// English only
    En,
    /// Both languages, Indonesian first
    Both,
}

#[derive(Parser, Debug)]
#[command(name = "govgap")]
#[command(about = "COBIT 2019 governance maturity and gap analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an answer file and produce a maturity report
    Analyze {
        /// Path to the JSON answer file
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout; ignored for terminal format)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the target maturity ceiling (0-5)
        #[arg(long = "target-level")]
        target_level: Option<f64>,

        /// Show only the top N recommendations
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Language for narrative and priority labels
        #[arg(long, value_enum, default_value = "both")]
        lang: Lang,

        /// Plain output: no colors, no emoji
        #[arg(long)]
        plain: bool,
    },

    /// Create a .govgap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
