//! CLI definition and command handling

pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use relnotes_changelog::{Conversion, Converter};
use relnotes_core::config::load_config;
use relnotes_core::Config;

/// relnotes - convert a release notes record into a change-log document
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Release notes record (YAML)
    pub input: PathBuf,

    /// Directory the document is written to
    pub output_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format of the completion report
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Print the document instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Configuration file with label overrides and output settings
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

impl Cli {
    /// Execute the conversion
    pub fn execute(&self) -> anyhow::Result<()> {
        info!(
            input = %self.input.display(),
            output_dir = %self.output_dir.display(),
            dry_run = self.dry_run,
            "executing convert"
        );
        let config = self.load_config()?;
        let converter = Converter::from_config(&config);

        if self.dry_run {
            let rendered = converter.render_file(&self.input, &self.output_dir)?;
            match self.format {
                OutputFormat::Json => self.report(&rendered.conversion)?,
                OutputFormat::Text => print!("{}", rendered.contents),
            }
            return Ok(());
        }

        let conversion = converter.convert_file(&self.input, &self.output_dir)?;
        self.report(&conversion)
    }

    /// Only an explicit `--config` is read; otherwise the built-in labels
    /// and the formatter's extension apply.
    fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Ok(load_config(path)?),
            None => Ok(Config::default()),
        }
    }

    fn report(&self, conversion: &Conversion) -> anyhow::Result<()> {
        if self.quiet {
            return Ok(());
        }

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(conversion)?);
            }
            OutputFormat::Text => output::success(&completion_message(&conversion.output)),
        }
        Ok(())
    }
}

/// One-line failure message. Error sources are already part of each
/// variant's message, so the chain is not appended.
pub fn failure_message(err: &anyhow::Error) -> String {
    err.to_string()
}

fn completion_message(path: &Path) -> String {
    format!(
        "File '{}' has been generated.",
        output::path_style().apply_to(path.display())
    )
}
