pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, InputScope, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use toml_config::FileConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "vowel-count")]
#[command(about = "Count the ASCII vowels in one line read from standard input")]
pub struct CliConfig {
    /// Path to an optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Part of the line to scan (overrides the settings file)
    #[arg(short, long, value_enum)]
    pub scope: Option<InputScope>,

    /// Output format (overrides the settings file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

/// Effective settings: defaults, then the settings file, then CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub scope: InputScope,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path);
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };
        Ok(Self::merge(&file, cli))
    }

    pub fn merge(file: &FileConfig, cli: &CliConfig) -> Self {
        Self {
            scope: cli.scope.or(file.counter.scope).unwrap_or_default(),
            format: cli.format.or(file.output.format).unwrap_or_default(),
        }
    }
}

impl ConfigProvider for Settings {
    fn scope(&self) -> InputScope {
        self.scope
    }

    fn format(&self) -> OutputFormat {
        self.format
    }
}
