//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Inkdown.
#[derive(Debug, Clone, Parser)]
#[command(name = "inkdown", version, about, long_about = None)]
pub struct Config {
    /// Markdown input file
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Page title (defaults to the input file stem)
    #[arg(long)]
    pub title: Option<String>,

    /// Syntax-highlight fenced code blocks
    #[arg(long)]
    pub highlight: bool,

    /// Open the generated page in the default browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input path does not exist or is not a file.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }
        if !self.input.is_file() {
            bail!("Input path is not a file: {}", self.input.display());
        }

        Ok(())
    }

    /// Returns page title from configuration or the input file stem.
    ///
    /// # Errors
    ///
    /// Returns error if the input path has no stem or contains invalid UTF8.
    pub fn page_title(&self) -> Result<String> {
        if let Some(title) = &self.title {
            return Ok(title.clone());
        }

        self.input
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| {
                format!(
                    "Cannot derive page title from path: {}",
                    self.input.display()
                )
            })
            .map(String::from)
    }
}
