use crate::app::prompts::Language;
use crate::domain::model::{OutputFormat, OversizePolicy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "first-fit")]
#[command(about = "Count the bins First-Fit needs for interactively entered item weights")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Language of prompts and results
    #[arg(long, value_enum)]
    pub lang: Option<Language>,

    /// Result format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// What to do with items heavier than the capacity
    #[arg(long, value_enum)]
    pub oversize: Option<OversizePolicy>,

    /// Print the load of every bin after the count
    #[arg(long)]
    pub show_bins: bool,

    /// Log memory and timing around packing
    #[arg(long)]
    pub monitor: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
