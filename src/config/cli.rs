use crate::core::export::ExportFormat;
use crate::domain::model::{CatalogQuery, PriceRange};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_price_range, Validate};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "bike-catalog")]
#[command(about = "Browse the e-bike catalog from the terminal")]
pub struct Cli {
    /// Path to TOML configuration file (default: catalog.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Base URL of the hosted data service
    #[arg(long, env = "SUPABASE_URL", global = true)]
    pub supabase_url: Option<String>,

    /// Public (anon) API key of the data service
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Browse a saved JSON snapshot instead of the data service
    #[arg(long, global = true)]
    pub from_file: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available bikes, optionally filtered by name and price
    List(ListArgs),
    /// Show every detail of one bike
    Show(ShowArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn export_format(self) -> Option<ExportFormat> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Json => Some(ExportFormat::Json),
            OutputFormat::Csv => Some(ExportFormat::Csv),
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive part of the model name
    #[arg(short, long, default_value = "")]
    pub search: String,

    #[arg(long)]
    pub min_price: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the listing to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

impl ListArgs {
    pub fn price_range(&self) -> PriceRange {
        PriceRange::new(
            self.min_price.unwrap_or(0.0),
            self.max_price.unwrap_or(f64::INFINITY),
        )
    }

    pub fn query(&self) -> CatalogQuery {
        CatalogQuery::new(self.search.clone(), self.price_range())
    }
}

impl Validate for ListArgs {
    fn validate(&self) -> Result<()> {
        validate_price_range(&self.price_range())?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Bike id as stored in the catalog
    pub id: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
