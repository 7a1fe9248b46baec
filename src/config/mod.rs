#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{Cli, Command, ListArgs, OutputFormat, ShowArgs};
pub use toml_config::{CatalogConfig, ListingConfig, SourceConfig};
