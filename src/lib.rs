pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::Cli;

pub use adapters::{JsonFileCatalog, LocalStorage, SupabaseCatalog};
pub use config::CatalogConfig;
pub use crate::core::{
    catalog::CatalogService,
    filter::{filter_catalog, max_price},
    media::{classify_media, to_embed_url, MediaKind},
    price::parse_price,
};
pub use domain::model::{Availability, CatalogItem, CatalogPage, CatalogQuery, PriceRange};
pub use domain::ports::{CatalogSource, Storage};
pub use utils::error::{CatalogError, Result};
