pub mod catalog;
pub mod display;
pub mod export;
pub mod filter;
pub mod media;
pub mod price;

pub use crate::domain::model::{CatalogItem, CatalogPage, CatalogQuery, PriceRange};
pub use crate::domain::ports::{CatalogSource, Storage};
pub use crate::utils::error::Result;
