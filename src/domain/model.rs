use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a bike may be shown in the public listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    /// Exact comparison, the same as the data service's `status=eq.` filter.
    pub fn from_status(status: Option<&str>, available_status: &str) -> Self {
        match status {
            Some(s) if s == available_status => Availability::Available,
            _ => Availability::Unavailable,
        }
    }

    pub fn is_available(self) -> bool {
        self == Availability::Available
    }
}

/// Read-only snapshot of one catalog row.
///
/// `media_urls` holds up to three photos followed by an optional video,
/// in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price_text: Option<String>,
    pub range_km: Option<String>,
    pub max_load_kg: Option<String>,
    pub license_requirement: Option<String>,
    pub notes: Option<String>,
    pub battery_type: Option<String>,
    pub media_urls: Vec<String>,
    pub availability: Availability,
    pub created_at: Option<DateTime<Utc>>,
}

/// Inclusive price bounds. `max` may be `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::new(0.0, f64::INFINITY)
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub search_term: String,
    pub price_range: PriceRange,
}

impl CatalogQuery {
    pub fn new(search_term: impl Into<String>, price_range: PriceRange) -> Self {
        Self {
            search_term: search_term.into(),
            price_range,
        }
    }
}

/// Result of one browse cycle: the filtered items plus what the listing
/// needs to size its controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    pub total: usize,
    pub max_price: f64,
}
