use crate::core::media::primary_image;
use crate::core::price::parse_price;
use crate::domain::model::CatalogItem;
use crate::utils::error::{CatalogError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Flat CSV row. `price` is the parsed value, `0` when unknown.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    name: &'a str,
    price_text: &'a str,
    price: f64,
    range_km: &'a str,
    max_load_kg: &'a str,
    license_requirement: &'a str,
    battery_type: &'a str,
    cover_image: &'a str,
}

impl<'a> From<&'a CatalogItem> for ExportRow<'a> {
    fn from(item: &'a CatalogItem) -> Self {
        Self {
            id: &item.id,
            name: &item.name,
            price_text: item.price_text.as_deref().unwrap_or_default(),
            price: parse_price(item.price_text.as_deref()),
            range_km: item.range_km.as_deref().unwrap_or_default(),
            max_load_kg: item.max_load_kg.as_deref().unwrap_or_default(),
            license_requirement: item.license_requirement.as_deref().unwrap_or_default(),
            battery_type: item.battery_type.as_deref().unwrap_or_default(),
            cover_image: primary_image(item).unwrap_or_default(),
        }
    }
}

pub fn export_items(items: &[CatalogItem], format: ExportFormat) -> Result<Vec<u8>> {
    tracing::debug!("Exporting {} items as {:?}", items.len(), format);
    match format {
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(items)?),
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for item in items {
                writer.serialize(ExportRow::from(item))?;
            }
            writer
                .into_inner()
                .map_err(|e| CatalogError::IoError(e.into_error()))
        }
    }
}
