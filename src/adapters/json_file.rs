use crate::adapters::row::CatalogRow;
use crate::core::filter::sort_newest_first;
use crate::domain::model::CatalogItem;
use crate::domain::ports::{CatalogSource, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Catalog backed by a JSON array of rows, e.g. a saved response of the
/// data service. Applies the same availability filter and ordering the
/// service does server-side.
pub struct JsonFileCatalog<S: Storage> {
    storage: S,
    path: String,
    available_status: String,
}

impl<S: Storage> JsonFileCatalog<S> {
    pub fn new(storage: S, path: impl Into<String>, available_status: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
            available_status: available_status.into(),
        }
    }

    async fn load_items(&self) -> Result<Vec<CatalogItem>> {
        let data = self.storage.read_file(&self.path).await?;
        let rows: Vec<CatalogRow> = serde_json::from_slice(&data)?;
        tracing::debug!("Loaded {} rows from {}", rows.len(), self.path);
        Ok(rows
            .into_iter()
            .map(|row| row.into_item(&self.available_status))
            .collect())
    }
}

#[async_trait]
impl<S: Storage> CatalogSource for JsonFileCatalog<S> {
    async fn list_available(&self) -> Result<Vec<CatalogItem>> {
        let mut items: Vec<CatalogItem> = self
            .load_items()
            .await?
            .into_iter()
            .filter(|item| item.availability.is_available())
            .collect();
        sort_newest_first(&mut items);
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CatalogItem>> {
        Ok(self.load_items().await?.into_iter().find(|item| item.id == id))
    }
}
