use crate::core::filter::{filter_catalog, max_price, DEFAULT_MAX_PRICE};
use crate::domain::model::{CatalogItem, CatalogPage, CatalogQuery};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};

/// Fetches from a [`CatalogSource`] and narrows the result for display.
pub struct CatalogService<S: CatalogSource> {
    source: S,
    fallback_max_price: f64,
}

impl<S: CatalogSource> CatalogService<S> {
    pub fn new(source: S) -> Self {
        Self::with_fallback_max_price(source, DEFAULT_MAX_PRICE)
    }

    pub fn with_fallback_max_price(source: S, fallback_max_price: f64) -> Self {
        Self {
            source,
            fallback_max_price,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 取得可售清單後套用搜尋與價格篩選；取得失敗時不會進行篩選
    pub async fn browse(&self, query: &CatalogQuery) -> Result<CatalogPage> {
        tracing::debug!(
            "Browsing catalog: search='{}', range=[{}, {}]",
            query.search_term,
            query.price_range.min,
            query.price_range.max
        );

        let items = self.source.list_available().await?;
        tracing::info!("📦 Loaded {} available bikes", items.len());

        let max_price = max_price(&items, self.fallback_max_price);
        let filtered = filter_catalog(&items, &query.search_term, query.price_range);
        tracing::info!("🔍 {} of {} bikes match", filtered.len(), items.len());

        Ok(CatalogPage {
            items: filtered,
            total: items.len(),
            max_price,
        })
    }

    pub async fn details(&self, id: &str) -> Result<CatalogItem> {
        tracing::debug!("Looking up bike {}", id);
        self.source
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Availability, PriceRange};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        items: Vec<CatalogItem>,
        fail: bool,
        calls: AtomicUsize,
    }

    impl FixedSource {
        fn new(items: Vec<CatalogItem>) -> Self {
            Self {
                items,
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                items: vec![],
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CatalogSource for FixedSource {
        async fn list_available(&self) -> Result<Vec<CatalogItem>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CatalogError::ServiceError {
                    status: 503,
                    message: "unavailable".to_string(),
                });
            }
            Ok(self.items.clone())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<CatalogItem>> {
            Ok(self.items.iter().find(|item| item.id == id).cloned())
        }
    }

    fn item(id: &str, name: &str, price: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            price_text: Some(price.to_string()),
            range_km: Some("60 km".to_string()),
            max_load_kg: None,
            license_requirement: None,
            notes: None,
            battery_type: None,
            media_urls: vec![],
            availability: Availability::Available,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_browse_filters_and_reports_totals() {
        let service = CatalogService::new(FixedSource::new(vec![
            item("1", "Aventura X", "R$ 8.000,00"),
            item("2", "Urbana Z", "R$ 15.500,50"),
        ]));

        let query = CatalogQuery::new("urbana", PriceRange::new(0.0, 20000.0));
        let page = service.browse(&query).await.unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Urbana Z");
        assert_eq!(page.max_price, 15500.5);
        assert_eq!(service.source().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_browse_empty_catalog_uses_fallback_max() {
        let service = CatalogService::with_fallback_max_price(FixedSource::new(vec![]), 20000.0);
        let page = service.browse(&CatalogQuery::default()).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.max_price, 20000.0);
    }

    #[tokio::test]
    async fn test_browse_propagates_fetch_failure() {
        let service = CatalogService::new(FixedSource::failing());
        let result = service.browse(&CatalogQuery::default()).await;
        assert!(matches!(result, Err(CatalogError::ServiceError { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_details_not_found() {
        let service = CatalogService::new(FixedSource::new(vec![item("1", "Aventura X", "1")]));
        assert_eq!(service.details("1").await.unwrap().name, "Aventura X");
        assert!(matches!(
            service.details("missing").await,
            Err(CatalogError::NotFound { id }) if id == "missing"
        ));
    }
}
