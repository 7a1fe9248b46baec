use crate::domain::model::CatalogItem;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where catalog rows come from. The hosted data service in production,
/// a JSON snapshot offline and in tests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Available items, newest first.
    async fn list_available(&self) -> Result<Vec<CatalogItem>>;

    /// Any item by id, regardless of availability.
    async fn find_by_id(&self, id: &str) -> Result<Option<CatalogItem>>;
}
