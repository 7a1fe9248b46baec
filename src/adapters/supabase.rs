use crate::adapters::row::CatalogRow;
use crate::config::toml_config::SourceConfig;
use crate::domain::model::CatalogItem;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Reads the catalog table through the PostgREST API of a hosted
/// Supabase project.
pub struct SupabaseCatalog {
    client: Client,
    base_url: Url,
    api_key: String,
    table: String,
    available_status: String,
}

impl SupabaseCatalog {
    pub fn new(source: &SourceConfig) -> Result<Self> {
        let base_url = Url::parse(&source.url).map_err(|e| CatalogError::InvalidConfigValueError {
            field: "source.url".to_string(),
            value: source.url.clone(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(source.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: source.api_key.clone(),
            table: source.table.clone(),
            available_status: source.available_status.clone(),
        })
    }

    fn table_url(&self) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::config("source.url cannot be used as a base URL"))?
            .pop_if_empty()
            .extend(["rest", "v1", self.table.as_str()]);
        url.set_query(None);
        Ok(url)
    }

    /// 可售商品，依建立時間新到舊
    pub fn list_url(&self) -> Result<Url> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("status", &format!("eq.{}", self.available_status))
            .append_pair("order", "created_at.desc");
        Ok(url)
    }

    pub fn item_url(&self, id: &str) -> Result<Url> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("id", &format!("eq.{}", id))
            .append_pair("limit", "1");
        Ok(url)
    }

    async fn fetch_rows(&self, url: Url) -> Result<Vec<CatalogRow>> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ServiceError {
                status: status.as_u16(),
                message: service_error_message(&body),
            });
        }

        // 連線錯誤與資料格式錯誤分開處理
        let body = response.bytes().await?;
        let rows: Vec<CatalogRow> = serde_json::from_slice(&body)?;
        Ok(rows)
    }
}

/// PostgREST errors are JSON objects with a `message`; fall back to the raw body.
fn service_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl CatalogSource for SupabaseCatalog {
    async fn list_available(&self) -> Result<Vec<CatalogItem>> {
        let rows = self.fetch_rows(self.list_url()?).await?;
        tracing::debug!("Received {} rows from {}", rows.len(), self.table);
        Ok(rows
            .into_iter()
            .map(|row| row.into_item(&self.available_status))
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CatalogItem>> {
        let rows = self.fetch_rows(self.item_url(id)?).await?;
        Ok(rows
            .into_iter()
            .next()
            .map(|row| row.into_item(&self.available_status)))
    }
}
