use crate::core::filter::DEFAULT_MAX_PRICE;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_CONFIG_PATH: &str = "catalog.toml";
pub const DEFAULT_TABLE: &str = "Catálogo_bikes";
pub const DEFAULT_AVAILABLE_STATUS: &str = "Disponível";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("Invalid env var regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_available_status")]
    pub available_status: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// 目錄內沒有任何已知價格時，價格區間的上限
    #[serde(default = "default_fallback_max_price")]
    pub fallback_max_price: f64,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_available_status() -> String {
    DEFAULT_AVAILABLE_STATUS.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_fallback_max_price() -> f64 {
    DEFAULT_MAX_PRICE
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: default_table(),
            available_status: default_available_status(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            fallback_max_price: default_fallback_max_price(),
        }
    }
}

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| CatalogError::config(format!("TOML parsing error: {}", e)))
    }

    /// 指定路徑時必須存在；未指定時預設檔不存在就使用預設值
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                Self::from_file(path)
            }
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                tracing::info!("📁 Loading configuration from: {}", DEFAULT_CONFIG_PATH);
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                tracing::debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// 替換環境變數 (例如 ${SUPABASE_ANON_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Command line values win over the file.
    pub fn apply_overrides(&mut self, url: Option<String>, api_key: Option<String>) {
        if let Some(url) = url {
            tracing::debug!("🔧 source.url overridden from command line");
            self.source.url = url;
        }
        if let Some(api_key) = api_key {
            tracing::debug!("🔧 source.api_key overridden from command line");
            self.source.api_key = api_key;
        }
    }
}

impl Validate for SourceConfig {
    fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(CatalogError::MissingConfigError {
                field: "source.url".to_string(),
            });
        }
        validate_url("source.url", &self.url)?;

        if self.api_key.is_empty() || self.api_key.starts_with("${") {
            return Err(CatalogError::MissingConfigError {
                field: "source.api_key".to_string(),
            });
        }
        validate_non_empty_string("source.table", &self.table)?;
        validate_non_empty_string("source.available_status", &self.available_status)?;
        validate_positive_number("source.timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

impl Validate for ListingConfig {
    fn validate(&self) -> Result<()> {
        if !(self.fallback_max_price.is_finite() && self.fallback_max_price > 0.0) {
            return Err(CatalogError::InvalidConfigValueError {
                field: "listing.fallback_max_price".to_string(),
                value: self.fallback_max_price.to_string(),
                reason: "Value must be a positive number".to_string(),
            });
        }
        Ok(())
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.source.validate()?;
        self.listing.validate()
    }
}

impl CatalogConfig {
    /// Validation for browsing a local snapshot: no data service settings needed.
    pub fn validate_offline(&self, snapshot_path: &str) -> Result<()> {
        validate_path("from_file", snapshot_path)?;
        validate_non_empty_string("source.available_status", &self.source.available_status)?;
        self.listing.validate()
    }
}
