use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Data service returned HTTP {status}: {message}")]
    ServiceError { status: u16, message: String },

    #[error("Catalog item not found: {id}")]
    NotFound { id: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    DataService,
    Lookup,
    Data,
    Filesystem,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn config(message: impl Into<String>) -> Self {
        CatalogError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ApiError(_) => ErrorCategory::Network,
            CatalogError::ServiceError { .. } => ErrorCategory::DataService,
            CatalogError::NotFound { .. } => ErrorCategory::Lookup,
            CatalogError::CsvError(_) | CatalogError::SerializationError(_) => ErrorCategory::Data,
            CatalogError::IoError(_) => ErrorCategory::Filesystem,
            CatalogError::ConfigError { .. }
            | CatalogError::MissingConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 查無此商品只是查詢結果，不算系統故障
            ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::DataService => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Filesystem => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Critical,
        }
    }

    /// 適合在終端機上直接顯示給使用者的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::ApiError(e) if e.is_timeout() => {
                "The catalog service did not answer in time".to_string()
            }
            CatalogError::ApiError(_) => "Could not reach the catalog service".to_string(),
            CatalogError::ServiceError { status, .. } => {
                format!("The catalog service rejected the request (HTTP {})", status)
            }
            CatalogError::NotFound { id } => format!("Bike '{}' was not found in the catalog", id),
            CatalogError::CsvError(_) | CatalogError::SerializationError(_) => {
                "The catalog data could not be read or written".to_string()
            }
            CatalogError::IoError(e) => format!("File operation failed: {}", e),
            CatalogError::ConfigError { message } => format!("Invalid configuration: {}", message),
            CatalogError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::ApiError(_) => "Check your network connection and the source URL, then retry",
            CatalogError::ServiceError { status, .. } if *status == 401 || *status == 403 => {
                "Check that the API key is valid for this project"
            }
            CatalogError::ServiceError { .. } => "Retry later or verify the table name in the configuration",
            CatalogError::NotFound { .. } => "Run `list` to see the available bike ids",
            CatalogError::CsvError(_) | CatalogError::SerializationError(_) => {
                "Make sure the catalog snapshot is a JSON array of rows"
            }
            CatalogError::IoError(_) => "Check that the path exists and is writable",
            CatalogError::ConfigError { .. }
            | CatalogError::MissingConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or pass the value on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
