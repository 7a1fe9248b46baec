use crate::domain::model::PriceRange;
use crate::utils::error::{CatalogError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// 價格區間：下限必須是有限且不為負的數字；上限可以是無窮大（代表不設上限）
pub fn validate_price_range(range: &PriceRange) -> Result<()> {
    if !range.min.is_finite() || range.min < 0.0 {
        return Err(invalid(
            "min_price",
            range.min,
            "Minimum price must be a finite, non-negative number",
        ));
    }
    if range.max.is_nan() || range.max < 0.0 {
        return Err(invalid(
            "max_price",
            range.max,
            "Maximum price must be a non-negative number",
        ));
    }
    if range.min > range.max {
        return Err(invalid(
            "min_price",
            range.min,
            format!("Minimum price cannot exceed maximum price ({})", range.max),
        ));
    }
    Ok(())
}
