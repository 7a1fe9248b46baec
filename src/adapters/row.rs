//! Wire shape of a catalog row as the hosted backend returns it.

use crate::domain::model::{Availability, CatalogItem};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub id: String,
    pub modelo: String,
    pub valor: Option<String>,
    pub autonomia: Option<String>,
    pub aguenta: Option<String>,
    #[serde(rename = "precisa_CNH")]
    pub precisa_cnh: Option<String>,
    pub obs: Option<String>,
    #[serde(rename = "Bateria")]
    pub bateria: Option<String>,
    pub foto_1: Option<String>,
    pub foto_2: Option<String>,
    pub foto_3: Option<String>,
    #[serde(rename = "vídeo")]
    pub video: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CatalogRow {
    pub fn into_item(self, available_status: &str) -> CatalogItem {
        let availability = Availability::from_status(self.status.as_deref(), available_status);
        // 照片依序在前，影片放最後
        let media_urls = [self.foto_1, self.foto_2, self.foto_3, self.video]
            .into_iter()
            .flatten()
            .filter(|url| !url.trim().is_empty())
            .collect();

        CatalogItem {
            id: self.id,
            name: self.modelo,
            price_text: self.valor,
            range_km: self.autonomia,
            max_load_kg: self.aguenta,
            license_requirement: self.precisa_cnh,
            notes: self.obs,
            battery_type: self.bateria,
            media_urls,
            availability,
            created_at: self.created_at,
        }
    }
}

/// Accepts RFC 3339 (`timestamptz`) and offset-less (`timestamp`) values;
/// anything else becomes `None` rather than failing the whole row.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_row_projects_into_item() {
        let row: CatalogRow = serde_json::from_value(json!({
            "id": "6f1c",
            "modelo": "Urbana Z",
            "valor": "R$ 15.500,50",
            "autonomia": "60 km",
            "aguenta": "120 kg",
            "precisa_CNH": "Não",
            "obs": null,
            "Bateria": "Lítio 48V",
            "foto_1": "https://cdn.example.com/1.jpg",
            "foto_2": "",
            "foto_3": "https://cdn.example.com/3.jpg",
            "vídeo": "https://youtu.be/abc123",
            "status": "Disponível",
            "created_at": "2025-03-10T14:30:00.123456+00:00",
            "created_by": "someone"
        }))
        .unwrap();

        let item = row.into_item("Disponível");
        assert_eq!(item.name, "Urbana Z");
        assert_eq!(item.license_requirement.as_deref(), Some("Não"));
        assert_eq!(item.battery_type.as_deref(), Some("Lítio 48V"));
        assert_eq!(
            item.media_urls,
            vec![
                "https://cdn.example.com/1.jpg",
                "https://cdn.example.com/3.jpg",
                "https://youtu.be/abc123"
            ]
        );
        assert!(item.availability.is_available());
        assert_eq!(
            item.created_at.map(|t| t.date_naive()),
            Some(Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap().date_naive())
        );
    }

    #[test]
    fn test_minimal_row() {
        let row: CatalogRow =
            serde_json::from_value(json!({"id": "1", "modelo": "Cargo"})).unwrap();
        let item = row.into_item("Disponível");
        assert!(item.media_urls.is_empty());
        assert!(item.price_text.is_none());
        assert!(item.created_at.is_none());
        assert!(!item.availability.is_available());
    }

    #[test]
    fn test_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 12, 1, 8, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-12-01T08:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-12-01T05:00:00-03:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-12-01T08:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-12-01 08:00:00.5").map(|t| t.timestamp()), Some(expected.timestamp()));
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
