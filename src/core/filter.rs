use crate::core::price::parse_price;
use crate::domain::model::{CatalogItem, PriceRange};
use std::cmp::Ordering;

/// Upper bound for the price control when no item has a known price.
pub const DEFAULT_MAX_PRICE: f64 = 50_000.0;

/// 名稱包含搜尋字（不分大小寫）且價格落在區間內
pub fn matches(item: &CatalogItem, search_lower: &str, price_range: &PriceRange) -> bool {
    item.name.to_lowercase().contains(search_lower)
        && price_range.contains(parse_price(item.price_text.as_deref()))
}

/// Items whose name contains `search_term` (case-insensitive) and whose
/// parsed price lies in `price_range`, in input order.
///
/// An empty term matches every name. Items with an unknown price parse as
/// `0.0` and are kept only when the range starts at zero.
pub fn filter_catalog(
    items: &[CatalogItem],
    search_term: &str,
    price_range: PriceRange,
) -> Vec<CatalogItem> {
    let search_lower = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| matches(item, &search_lower, &price_range))
        .cloned()
        .collect()
}

/// Highest known price in the collection, or `fallback` when there is none.
pub fn max_price(items: &[CatalogItem], fallback: f64) -> f64 {
    items
        .iter()
        .map(|item| parse_price(item.price_text.as_deref()))
        .filter(|price| *price > 0.0)
        .fold(None, |acc: Option<f64>, price| {
            Some(acc.map_or(price, |current| current.max(price)))
        })
        .unwrap_or(fallback)
}

/// Newest first. Items without a creation time go last; ties keep their
/// relative order.
pub fn sort_newest_first(items: &mut [CatalogItem]) {
    items.sort_by(|a, b| match (a.created_at, b.created_at) {
        (Some(a_time), Some(b_time)) => b_time.cmp(&a_time),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Availability;
    use chrono::{TimeZone, Utc};

    fn item(id: &str, name: &str, price: Option<&str>) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            price_text: price.map(str::to_string),
            range_km: None,
            max_load_kg: None,
            license_requirement: None,
            notes: None,
            battery_type: None,
            media_urls: vec![],
            availability: Availability::Available,
            created_at: None,
        }
    }

    fn sample() -> Vec<CatalogItem> {
        vec![
            item("1", "Aventura X", Some("R$ 8.000,00")),
            item("2", "Urbana Z", Some("R$ 15.500,50")),
        ]
    }

    fn names(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_search_term_is_case_insensitive() {
        let result = filter_catalog(&sample(), "urbana", PriceRange::new(0.0, 20000.0));
        assert_eq!(names(&result), vec!["Urbana Z"]);

        let result = filter_catalog(&sample(), "AVENTURA", PriceRange::unbounded());
        assert_eq!(names(&result), vec!["Aventura X"]);
    }

    #[test]
    fn test_price_range_excludes_cheaper_items() {
        let result = filter_catalog(&sample(), "", PriceRange::new(9000.0, 20000.0));
        assert_eq!(names(&result), vec!["Urbana Z"]);
    }

    #[test]
    fn test_empty_term_and_unbounded_range_keeps_everything() {
        let mut items = sample();
        items.push(item("3", "Sem preço", None));
        items.push(item("4", "Cargo", Some("10299.00")));

        let result = filter_catalog(&items, "", PriceRange::unbounded());
        assert_eq!(result, items);
    }

    #[test]
    fn test_unknown_price_only_in_range_starting_at_zero() {
        let items = vec![item("1", "Mistério", Some("a combinar"))];
        assert_eq!(filter_catalog(&items, "", PriceRange::new(0.0, 100.0)).len(), 1);
        assert!(filter_catalog(&items, "", PriceRange::new(1.0, 100.0)).is_empty());
    }

    #[test]
    fn test_filter_is_sound_complete_and_idempotent() {
        let items = vec![
            item("1", "Aventura X", Some("R$ 8.000,00")),
            item("2", "Urbana Z", Some("R$ 15.500,50")),
            item("3", "Urbana Lite", Some("9.000,00")),
            item("4", "Scooter Urbana", None),
            item("5", "Cargo Max", Some("R$ 25.000,00")),
        ];
        let range = PriceRange::new(9000.0, 20000.0);
        let result = filter_catalog(&items, "urb", range);

        assert_eq!(names(&result), vec!["Urbana Z", "Urbana Lite"]);
        for kept in &result {
            assert!(matches(kept, "urb", &range));
        }
        for excluded in items.iter().filter(|i| !result.contains(i)) {
            assert!(!matches(excluded, "urb", &range));
        }
        assert_eq!(filter_catalog(&result, "urb", range), result);
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let items = sample();
        let before = items.clone();
        let result = filter_catalog(&items, "nothing matches", PriceRange::unbounded());
        assert!(result.is_empty());
        assert_eq!(items, before);
    }

    #[test]
    fn test_max_price() {
        assert_eq!(max_price(&sample(), DEFAULT_MAX_PRICE), 15500.5);
        assert_eq!(max_price(&[], DEFAULT_MAX_PRICE), DEFAULT_MAX_PRICE);

        let unknown = vec![item("1", "A", None), item("2", "B", Some("Consulte"))];
        assert_eq!(max_price(&unknown, 20000.0), 20000.0);
    }

    #[test]
    fn test_sort_newest_first() {
        let mut older = item("old", "Old", None);
        older.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut newer = item("new", "New", None);
        newer.created_at = Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
        let undated_a = item("a", "Undated A", None);
        let undated_b = item("b", "Undated B", None);

        let mut items = vec![undated_a, older, undated_b, newer];
        sort_newest_first(&mut items);

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "a", "b"]);
    }
}
