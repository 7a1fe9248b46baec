//! Plain-text rendering of a listing and of a single bike.

use crate::core::media::{gallery, primary_image, MediaKind};
use crate::core::price::{format_brl_whole, price_label};
use crate::domain::model::{CatalogItem, CatalogPage, CatalogQuery};

const NOT_AVAILABLE: &str = "N/A";

pub fn render_listing(page: &CatalogPage, query: &CatalogQuery) -> String {
    let mut lines = Vec::new();

    let upper = if query.price_range.max.is_finite() {
        query.price_range.max
    } else {
        page.max_price
    };
    lines.push(format!(
        "Faixa de preço: {} até {} (catálogo até {})",
        format_brl_whole(query.price_range.min),
        format_brl_whole(upper),
        format_brl_whole(page.max_price)
    ));
    if !query.search_term.is_empty() {
        lines.push(format!("Busca: \"{}\"", query.search_term));
    }
    lines.push(String::new());

    if page.items.is_empty() {
        lines.push("Nenhuma bike encontrada".to_string());
        lines.push("Tente ajustar os filtros para ver mais resultados.".to_string());
        return lines.join("\n");
    }

    lines.push(format!("Mostrando {} de {} bikes", page.items.len(), page.total));
    for item in &page.items {
        lines.push(render_summary(item));
    }

    lines.join("\n")
}

fn render_summary(item: &CatalogItem) -> String {
    let mut line = format!(
        "  {} | {} | {}",
        item.id,
        item.name,
        price_label(item.price_text.as_deref())
    );
    if let Some(range) = non_empty(&item.range_km) {
        line.push_str(&format!(" | Autonomia: {}", range));
    }
    if primary_image(item).is_none() {
        line.push_str(" | Sem imagem");
    }
    line
}

pub fn render_details(item: &CatalogItem) -> String {
    let mut lines = vec![item.name.clone(), "=".repeat(item.name.chars().count())];

    lines.push(format!("Valor: {}", price_label(item.price_text.as_deref())));
    lines.push(format!(
        "Autonomia: {}",
        non_empty(&item.range_km).unwrap_or(NOT_AVAILABLE)
    ));

    // 選填欄位沒有值就不顯示
    let optional_fields = [
        ("Bateria", &item.battery_type),
        ("Capacidade de Carga", &item.max_load_kg),
        ("Requer CNH", &item.license_requirement),
    ];
    for (label, value) in optional_fields {
        if let Some(value) = non_empty(value) {
            lines.push(format!("{}: {}", label, value));
        }
    }

    if let Some(notes) = non_empty(&item.notes) {
        lines.push(String::new());
        lines.push("Descrição:".to_string());
        lines.push(notes.to_string());
    }

    let media = gallery(item);
    lines.push(String::new());
    if media.is_empty() {
        lines.push("Sem imagem".to_string());
    } else {
        lines.push("Mídia:".to_string());
        for (index, entry) in media.iter().enumerate() {
            let kind = match entry.kind {
                MediaKind::Image => "imagem",
                MediaKind::Video => "vídeo",
            };
            lines.push(format!("  {}. [{}] {}", index + 1, kind, entry.src));
        }
    }

    lines.join("\n")
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Availability, PriceRange};

    fn bike() -> CatalogItem {
        CatalogItem {
            id: "b1".to_string(),
            name: "Urbana Z".to_string(),
            price_text: Some("R$ 15.500,50".to_string()),
            range_km: Some("60 km".to_string()),
            max_load_kg: Some("120 kg".to_string()),
            license_requirement: None,
            notes: Some("Revisada".to_string()),
            battery_type: Some("  ".to_string()),
            media_urls: vec![
                "https://cdn.example.com/a.jpg".to_string(),
                "https://youtu.be/abc123".to_string(),
            ],
            availability: Availability::Available,
            created_at: None,
        }
    }

    #[test]
    fn test_render_listing_counts() {
        let page = CatalogPage {
            items: vec![bike()],
            total: 4,
            max_price: 16000.0,
        };
        let text = render_listing(&page, &CatalogQuery::new("urb", PriceRange::unbounded()));

        assert!(text.contains("Mostrando 1 de 4 bikes"));
        assert!(text.contains("b1 | Urbana Z | R$ 15.500,50 | Autonomia: 60 km"));
        assert!(text.contains("R$ 0 até R$ 16.000"));
        assert!(text.contains("Busca: \"urb\""));
    }

    #[test]
    fn test_render_empty_listing() {
        let page = CatalogPage {
            items: vec![],
            total: 2,
            max_price: 50000.0,
        };
        let text = render_listing(&page, &CatalogQuery::default());
        assert!(text.contains("Nenhuma bike encontrada"));
        assert!(!text.contains("Mostrando"));
    }

    #[test]
    fn test_render_details_omits_blank_fields() {
        let text = render_details(&bike());

        assert!(text.starts_with("Urbana Z\n========"));
        assert!(text.contains("Valor: R$ 15.500,50"));
        assert!(text.contains("Capacidade de Carga: 120 kg"));
        assert!(!text.contains("Bateria"));
        assert!(!text.contains("Requer CNH"));
        assert!(text.contains("Descrição:\nRevisada"));
        assert!(text.contains("2. [vídeo] https://www.youtube.com/embed/abc123"));
    }

    #[test]
    fn test_render_details_without_price_or_range() {
        let mut item = bike();
        item.price_text = None;
        item.range_km = None;
        item.media_urls.clear();

        let text = render_details(&item);
        assert!(text.contains("Valor: Consulte"));
        assert!(text.contains("Autonomia: N/A"));
        assert!(text.contains("Sem imagem"));
    }
}
