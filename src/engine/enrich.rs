use crate::engine::registry::Registry;
use crate::models::{AestheticCluster, EnrichedItem, RawItem, Silhouette, Slot};

/// Derives semantic styling attributes for every raw inventory record
///
/// Pure and deterministic: same-length output, no I/O, never fails. Unknown
/// brands fall back to the registry's neutral default profile.
pub fn enrich(registry: &Registry, items: &[RawItem]) -> Vec<EnrichedItem> {
    items.iter().map(|item| enrich_one(registry, item)).collect()
}

fn enrich_one(registry: &Registry, item: &RawItem) -> EnrichedItem {
    let lower_title = item.title.to_lowercase();
    let meta = registry.brand_meta(&item.brand);

    let is_polluted = registry.foreign_brand_in_title(&item.brand, &lower_title);
    let cluster = if is_polluted {
        AestheticCluster::Minimal
    } else {
        meta.cluster
    };

    let silhouette = meta.silhouette_bias.unwrap_or(match meta.cluster {
        AestheticCluster::Technical => Silhouette::Technical,
        _ => Silhouette::Relaxed,
    });

    EnrichedItem {
        id: item.id.clone(),
        title: item.title.clone(),
        brand: item.brand.clone(),
        price: item.price,
        category: item.category.clone(),
        images: item.images.clone(),
        gender: registry.infer_gender(&item.title),
        cluster,
        formality: meta.formality_bias,
        silhouette,
        color_family: registry.color_family(&lower_title),
        is_polluted,
        layer_weight: layer_weight(&item.category, &lower_title),
    }
}

/// 3 for outerwear, 2 for knitwear/hoodie-like garments, 1 otherwise
fn layer_weight(category: &str, lower_title: &str) -> u8 {
    const MIDWEIGHT: [&str; 5] = ["knit", "sweater", "hoodie", "fleece", "cardigan"];

    if Slot::for_category(category) == Some(Slot::Outerwear) {
        3
    } else {
        let lower_category = category.to_lowercase();
        if MIDWEIGHT
            .iter()
            .any(|k| lower_category.contains(k) || lower_title.contains(k))
        {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColorFamily, Gender};

    fn raw(id: &str, title: &str, brand: &str, category: &str) -> RawItem {
        RawItem {
            id: id.to_string(),
            title: title.to_string(),
            brand: brand.to_string(),
            price: 150.0,
            category: category.to_string(),
            images: vec![],
            status: "available".to_string(),
        }
    }

    #[test]
    fn test_same_length_output() {
        let registry = Registry::new();
        let items = vec![
            raw("1", "Beta Jacket", "Arc'teryx", "Jackets"),
            raw("2", "Box Logo Tee", "Supreme", "T-Shirts"),
        ];
        assert_eq!(enrich(&registry, &items).len(), 2);
    }

    #[test]
    fn test_registered_brand_attributes() {
        let registry = Registry::new();
        let enriched = enrich(&registry, &[raw("1", "Beta LT Shell", "Arc'teryx", "Jackets")]);
        let item = &enriched[0];
        assert_eq!(item.cluster, AestheticCluster::Technical);
        assert_eq!(item.formality, 3);
        assert_eq!(item.silhouette, Silhouette::Technical);
        assert_eq!(item.layer_weight, 3);
        assert!(!item.is_polluted);
    }

    #[test]
    fn test_unknown_brand_defaults() {
        let registry = Registry::new();
        let enriched = enrich(&registry, &[raw("1", "Plain Tee", "NoName Basics", "T-Shirts")]);
        let item = &enriched[0];
        assert_eq!(item.cluster, AestheticCluster::Minimal);
        assert_eq!(item.formality, 3);
        assert_eq!(item.silhouette, Silhouette::Relaxed);
        assert_eq!(item.layer_weight, 1);
    }

    #[test]
    fn test_pollution_forces_minimal_cluster() {
        let registry = Registry::new();
        let enriched = enrich(
            &registry,
            &[raw("1", "Nike style work pant", "Dickies", "Pants")],
        );
        let item = &enriched[0];
        assert!(item.is_polluted);
        assert_eq!(item.cluster, AestheticCluster::Minimal);
        // Formality still comes from the item's own brand
        assert_eq!(item.formality, 2);
    }

    #[test]
    fn test_gender_and_color_derivation() {
        let registry = Registry::new();
        let enriched = enrich(
            &registry,
            &[raw("1", "Women's olive fleece", "Patagonia", "Fleece")],
        );
        let item = &enriched[0];
        assert_eq!(item.gender, Gender::Female);
        assert_eq!(item.color_family, ColorFamily::Earth);
        assert_eq!(item.layer_weight, 2);
    }

    #[test]
    fn test_midweight_from_title_keyword() {
        let registry = Registry::new();
        let enriched = enrich(
            &registry,
            &[raw("1", "Heavy knit crewneck", "Stone Island", "Tops")],
        );
        assert_eq!(enriched[0].layer_weight, 2);
    }
}
