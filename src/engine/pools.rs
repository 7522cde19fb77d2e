use rand::seq::SliceRandom;

use crate::models::{EnrichedItem, Slot, UserIntent};

/// Enriched items partitioned into the four archetype slots
///
/// Each pool is shuffled at build time so repeated searches over the same
/// inventory snapshot do not keep picking the same early-index items.
pub struct SlotPools {
    pools: [Vec<EnrichedItem>; 4],
}

impl SlotPools {
    pub fn slot(&self, slot: Slot) -> &[EnrichedItem] {
        &self.pools[slot.ordinal()]
    }

    pub fn total_items(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }
}

/// Partitions enriched items into shuffled per-slot pools
///
/// Items below the price floor are assumed to be junk listings and dropped.
/// The gender filter keeps an item when the intent is unisex/couple, the item
/// matches the requested gender, or the item itself is unisex. The source
/// slice is left untouched.
pub fn build_pools(items: &[EnrichedItem], intent: &UserIntent, min_price: f64) -> SlotPools {
    let mut pools: [Vec<EnrichedItem>; 4] = Default::default();

    for item in items {
        if item.price < min_price {
            continue;
        }
        if !intent.gender.admits(item.gender) {
            continue;
        }
        if let Some(slot) = Slot::for_category(&item.category) {
            pools[slot.ordinal()].push(item.clone());
        }
    }

    let mut rng = rand::thread_rng();
    for pool in &mut pools {
        pool.shuffle(&mut rng);
    }

    SlotPools { pools }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AestheticCluster, ColorFamily, Gender, IntentGender, Silhouette};

    fn item(id: &str, category: &str, price: f64, gender: Gender) -> EnrichedItem {
        EnrichedItem {
            id: id.to_string(),
            title: format!("Item {id}"),
            brand: "Nike".to_string(),
            price,
            category: category.to_string(),
            images: vec![],
            gender,
            cluster: AestheticCluster::Street,
            formality: 1,
            silhouette: Silhouette::Relaxed,
            color_family: ColorFamily::Neutrals,
            is_polluted: false,
            layer_weight: 1,
        }
    }

    #[test]
    fn test_price_floor_drops_junk_listings() {
        let items = vec![
            item("cheap-1", "Pants", 50.0, Gender::Unisex),
            item("cheap-2", "Shoes", 50.0, Gender::Unisex),
            item("ok", "Pants", 120.0, Gender::Unisex),
        ];
        let pools = build_pools(&items, &UserIntent::default(), 100.0);
        assert_eq!(pools.total_items(), 1);
        assert_eq!(pools.slot(Slot::Bottoms)[0].id, "ok");
        assert!(pools.slot(Slot::Footwear).is_empty());
    }

    #[test]
    fn test_gender_filter() {
        let items = vec![
            item("m", "Pants", 120.0, Gender::Male),
            item("f", "Pants", 120.0, Gender::Female),
            item("u", "Pants", 120.0, Gender::Unisex),
        ];

        let male_intent = UserIntent {
            gender: IntentGender::Male,
            ..Default::default()
        };
        let pools = build_pools(&items, &male_intent, 100.0);
        let pool: Vec<&str> = pools
            .slot(Slot::Bottoms)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(pool.len(), 2);
        assert!(pool.contains(&"m"));
        assert!(pool.contains(&"u"));

        let couple_intent = UserIntent {
            gender: IntentGender::Couple,
            ..Default::default()
        };
        assert_eq!(build_pools(&items, &couple_intent, 100.0).total_items(), 3);
    }

    #[test]
    fn test_partition_by_category() {
        let items = vec![
            item("jacket", "Jackets", 150.0, Gender::Unisex),
            item("tee", "T-Shirts", 150.0, Gender::Unisex),
            item("pants", "Pants", 150.0, Gender::Unisex),
            item("shoes", "Sneakers", 150.0, Gender::Unisex),
            item("bag", "Accessories", 150.0, Gender::Unisex),
        ];
        let pools = build_pools(&items, &UserIntent::default(), 100.0);
        assert_eq!(pools.slot(Slot::Outerwear).len(), 1);
        assert_eq!(pools.slot(Slot::Tops).len(), 1);
        assert_eq!(pools.slot(Slot::Bottoms).len(), 1);
        assert_eq!(pools.slot(Slot::Footwear).len(), 1);
        // Accessories fit no slot
        assert_eq!(pools.total_items(), 4);
    }

    #[test]
    fn test_shuffle_preserves_membership() {
        let items: Vec<EnrichedItem> = (0..20)
            .map(|i| item(&format!("p{i}"), "Pants", 120.0, Gender::Unisex))
            .collect();
        let pools = build_pools(&items, &UserIntent::default(), 100.0);
        let mut ids: Vec<&str> = pools.slot(Slot::Bottoms).iter().map(|i| i.id.as_str()).collect();
        ids.sort();
        let mut expected: Vec<String> = (0..20).map(|i| format!("p{i}")).collect();
        expected.sort();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
