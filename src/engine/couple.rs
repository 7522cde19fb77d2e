use crate::engine::search::OutfitCandidate;
use crate::engine::{enrich, generate_enriched, Registry, SearchParams};
use crate::models::{Gender, IntentGender, RawItem, UserIntent};

/// A male and female outfit sharing the same archetype
#[derive(Debug, Clone)]
pub struct CouplePair {
    pub male: OutfitCandidate,
    pub female: OutfitCandidate,
}

/// Couple coordination: two gender-partitioned runs, cross-paired by archetype
///
/// The male run excludes items strictly tagged female and vice versa; unisex
/// items serve both. Outfits pair only when they share an archetype, and the
/// scan stops once enough pairs are collected. Both input lists are already
/// capped, so the nested scan stays small.
pub fn generate_couple(
    registry: &Registry,
    items: &[RawItem],
    intent: &UserIntent,
    params: &SearchParams,
) -> Vec<CouplePair> {
    let enriched = enrich::enrich(registry, items);

    let male_items: Vec<_> = enriched
        .iter()
        .filter(|item| item.gender != Gender::Female)
        .cloned()
        .collect();
    let female_items: Vec<_> = enriched
        .iter()
        .filter(|item| item.gender != Gender::Male)
        .cloned()
        .collect();

    let male_intent = UserIntent {
        gender: IntentGender::Male,
        ..intent.clone()
    };
    let female_intent = UserIntent {
        gender: IntentGender::Female,
        ..intent.clone()
    };

    let male_outfits = generate_enriched(registry, &male_items, &male_intent, params);
    let female_outfits = generate_enriched(registry, &female_items, &female_intent, params);

    tracing::debug!(
        male = male_outfits.len(),
        female = female_outfits.len(),
        "couple runs complete"
    );

    let mut pairs = Vec::new();
    'outer: for male in &male_outfits {
        for female in &female_outfits {
            if male.archetype_id == female.archetype_id {
                pairs.push(CouplePair {
                    male: male.clone(),
                    female: female.clone(),
                });
                if pairs.len() >= params.max_results {
                    break 'outer;
                }
            }
        }
    }
    pairs
}
