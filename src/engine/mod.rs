pub mod couple;
pub mod enrich;
pub mod pools;
pub mod rank;
pub mod registry;
pub mod search;

pub use couple::generate_couple;
pub use registry::Registry;
pub use search::OutfitCandidate;

use crate::models::{EnrichedItem, RawItem, Slot, UserIntent};

/// Tuning knobs for the bounded search
///
/// The trial bound and the minimum-filled-slots threshold are heuristic
/// constants with no derivation, so they stay configurable.
#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Randomized trials per archetype
    pub trials: usize,
    /// Filled slots required for a trial to count as an outfit
    pub min_filled_slots: usize,
    /// Result cap per response (or pairs in couple mode)
    pub max_results: usize,
    /// Listings below this price are treated as junk
    pub min_price: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            trials: 200,
            min_filled_slots: 3,
            max_results: 5,
            min_price: 100.0,
        }
    }
}

/// Runs the full single-person pipeline over a raw inventory snapshot
///
/// Enrichment, pool building, per-archetype search, then global dedup and
/// ranking. Degrades to an empty list rather than failing.
pub fn generate(
    registry: &Registry,
    items: &[RawItem],
    intent: &UserIntent,
    params: &SearchParams,
) -> Vec<OutfitCandidate> {
    let enriched = enrich::enrich(registry, items);
    generate_enriched(registry, &enriched, intent, params)
}

/// Pipeline entry for already-enriched items; couple mode reuses this per partition
pub fn generate_enriched(
    registry: &Registry,
    enriched: &[EnrichedItem],
    intent: &UserIntent,
    params: &SearchParams,
) -> Vec<OutfitCandidate> {
    let pools = pools::build_pools(enriched, intent, params.min_price);
    let pinned = resolve_pinned(enriched, intent);

    tracing::debug!(
        pooled = pools.total_items(),
        pinned = pinned.len(),
        "candidate pools built"
    );

    let mut all = Vec::new();
    for archetype in registry.archetypes() {
        all.extend(search::search_archetype(
            registry, archetype, &pools, &pinned, intent, params,
        ));
    }
    rank::rank(all, params.max_results)
}

/// Looks up anchor/locked items in the enriched inventory and assigns each to
/// its slot; ids that resolve to no item or no slot are silently dropped.
fn resolve_pinned(enriched: &[EnrichedItem], intent: &UserIntent) -> Vec<(Slot, EnrichedItem)> {
    let mut pinned: Vec<(Slot, EnrichedItem)> = Vec::new();
    for id in intent.pinned_ids() {
        let Some(item) = enriched.iter().find(|item| item.id == id) else {
            continue;
        };
        let Some(slot) = Slot::for_category(&item.category) else {
            continue;
        };
        if !pinned.iter().any(|(s, _)| *s == slot) {
            pinned.push((slot, item.clone()));
        }
    }
    pinned
}
