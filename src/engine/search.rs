use std::collections::HashSet;

use crate::engine::pools::SlotPools;
use crate::engine::registry::{tolerated, Archetype, Registry, SlotConstraints};
use crate::engine::SearchParams;
use crate::models::{EnrichedItem, Slot, UserIntent};

const BASE_SCORE: i64 = 100;
const BRAND_MATCH_BONUS: i64 = 50;
const SUBSTITUTION_PENALTY: i64 = 20;
const COLOR_MATCH_BONUS: i64 = 30;

/// A valid outfit found by the search, before ranking and rendering
#[derive(Debug, Clone)]
pub struct OutfitCandidate {
    pub archetype_id: String,
    pub archetype_name: String,
    /// Slot-ordered picks: outerwear, top, bottom, footwear
    pub items: Vec<(Slot, EnrichedItem)>,
    pub style_reason: String,
    pub score: i64,
}

impl OutfitCandidate {
    /// Composition identity: the sorted, pipe-joined item ids
    pub fn dedup_key(&self) -> String {
        let mut ids: Vec<&str> = self.items.iter().map(|(_, item)| item.id.as_str()).collect();
        ids.sort_unstable();
        ids.join("|")
    }

    pub fn contains_item(&self, id: &str) -> bool {
        self.items.iter().any(|(_, item)| item.id == id)
    }

    pub fn item_in_slot(&self, slot: Slot) -> Option<&EnrichedItem> {
        self.items
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, item)| item)
    }
}

/// Bounded randomized search for one archetype
///
/// Returns zero or more valid candidates; duplicates within the archetype are
/// already collapsed. An archetype incompatible with a pinned item yields
/// nothing at all, since pinned items must be honorable rather than merely
/// close enough.
pub fn search_archetype(
    registry: &Registry,
    archetype: &Archetype,
    pools: &SlotPools,
    pinned: &[(Slot, EnrichedItem)],
    intent: &UserIntent,
    params: &SearchParams,
) -> Vec<OutfitCandidate> {
    for (slot, item) in pinned {
        let accepted = &archetype.slot(*slot).clusters;
        let reachable = accepted.iter().any(|c| tolerated(*c).contains(&item.cluster));
        if !reachable {
            tracing::debug!(
                archetype = %archetype.id,
                item = %item.id,
                slot = slot.label(),
                "pinned item incompatible, skipping archetype"
            );
            return Vec::new();
        }
    }

    let mut found = Vec::new();
    let mut seen = HashSet::new();

    for trial in 0..params.trials {
        if let Some(candidate) = run_trial(registry, archetype, pools, pinned, intent, trial) {
            if candidate.items.len() >= params.min_filled_slots
                && seen.insert(candidate.dedup_key())
            {
                found.push(candidate);
            }
        }
    }

    tracing::debug!(
        archetype = %archetype.id,
        candidates = found.len(),
        "archetype search finished"
    );
    found
}

/// One trial: fill every slot that has a usable pool, then validate the whole
fn run_trial(
    registry: &Registry,
    archetype: &Archetype,
    pools: &SlotPools,
    pinned: &[(Slot, EnrichedItem)],
    intent: &UserIntent,
    trial: usize,
) -> Option<OutfitCandidate> {
    let mut picks: Vec<(Slot, EnrichedItem)> = Vec::with_capacity(4);
    let mut brand_matches: i64 = 0;
    let mut substituted: Vec<Slot> = Vec::new();

    for slot in Slot::ALL {
        if let Some((_, item)) = pinned.iter().find(|(s, _)| *s == slot) {
            picks.push((slot, item.clone()));
            continue;
        }

        let slot_pool = pools.slot(slot);
        if slot_pool.is_empty() {
            continue;
        }
        let constraints = archetype.slot(slot);

        let mut working: Vec<&EnrichedItem> = slot_pool
            .iter()
            .filter(|item| strict_valid(constraints, item))
            .collect();
        if working.is_empty() {
            working = slot_pool
                .iter()
                .filter(|item| relaxed_valid(constraints, item))
                .collect();
        }
        if working.is_empty() {
            continue;
        }

        narrow_by_brands(&mut working, registry.preferred_brands(&archetype.id));

        if let Some(occasion) = &intent.occasion {
            let needle = occasion.to_lowercase();
            narrow(&mut working, |item| item.title.to_lowercase().contains(&needle));
        }

        if !intent.brands.is_empty() {
            let matches: Vec<&EnrichedItem> = working
                .iter()
                .copied()
                .filter(|item| intent.brands.contains(&item.brand))
                .collect();
            if matches.is_empty() {
                substituted.push(slot);
            } else {
                working = matches;
                brand_matches += 1;
            }
        }

        // Deterministic-but-varying index spreads selection across the
        // shuffled pool without repeating the same pattern per slot.
        let index = (trial * 17 + slot.ordinal() * 23) % working.len();
        picks.push((slot, working[index].clone()));
    }

    let formalities: Vec<u8> = picks.iter().map(|(_, item)| item.formality).collect();
    let spread = formalities.iter().max()? - formalities.iter().min()?;
    if spread > archetype.max_formality_delta {
        return None;
    }

    if let (Some(outer), Some(top)) = (
        picks.iter().find(|(s, _)| *s == Slot::Outerwear),
        picks.iter().find(|(s, _)| *s == Slot::Tops),
    ) {
        // An outer shell must not be structurally lighter than what it covers
        if outer.1.layer_weight < top.1.layer_weight {
            return None;
        }
    }

    let mut color_hit = false;
    if !intent.colors.is_empty() {
        color_hit = picks
            .iter()
            .any(|(_, item)| item.title_contains_any(&intent.colors));
        if !color_hit {
            return None;
        }
    }

    let score = BASE_SCORE + BRAND_MATCH_BONUS * brand_matches
        - SUBSTITUTION_PENALTY * substituted.len() as i64
        + if color_hit { COLOR_MATCH_BONUS } else { 0 };

    let style_reason = style_reason(archetype, &picks, &substituted, color_hit);

    Some(OutfitCandidate {
        archetype_id: archetype.id.clone(),
        archetype_name: archetype.name.clone(),
        items: picks,
        style_reason,
        score,
    })
}

/// Full slot validity: cluster, silhouette, blocklist, and pollution
fn strict_valid(constraints: &SlotConstraints, item: &EnrichedItem) -> bool {
    constraints.clusters.contains(&item.cluster)
        && constraints.silhouettes.contains(&item.silhouette)
        && !constraints.forbidden_brands.contains(&item.brand)
        && !item.is_polluted
}

/// Fallback validity once the strict pool is exhausted
///
/// The item's cluster only has to be tolerated by one of the slot's accepted
/// clusters through the compatibility matrix; silhouette, blocklist, and
/// pollution are ignored.
fn relaxed_valid(constraints: &SlotConstraints, item: &EnrichedItem) -> bool {
    constraints
        .clusters
        .iter()
        .any(|c| tolerated(*c).contains(&item.cluster))
}

fn narrow_by_brands(pool: &mut Vec<&EnrichedItem>, brands: &[String]) {
    narrow(pool, |item| brands.contains(&item.brand));
}

/// Shrinks the pool to items matching the predicate, unless none do
fn narrow<'a, F>(pool: &mut Vec<&'a EnrichedItem>, predicate: F)
where
    F: Fn(&EnrichedItem) -> bool,
{
    let subset: Vec<&'a EnrichedItem> = pool.iter().copied().filter(|i| predicate(i)).collect();
    if !subset.is_empty() {
        *pool = subset;
    }
}

fn style_reason(
    archetype: &Archetype,
    picks: &[(Slot, EnrichedItem)],
    substituted: &[Slot],
    color_hit: bool,
) -> String {
    let mut brands: Vec<&str> = Vec::new();
    for (_, item) in picks {
        if !brands.contains(&item.brand.as_str()) {
            brands.push(item.brand.as_str());
        }
    }

    let mut reason = format!("{} built on {}", archetype.name, brands.join(" x "));
    if color_hit {
        reason.push_str(", hitting your color palette");
    }
    if !substituted.is_empty() {
        let slots: Vec<&str> = substituted.iter().map(|s| s.label()).collect();
        reason.push_str(&format!(
            "; substituted {} from outside your preferred brands",
            slots.join(" and ")
        ));
    }
    reason
}
