use std::collections::HashSet;

use crate::engine::search::OutfitCandidate;

/// Deduplicates, ranks, and truncates candidates from all archetypes
///
/// Two candidates with the same item set are compositionally identical even
/// when different trials or archetypes produced them; only the first survives.
pub fn rank(candidates: Vec<OutfitCandidate>, max_results: usize) -> Vec<OutfitCandidate> {
    let mut seen = HashSet::new();
    let mut unique: Vec<OutfitCandidate> = candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.dedup_key()))
        .collect();

    unique.sort_by(|a, b| b.score.cmp(&a.score));
    unique.truncate(max_results);
    unique
}
