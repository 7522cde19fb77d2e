use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::engine::couple::CouplePair;
use crate::engine::{self, OutfitCandidate};
use crate::error::AppResult;
use crate::models::{CoupleOutfit, IntentGender, OutfitItem, OutfitSet, UserIntent};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct ArchetypeSummary {
    pub id: String,
    pub name: String,
}

/// Response for outfit generation, single or couple mode
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Single { outfits: Vec<OutfitSet> },
    Couple { pairs: Vec<CoupleOutfit> },
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Lists the registered style archetypes
pub async fn list_archetypes(State(state): State<AppState>) -> Json<Vec<ArchetypeSummary>> {
    let archetypes = state
        .registry
        .archetypes()
        .iter()
        .map(|a| ArchetypeSummary {
            id: a.id.clone(),
            name: a.name.clone(),
        })
        .collect();
    Json(archetypes)
}

/// Generates ranked outfits for the given intent
///
/// Fetches the current available-inventory snapshot, then runs the engine
/// synchronously. An empty result list means "no matches", not an error.
pub async fn generate_outfits(
    State(state): State<AppState>,
    Json(intent): Json<UserIntent>,
) -> AppResult<Json<GenerateResponse>> {
    let items = state.inventory.fetch_available().await?;

    tracing::info!(
        inventory = items.len(),
        gender = ?intent.gender,
        "generating outfits"
    );

    let response = if intent.gender == IntentGender::Couple {
        let pairs = engine::generate_couple(&state.registry, &items, &intent, &state.params);
        GenerateResponse::Couple {
            pairs: pairs
                .iter()
                .map(|pair| render_pair(pair, &state.archive_base_url))
                .collect(),
        }
    } else {
        let candidates = engine::generate(&state.registry, &items, &intent, &state.params);
        GenerateResponse::Single {
            outfits: candidates
                .iter()
                .map(|candidate| render_outfit(candidate, &state.archive_base_url))
                .collect(),
        }
    };

    Ok(Json(response))
}

fn render_outfit(candidate: &OutfitCandidate, link_base: &str) -> OutfitSet {
    OutfitSet {
        archetype_id: candidate.archetype_id.clone(),
        outfit_name: candidate.archetype_name.clone(),
        items: candidate
            .items
            .iter()
            .map(|(_, item)| OutfitItem::render(item, link_base))
            .collect(),
        style_reason: candidate.style_reason.clone(),
        score: candidate.score,
    }
}

fn render_pair(pair: &CouplePair, link_base: &str) -> CoupleOutfit {
    CoupleOutfit {
        outfit_name: pair.male.archetype_name.clone(),
        is_couple: true,
        male: render_outfit(&pair.male, link_base),
        female: render_outfit(&pair.female, link_base),
        style_reason: format!("Coordinated {} looks for two", pair.male.archetype_name),
    }
}
