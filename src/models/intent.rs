use serde::{Deserialize, Serialize};

use super::Gender;

/// Requested gender for the generated outfits
///
/// `couple` switches the engine into paired coordination mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntentGender {
    Male,
    Female,
    #[default]
    Unisex,
    Couple,
}

impl IntentGender {
    /// Whether an item with the given inferred gender may enter the pools
    pub fn admits(&self, item_gender: Gender) -> bool {
        match self {
            IntentGender::Unisex | IntentGender::Couple => true,
            IntentGender::Male => matches!(item_gender, Gender::Male | Gender::Unisex),
            IntentGender::Female => matches!(item_gender, Gender::Female | Gender::Unisex),
        }
    }
}

/// What the user asked for
///
/// Every field beyond `gender` is an optional preference; missing or empty
/// values mean "no preference" rather than a hard requirement.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserIntent {
    /// Single pinned item the outfit must be built around
    pub anchor_item_id: Option<String>,
    /// Additional pinned items, honored in their own slots
    pub locked_item_ids: Vec<String>,
    pub gender: IntentGender,
    /// Preferred color keywords matched against item titles
    pub colors: Vec<String>,
    /// Preferred brands; misses are substituted with a scoring penalty
    pub brands: Vec<String>,
    /// Free-text occasion hint, e.g. "hiking"
    pub occasion: Option<String>,
}

impl UserIntent {
    /// All pinned item ids, anchor first, without duplicates
    pub fn pinned_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        if let Some(anchor) = &self.anchor_item_id {
            ids.push(anchor.as_str());
        }
        for id in &self.locked_item_ids {
            if !ids.contains(&id.as_str()) {
                ids.push(id.as_str());
            }
        }
        ids
    }
}
