use serde::{Deserialize, Serialize};

/// Coarse aesthetic category assigned per brand
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AestheticCluster {
    Luxury,
    Street,
    Technical,
    Minimal,
    Heritage,
    Workwear,
}

/// Garment fit category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Silhouette {
    Structured,
    Relaxed,
    Oversized,
    Technical,
}

/// Gender inferred from listing title keywords
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

/// Color family matched from listing title keywords
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    Neutrals,
    Earth,
    Accents,
}

/// Raw inventory record as the inventory store returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawItem {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: String,
}

/// Inventory record with derived styling attributes
///
/// Recomputed from the raw record on every request, never persisted.
/// The effective cluster of a polluted item is forced to `minimal`
/// regardless of its brand's registered cluster.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedItem {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub price: f64,
    pub category: String,
    pub images: Vec<String>,
    pub gender: Gender,
    pub cluster: AestheticCluster,
    /// 0-10 dress formality inherited from the brand
    pub formality: u8,
    pub silhouette: Silhouette,
    pub color_family: ColorFamily,
    /// Title references a competitor brand, so brand attribution is unreliable
    pub is_polluted: bool,
    /// 1-3, outer garments must not be lighter than what they cover
    pub layer_weight: u8,
}

impl EnrichedItem {
    /// Case-insensitive title match against any of the given keywords
    pub fn title_contains_any(&self, keywords: &[String]) -> bool {
        let title = self.title.to_lowercase();
        keywords.iter().any(|k| title.contains(&k.to_lowercase()))
    }
}
