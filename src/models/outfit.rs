use serde::Serialize;

use super::EnrichedItem;

/// One of the four outfit positions an archetype fills
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Slot {
    Outerwear,
    Tops,
    Bottoms,
    Footwear,
}

impl Slot {
    /// Display order: outerwear, top, bottom, footwear
    pub const ALL: [Slot; 4] = [Slot::Outerwear, Slot::Tops, Slot::Bottoms, Slot::Footwear];

    pub fn ordinal(self) -> usize {
        match self {
            Slot::Outerwear => 0,
            Slot::Tops => 1,
            Slot::Bottoms => 2,
            Slot::Footwear => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::Outerwear => "outerwear",
            Slot::Tops => "tops",
            Slot::Bottoms => "bottoms",
            Slot::Footwear => "footwear",
        }
    }

    /// Maps an inventory category to its slot by substring match
    ///
    /// Checked outerwear, footwear, bottoms, tops in that order so compound
    /// names like "Sweatpants" land on bottoms rather than tops.
    pub fn for_category(category: &str) -> Option<Slot> {
        let cat = category.to_lowercase();
        const OUTERWEAR: [&str; 4] = ["jacket", "outerwear", "coat", "parka"];
        const FOOTWEAR: [&str; 5] = ["footwear", "shoe", "sneaker", "boot", "trainer"];
        const BOTTOMS: [&str; 5] = ["pant", "denim", "trouser", "short", "cargo"];
        const TOPS: [&str; 7] = ["shirt", "top", "sweater", "hoodie", "knit", "tee", "fleece"];

        if OUTERWEAR.iter().any(|k| cat.contains(k)) {
            Some(Slot::Outerwear)
        } else if FOOTWEAR.iter().any(|k| cat.contains(k)) {
            Some(Slot::Footwear)
        } else if BOTTOMS.iter().any(|k| cat.contains(k)) {
            Some(Slot::Bottoms)
        } else if TOPS.iter().any(|k| cat.contains(k)) {
            Some(Slot::Tops)
        } else {
            None
        }
    }
}

/// One rendered item within an outfit, the full display contract
#[derive(Debug, Clone, Serialize)]
pub struct OutfitItem {
    pub id: String,
    pub name: String,
    pub brand: String,
    /// First listing image, if any
    pub image: Option<String>,
    /// Formatted price, e.g. "€240"
    pub price: String,
    /// Deep link to the item detail page
    pub url: String,
}

impl OutfitItem {
    pub fn render(item: &EnrichedItem, link_base: &str) -> Self {
        Self {
            id: item.id.clone(),
            name: item.title.clone(),
            brand: item.brand.clone(),
            image: item.images.first().cloned(),
            price: format!("€{}", item.price.round() as i64),
            url: format!("{}/{}", link_base.trim_end_matches('/'), item.id),
        }
    }
}

/// A complete ranked outfit as returned to the caller
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSet {
    pub archetype_id: String,
    pub outfit_name: String,
    /// Slot-ordered: outerwear, top, bottom, footwear
    pub items: Vec<OutfitItem>,
    pub style_reason: String,
    pub score: i64,
}

/// A coordinated pair of outfits for couple mode
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoupleOutfit {
    pub outfit_name: String,
    pub is_couple: bool,
    pub male: OutfitSet,
    pub female: OutfitSet,
    pub style_reason: String,
}
