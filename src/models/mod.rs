mod intent;
mod item;
mod outfit;

pub use intent::{IntentGender, UserIntent};
pub use item::{AestheticCluster, ColorFamily, EnrichedItem, Gender, RawItem, Silhouette};
pub use outfit::{CoupleOutfit, OutfitItem, OutfitSet, Slot};
