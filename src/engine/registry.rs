use std::collections::HashMap;

use regex::Regex;

use crate::models::{AestheticCluster, ColorFamily, Gender, Silhouette, Slot};

/// Static metadata registered per brand
#[derive(Debug, Clone)]
pub struct BrandMeta {
    pub cluster: AestheticCluster,
    /// 0-10 dress formality
    pub formality_bias: u8,
    pub silhouette_bias: Option<Silhouette>,
}

/// Acceptance rules for one archetype slot
#[derive(Debug, Clone)]
pub struct SlotConstraints {
    pub clusters: Vec<AestheticCluster>,
    pub silhouettes: Vec<Silhouette>,
    pub forbidden_brands: Vec<String>,
}

/// A named style template with per-slot compatibility rules
#[derive(Debug, Clone)]
pub struct Archetype {
    pub id: String,
    pub name: String,
    /// Indexed by `Slot::ordinal`
    pub slots: [SlotConstraints; 4],
    /// Clusters whose registered brands become this archetype's preferred brands
    pub core_clusters: Vec<AestheticCluster>,
    /// Maximum formality spread allowed across the whole outfit
    pub max_formality_delta: u8,
}

impl Archetype {
    pub fn slot(&self, slot: Slot) -> &SlotConstraints {
        &self.slots[slot.ordinal()]
    }
}

/// Which clusters each cluster tolerates adjacent to it
///
/// `minimal` is the universal neutral and tolerates every cluster.
pub fn tolerated(cluster: AestheticCluster) -> &'static [AestheticCluster] {
    use AestheticCluster::*;
    match cluster {
        Minimal => &[Minimal, Luxury, Street, Technical, Heritage, Workwear],
        Luxury => &[Luxury, Minimal, Heritage],
        Street => &[Street, Workwear, Minimal],
        Technical => &[Technical, Minimal, Heritage],
        Heritage => &[Heritage, Luxury, Minimal, Technical],
        Workwear => &[Workwear, Street, Minimal],
    }
}

/// Read-only attribute registries, built once at startup and shared
///
/// Holds the brand table, color keyword families, archetype definitions,
/// derived preferred-brand lists, and the compiled gender regexes. Safe for
/// concurrent reads without locking.
pub struct Registry {
    brands: HashMap<String, BrandMeta>,
    /// Lowercased brand names eligible for the pollution check (length > 3)
    pollution_tokens: Vec<(String, String)>,
    color_families: Vec<(ColorFamily, &'static [&'static str])>,
    archetypes: Vec<Archetype>,
    preferred_brands: HashMap<String, Vec<String>>,
    female_re: Regex,
    male_re: Regex,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        let brands = brand_table();

        let pollution_tokens = brands
            .keys()
            .filter(|name| name.len() > 3)
            .map(|name| (name.clone(), name.to_lowercase()))
            .collect();

        let color_families: Vec<(ColorFamily, &'static [&'static str])> = vec![
            (
                ColorFamily::Neutrals,
                &[
                    "black", "white", "grey", "charcoal", "slate", "stone", "cream", "sand",
                    "khaki", "beige", "navy",
                ][..],
            ),
            (
                ColorFamily::Earth,
                &["olive", "forest", "clay", "rust", "espresso", "brown"][..],
            ),
            (
                ColorFamily::Accents,
                &["red", "blue", "yellow", "pink", "purple", "orange", "electric blue"][..],
            ),
        ];

        let archetypes = archetype_table();

        let preferred_brands = archetypes
            .iter()
            .map(|archetype| {
                let mut preferred: Vec<String> = brands
                    .iter()
                    .filter(|(_, meta)| archetype.core_clusters.contains(&meta.cluster))
                    .map(|(name, _)| name.clone())
                    .collect();
                preferred.sort();
                (archetype.id.clone(), preferred)
            })
            .collect();

        // Female keywords are checked first by `infer_gender` so that
        // "women" never matches the "men" token.
        let female_re = Regex::new(r"(?i)damsk|women|woman|lady|femme|damen|girl")
            .expect("female keyword regex");
        let male_re =
            Regex::new(r"(?i)męsk|\bmen\b|\bman\b|guy|homme|herren").expect("male keyword regex");

        Self {
            brands,
            pollution_tokens,
            color_families,
            archetypes,
            preferred_brands,
            female_re,
            male_re,
        }
    }

    /// Brand metadata, defaulting unknown brands to a neutral profile
    pub fn brand_meta(&self, brand: &str) -> BrandMeta {
        self.brands.get(brand).cloned().unwrap_or(BrandMeta {
            cluster: AestheticCluster::Minimal,
            formality_bias: 3,
            silhouette_bias: Some(Silhouette::Relaxed),
        })
    }

    /// Whether the lowercased title references a registered brand other than the item's own
    ///
    /// Only brand names longer than 3 characters are checked, to avoid false
    /// positives on short tokens.
    pub fn foreign_brand_in_title(&self, own_brand: &str, lower_title: &str) -> bool {
        self.pollution_tokens
            .iter()
            .any(|(name, lower)| name != own_brand && lower_title.contains(lower.as_str()))
    }

    /// Gender inference from multilingual title keywords (EN/FR/DE/PL)
    pub fn infer_gender(&self, title: &str) -> Gender {
        if self.female_re.is_match(title) {
            Gender::Female
        } else if self.male_re.is_match(title) {
            Gender::Male
        } else {
            Gender::Unisex
        }
    }

    /// First matching color family in fixed order, defaulting to neutrals
    pub fn color_family(&self, lower_title: &str) -> ColorFamily {
        for (family, keywords) in &self.color_families {
            if keywords.iter().any(|k| lower_title.contains(k)) {
                return *family;
            }
        }
        ColorFamily::Neutrals
    }

    pub fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    /// Brands this archetype reaches for first when the slot pool allows it
    pub fn preferred_brands(&self, archetype_id: &str) -> &[String] {
        self.preferred_brands
            .get(archetype_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn brand_table() -> HashMap<String, BrandMeta> {
    use AestheticCluster::*;
    use Silhouette::{Oversized, Relaxed, Structured, Technical as TechFit};

    let entries: [(&str, AestheticCluster, u8, Silhouette); 24] = [
        ("Louis Vuitton", Luxury, 8, Structured),
        ("Hermès", Luxury, 9, Structured),
        ("Chanel", Luxury, 9, Structured),
        ("Prada", Luxury, 8, Relaxed),
        ("Chrome Hearts", Luxury, 5, Relaxed),
        ("Moncler", Luxury, 6, TechFit),
        ("Stone Island", Heritage, 4, TechFit),
        ("Burberry", Heritage, 7, Structured),
        ("CP Company", Heritage, 4, TechFit),
        ("Ralph Lauren", Heritage, 6, Structured),
        ("Arc'teryx", Technical, 3, TechFit),
        ("Salomon", Technical, 2, TechFit),
        ("Patagonia", Technical, 2, Relaxed),
        ("Oakley", Technical, 2, TechFit),
        ("Supreme", Street, 2, Oversized),
        ("A Bathing Ape", Street, 2, Oversized),
        ("Stüssy", Street, 2, Relaxed),
        ("Corteiz", Street, 1, Oversized),
        ("Nike", Street, 1, Relaxed),
        ("Adidas", Street, 1, Relaxed),
        ("Dickies", Workwear, 2, Relaxed),
        ("Carhartt", Workwear, 2, Relaxed),
        ("Levi's", Workwear, 2, Relaxed),
        ("Essentials", Minimal, 2, Oversized),
    ];

    entries
        .into_iter()
        .map(|(name, cluster, formality_bias, silhouette)| {
            (
                name.to_string(),
                BrandMeta {
                    cluster,
                    formality_bias,
                    silhouette_bias: Some(silhouette),
                },
            )
        })
        .collect()
}

fn archetype_table() -> Vec<Archetype> {
    use AestheticCluster::*;
    use Silhouette::{Oversized, Relaxed, Structured, Technical as TechFit};

    let constraints = |clusters: &[AestheticCluster],
                       silhouettes: &[Silhouette],
                       forbidden: &[&str]| SlotConstraints {
        clusters: clusters.to_vec(),
        silhouettes: silhouettes.to_vec(),
        forbidden_brands: forbidden.iter().map(|b| b.to_string()).collect(),
    };

    vec![
        Archetype {
            id: "gorpcore".to_string(),
            name: "Gorpcore Specialist".to_string(),
            slots: [
                constraints(&[Technical], &[TechFit, Relaxed], &[]),
                constraints(&[Technical, Minimal], &[TechFit, Relaxed, Oversized], &[]),
                constraints(&[Technical, Minimal], &[TechFit, Relaxed], &[]),
                constraints(&[Technical], &[TechFit, Relaxed], &[]),
            ],
            core_clusters: vec![Technical],
            max_formality_delta: 5,
        },
        Archetype {
            id: "street".to_string(),
            name: "Street Uniform".to_string(),
            slots: [
                constraints(&[Street, Workwear, Minimal], &[Oversized, Relaxed], &[]),
                constraints(&[Street, Minimal], &[Oversized, Relaxed], &[]),
                constraints(&[Street, Workwear, Minimal], &[Relaxed, Oversized], &[]),
                constraints(&[Street, Minimal], &[Relaxed, Oversized, TechFit], &[]),
            ],
            core_clusters: vec![Street],
            max_formality_delta: 5,
        },
        Archetype {
            id: "quiet-luxury".to_string(),
            name: "Quiet Luxury".to_string(),
            slots: [
                constraints(
                    &[Luxury, Heritage, Minimal],
                    &[Structured, Relaxed],
                    &["Chrome Hearts"],
                ),
                constraints(
                    &[Luxury, Heritage, Minimal],
                    &[Structured, Relaxed],
                    &["Chrome Hearts"],
                ),
                constraints(&[Luxury, Heritage, Minimal], &[Structured, Relaxed], &[]),
                constraints(
                    &[Luxury, Heritage, Minimal],
                    &[Structured, Relaxed, TechFit],
                    &[],
                ),
            ],
            core_clusters: vec![Luxury, Heritage],
            max_formality_delta: 5,
        },
    ]
}
