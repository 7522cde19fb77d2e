use serde::Deserialize;

use crate::engine::SearchParams;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the inventory store service
    #[serde(default = "default_inventory_api_url")]
    pub inventory_api_url: String,

    /// Base URL for item deep links in rendered outfits
    #[serde(default = "default_archive_base_url")]
    pub archive_base_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Randomized search trials per archetype
    #[serde(default = "default_search_trials")]
    pub search_trials: usize,

    /// Filled slots required for a trial to count as an outfit
    #[serde(default = "default_min_filled_slots")]
    pub min_filled_slots: usize,

    /// Maximum outfits (or pairs) per response
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Listings priced below this are treated as junk
    #[serde(default = "default_min_item_price")]
    pub min_item_price: f64,
}

fn default_inventory_api_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_archive_base_url() -> String {
    "https://shop.example.com/archive".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_search_trials() -> usize {
    200
}

fn default_min_filled_slots() -> usize {
    3
}

fn default_max_results() -> usize {
    5
}

fn default_min_item_price() -> f64 {
    100.0
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            trials: self.search_trials,
            min_filled_slots: self.min_filled_slots,
            max_results: self.max_results,
            min_price: self.min_item_price,
        }
    }
}
