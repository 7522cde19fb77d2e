use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::RawItem;

/// Read-only access to the inventory store collaborator
///
/// The engine never fetches inventory itself; the API boundary queries this
/// once per request and passes the snapshot in.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// All items currently available for sale
    async fn fetch_available(&self) -> AppResult<Vec<RawItem>>;
}

/// Inventory store backed by the inventory service's HTTP API
pub struct HttpInventoryStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInventoryStore {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl InventoryStore for HttpInventoryStore {
    async fn fetch_available(&self) -> AppResult<Vec<RawItem>> {
        let url = format!("{}/items", self.base_url.trim_end_matches('/'));
        let items: Vec<RawItem> = self
            .client
            .get(&url)
            .query(&[("status", "available")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(count = items.len(), "fetched available inventory");
        Ok(items)
    }
}
