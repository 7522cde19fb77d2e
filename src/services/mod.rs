mod inventory;

pub use inventory::{HttpInventoryStore, InventoryStore};
