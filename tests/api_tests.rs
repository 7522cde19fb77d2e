use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;

use stylist_api::api::{create_router, AppState};
use stylist_api::engine::{Registry, SearchParams};
use stylist_api::error::AppResult;
use stylist_api::models::RawItem;
use stylist_api::services::InventoryStore;

/// Inventory store fixture serving a canned snapshot
struct FixtureStore {
    items: Vec<RawItem>,
}

#[async_trait]
impl InventoryStore for FixtureStore {
    async fn fetch_available(&self) -> AppResult<Vec<RawItem>> {
        Ok(self.items.clone())
    }
}

fn raw(id: &str, title: &str, brand: &str, category: &str, price: f64) -> RawItem {
    RawItem {
        id: id.to_string(),
        title: title.to_string(),
        brand: brand.to_string(),
        price,
        category: category.to_string(),
        images: vec![format!("https://img/{id}.jpg")],
        status: "available".to_string(),
    }
}

fn technical_inventory() -> Vec<RawItem> {
    vec![
        raw("shell", "Beta LT Shell", "Arc'teryx", "Jackets", 320.0),
        raw("fleece", "Better Sweater Fleece", "Patagonia", "Fleece", 140.0),
        raw("pants", "Alpha Trail Pant", "Arc'teryx", "Pants", 190.0),
        raw("shoes", "XT-6 Trail Shoe", "Salomon", "Sneakers", 170.0),
    ]
}

fn create_test_server(items: Vec<RawItem>) -> TestServer {
    let state = AppState {
        registry: Arc::new(Registry::new()),
        inventory: Arc::new(FixtureStore { items }),
        params: SearchParams::default(),
        archive_base_url: "https://shop.example.com/archive".to_string(),
    };
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(vec![]);
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_list_archetypes() {
    let server = create_test_server(vec![]);
    let response = server.get("/archetypes").await;
    response.assert_status_ok();

    let archetypes: Vec<serde_json::Value> = response.json();
    assert_eq!(archetypes.len(), 3);
    let ids: Vec<&str> = archetypes.iter().map(|a| a["id"].as_str().unwrap()).collect();
    assert!(ids.contains(&"gorpcore"));
}

#[tokio::test]
async fn test_generate_outfits_single_mode() {
    let server = create_test_server(technical_inventory());

    let response = server.post("/outfits").json(&json!({})).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let outfits = body["outfits"].as_array().unwrap();
    assert!(!outfits.is_empty());
    assert!(outfits.len() <= 5);

    let first = &outfits[0];
    assert!(first["score"].as_i64().unwrap() >= 100);
    assert!(!first["styleReason"].as_str().unwrap().is_empty());

    let items = first["items"].as_array().unwrap();
    assert!(items.len() >= 3);
    for item in items {
        assert!(item["price"].as_str().unwrap().starts_with('€'));
        assert!(item["url"]
            .as_str()
            .unwrap()
            .starts_with("https://shop.example.com/archive/"));
        assert!(item["image"].as_str().unwrap().starts_with("https://img/"));
    }
}

#[tokio::test]
async fn test_generate_outfits_empty_inventory_is_not_an_error() {
    let server = create_test_server(vec![]);

    let response = server.post("/outfits").json(&json!({})).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["outfits"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_generate_outfits_honors_anchor() {
    let server = create_test_server(technical_inventory());

    let response = server
        .post("/outfits")
        .json(&json!({ "anchorItemId": "shell" }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let outfits = body["outfits"].as_array().unwrap();
    assert!(!outfits.is_empty());
    for outfit in outfits {
        let ids: Vec<&str> = outfit["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["id"].as_str().unwrap())
            .collect();
        assert!(ids.contains(&"shell"));
    }
}

#[tokio::test]
async fn test_generate_outfits_couple_mode() {
    let mut items = vec![
        raw("m-shell", "Men's Beta Shell", "Arc'teryx", "Jackets", 320.0),
        raw("m-fleece", "Men's Micro Fleece", "Patagonia", "Fleece", 140.0),
        raw("m-shoes", "Men's XT-6 Shoe", "Salomon", "Sneakers", 170.0),
        raw("f-shell", "Women's Theta Shell", "Arc'teryx", "Jackets", 340.0),
        raw("f-fleece", "Women's Snap Fleece", "Patagonia", "Fleece", 130.0),
        raw("f-shoes", "Women's Speedcross Shoe", "Salomon", "Sneakers", 160.0),
    ];
    items.push(raw("u-pants", "Alpha Trail Pant", "Arc'teryx", "Pants", 190.0));
    let server = create_test_server(items);

    let response = server
        .post("/outfits")
        .json(&json!({ "gender": "couple" }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let pairs = body["pairs"].as_array().unwrap();
    assert!(!pairs.is_empty());
    assert!(pairs.len() <= 5);
    for pair in pairs {
        assert_eq!(pair["isCouple"], true);
        assert_eq!(
            pair["male"]["archetypeId"].as_str().unwrap(),
            pair["female"]["archetypeId"].as_str().unwrap()
        );
    }
}
