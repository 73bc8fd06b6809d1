//! Black-box tests for the item API.
//!
//! Every test drives the public router in-process; no network is needed.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use item_management::api::{create_router, AppState};
use item_management::catalog::ItemStore;

struct TestApp {
    router: Router,
}

impl TestApp {
    fn empty() -> Self {
        Self {
            router: create_router(AppState::new(ItemStore::new())),
        }
    }

    fn seeded() -> Self {
        Self {
            router: create_router(AppState::new(ItemStore::with_sample_data())),
        }
    }

    async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Option<Value>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        // Router is cheaply cloneable and shares the store through AppState.
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            None
        } else {
            serde_json::from_slice(&bytes).ok()
        };
        (status, value)
    }

    async fn item_count(&self) -> usize {
        let (_, body) = self.call(Method::GET, "/api/items", None).await;
        body.and_then(|v| v.as_array().map(Vec::len)).unwrap_or_default()
    }
}

#[tokio::test]
async fn create_get_delete_lifecycle() {
    let app = TestApp::empty();

    let desk = json!({"name": "Desk", "price": 150.0, "category": "Furniture", "quantity": 5});
    let (status, created) = app.call(Method::POST, "/api/items", Some(desk)).await;
    assert_eq!(status, StatusCode::CREATED);

    let created = created.unwrap();
    let id = created["id"].as_u64().unwrap();
    assert!(id > 0);
    assert_eq!(created["name"], json!("Desk"));
    assert_eq!(created["price"], json!(150.0));

    let (status, fetched) = app.call(Method::GET, &format!("/api/items/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched.unwrap(), created);

    let (status, body) = app.call(Method::DELETE, &format!("/api/items/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());

    let (status, _) = app.call(Method::GET, &format!("/api/items/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.call(Method::DELETE, &format!("/api/items/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_name_is_rejected_without_side_effects() {
    let app = TestApp::seeded();
    let before = app.item_count().await;

    let bad = json!({"name": "", "price": 10.0, "category": "Misc", "quantity": 1});
    let (status, body) = app.call(Method::POST, "/api/items", Some(bad)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.unwrap()["error"], json!("validation failed: name must not be blank"));
    assert_eq!(app.item_count().await, before);
}

#[tokio::test]
async fn ids_increase_and_are_never_reused() {
    let app = TestApp::empty();
    let body = json!({"name": "Pen", "price": 1.5, "category": "Office", "quantity": 10});

    let mut last = 0;
    for _ in 0..3 {
        let (_, created) = app.call(Method::POST, "/api/items", Some(body.clone())).await;
        let id = created.unwrap()["id"].as_u64().unwrap();
        assert!(id > last);
        last = id;
    }

    app.call(Method::DELETE, &format!("/api/items/{last}"), None).await;
    let (_, created) = app.call(Method::POST, "/api/items", Some(body)).await;
    assert!(created.unwrap()["id"].as_u64().unwrap() > last);
}

#[tokio::test]
async fn update_keeps_path_id() {
    let app = TestApp::seeded();

    let replacement = json!({
        "id": 500,
        "name": "Travel Mug",
        "description": "Insulated",
        "price": 18.0,
        "category": "Kitchen",
        "quantity": 40
    });
    let (status, updated) = app.call(Method::PUT, "/api/items/2", Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);

    let updated = updated.unwrap();
    assert_eq!(updated["id"], json!(2));
    assert_eq!(updated["description"], json!("Insulated"));

    let (status, _) = app.call(Method::GET, "/api/items/500", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn filters_match_ignoring_case() {
    let app = TestApp::seeded();

    let (status, body) = app.call(Method::GET, "/api/items/category/ELECTRONICS", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = body
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Laptop", "Wireless Mouse"]);

    let (status, body) = app.call(Method::GET, "/api/items/search?name=MUG", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()[0]["name"], json!("Coffee Mug"));

    let (status, _) = app.call(Method::GET, "/api/items/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_posts_receive_unique_ids() {
    let app = std::sync::Arc::new(TestApp::empty());

    let mut handles = Vec::new();
    for i in 0..32 {
        let app = std::sync::Arc::clone(&app);
        handles.push(tokio::spawn(async move {
            let body = json!({"name": format!("Item {i}"), "price": 1.0, "category": "Bulk", "quantity": i});
            let (status, created) = app.call(Method::POST, "/api/items", Some(body)).await;
            assert_eq!(status, StatusCode::CREATED);
            created.unwrap()["id"].as_u64().unwrap()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 32);
    assert_eq!(app.item_count().await, 32);
}
