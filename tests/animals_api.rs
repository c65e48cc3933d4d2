use animal_api::{build_router, Animal, AppState, MemoryAnimalStore, SeededPicker, ServiceConfig};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn animal(id: i32, species: &str, name: &str, age: i32) -> Animal {
    Animal {
        animal_id: id,
        species: species.into(),
        name: name.into(),
        age,
    }
}

fn app_with(animals: Vec<Animal>) -> Router {
    let state = AppState::new(
        Arc::new(MemoryAnimalStore::with_animals(animals)),
        Arc::new(SeededPicker::seeded(1)),
        "/api/v2",
    );
    build_router(state, &ServiceConfig::default())
}

fn zoo() -> Vec<Animal> {
    vec![
        animal(1, "cat", "Tom", 2),
        animal(2, "dog", "Rex", 5),
        animal(3, "cat", "Kit", 7),
        animal(4, "owl", "Hoot", 1),
        animal(5, "dog", "Fido", 9),
        animal(6, "cat", "Tom", 11),
        animal(7, "cat", "Zoe", 4),
    ]
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn list_filters_by_species() {
    let app = app_with(vec![animal(1, "cat", "Tom", 2), animal(2, "dog", "Rex", 5)]);
    let (status, _, body) = send(&app, Method::GET, "/api/v2/animals?species=cat", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_of(&body),
        json!({
            "animals": [{"animalId": 1, "species": "cat", "name": "Tom", "age": 2}],
            "currentPage": 1,
            "pageItems": 1,
            "pageSize": 3
        })
    );
}

#[tokio::test]
async fn list_combines_filters_and_paginates() {
    let app = app_with(zoo());
    let (_, _, body) = send(&app, Method::GET, "/api/v2/animals?species=cat&minimumAge=4", None).await;
    let page = json_of(&body);
    assert_eq!(page["pageItems"], 3);
    let ids: Vec<i64> = page["animals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["animalId"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 6, 7]);

    let (_, _, body) = send(&app, Method::GET, "/api/v2/animals?species=cat&minimumAge=4&page=2", None).await;
    let page = json_of(&body);
    assert_eq!(page["currentPage"], 2);
    assert_eq!(page["pageItems"], 3);
    assert_eq!(page["animals"].as_array().unwrap().len(), 0);

    let (_, _, body) = send(&app, Method::GET, "/api/v2/animals?name=Tom", None).await;
    let page = json_of(&body);
    for a in page["animals"].as_array().unwrap() {
        assert_eq!(a["name"], "Tom");
    }
    assert_eq!(page["pageItems"], 2);
}

#[tokio::test]
async fn list_pages_over_seven_records() {
    let app = app_with(zoo());
    let (_, _, body) = send(&app, Method::GET, "/api/v2/animals?page=2", None).await;
    let ids: Vec<i64> = json_of(&body)["animals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["animalId"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 5, 6]);

    let (_, _, body) = send(&app, Method::GET, "/api/v2/animals?page=3", None).await;
    assert_eq!(json_of(&body)["animals"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn list_rejects_page_zero() {
    let app = app_with(zoo());
    let (status, _, body) = send(&app, Method::GET, "/api/v2/animals?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_of(&body)["error"]["code"], "bad_request");
}

#[tokio::test]
async fn get_by_id_and_missing_id() {
    let app = app_with(zoo());
    let (status, _, body) = send(&app, Method::GET, "/api/v2/animals/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["animalId"], 3);

    let (status, _, body) = send(&app, Method::GET, "/api/v2/animals/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn create_returns_location_and_is_readable() {
    let app = app_with(zoo());
    let (status, headers, body) = send(
        &app,
        Method::POST,
        "/api/v2/animals",
        Some(json!({"animalId": 1, "species": "fox", "name": "Red", "age": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created = json_of(&body);
    assert_eq!(created["animalId"], 8);
    assert_eq!(headers[header::LOCATION], "/api/v2/animals/8");

    let (status, _, body) = send(&app, Method::GET, "/api/v2/animals/8", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({"animalId": 8, "species": "fox", "name": "Red", "age": 3}));
}

#[tokio::test]
async fn create_without_required_fields_is_unprocessable() {
    let app = app_with(Vec::new());
    let (status, _, body) = send(&app, Method::POST, "/api/v2/animals", Some(json!({"species": "fox"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_of(&body)["error"]["code"], "validation_error");
}

#[tokio::test]
async fn negative_age_is_rejected_and_not_stored() {
    let app = app_with(zoo());
    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/v2/animals",
        Some(json!({"species": "fox", "name": "Red", "age": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_of(&body)["error"]["code"], "validation_error");

    let (status, _, _) = send(
        &app,
        Method::PUT,
        "/api/v2/animals/2",
        Some(json!({"animalId": 2, "species": "dog", "name": "Rex", "age": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, _, body) = send(&app, Method::GET, "/api/v2/animals", None).await;
    assert_eq!(json_of(&body)["pageItems"], 7);
    let (_, _, body) = send(&app, Method::GET, "/api/v2/animals/2", None).await;
    assert_eq!(json_of(&body)["age"], 5);
}

#[tokio::test]
async fn update_mismatch_missing_and_success() {
    let app = app_with(zoo());
    let (status, _, _) = send(
        &app,
        Method::PUT,
        "/api/v2/animals/2",
        Some(json!({"animalId": 3, "species": "dog", "name": "Max", "age": 6})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, _, body) = send(&app, Method::GET, "/api/v2/animals/2", None).await;
    assert_eq!(json_of(&body)["name"], "Rex");

    let (status, _, _) = send(
        &app,
        Method::PUT,
        "/api/v2/animals/42",
        Some(json!({"animalId": 42, "species": "dog", "name": "Max", "age": 6})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, body) = send(
        &app,
        Method::PUT,
        "/api/v2/animals/2",
        Some(json!({"animalId": 2, "species": "dog", "name": "Max", "age": 6})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    let (_, _, body) = send(&app, Method::GET, "/api/v2/animals/2", None).await;
    assert_eq!(json_of(&body), json!({"animalId": 2, "species": "dog", "name": "Max", "age": 6}));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = app_with(zoo());
    let (status, _, _) = send(&app, Method::DELETE, "/api/v2/animals/5", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _, _) = send(&app, Method::GET, "/api/v2/animals/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(&app, Method::DELETE, "/api/v2/animals/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn random_returns_a_stored_animal() {
    let app = app_with(zoo());
    for _ in 0..10 {
        let (status, _, body) = send(&app, Method::GET, "/api/v2/animals/random", None).await;
        assert_eq!(status, StatusCode::OK);
        let id = json_of(&body)["animalId"].as_i64().unwrap();
        assert!((1..=7).contains(&id));
    }
}

#[tokio::test]
async fn random_on_empty_store_reports_empty_collection() {
    let app = app_with(Vec::new());
    let (status, _, body) = send(&app, Method::GET, "/api/v2/animals/random", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_of(&body)["error"]["code"], "empty_collection");
}

#[tokio::test]
async fn health_ready_and_docs() {
    let app = app_with(Vec::new());
    let (status, _, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["status"], "ok");

    let (status, _, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["database"], "ok");

    let (status, _, body) = send(&app, Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["name"], "animal-api");
    let (status, _, _) = send(&app, Method::GET, "/info", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json_of(&body)["paths"]["/animals/{id}"].is_object());
}

#[tokio::test]
async fn cors_preflight_allows_reads() {
    let app = app_with(Vec::new());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v2/animals")
        .header(header::ORIGIN, "http://example.test")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
