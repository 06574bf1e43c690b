use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{Datelike, Local};
use resource_api::api::{self, AppState};
use resource_api::lifecycle::ResourceSystem;
use serde_json::{json, Value};
use std::io::Write;
use tower::ServiceExt;

fn app_with_seed(system: &ResourceSystem, menu_seed: &std::path::Path) -> Router {
    api::router(AppState::new(
        system.vehicle_client.clone(),
        system.menu_client.clone(),
        menu_seed,
    ))
}

fn app(system: &ResourceSystem) -> Router {
    app_with_seed(system, std::path::Path::new("data/default-menu.json"))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn create_car(app: &Router, year: i32) -> Value {
    let response = send(
        app,
        Method::POST,
        "/api/cars",
        Some(json!({"make": "Toyota", "model": "Corolla", "year": year})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await
}

#[tokio::test]
async fn test_create_returns_location_and_entity() {
    let system = ResourceSystem::new(8);
    let app = app(&system);

    let response = send(
        &app,
        Method::POST,
        "/api/cars",
        Some(json!({"make": "Toyota", "model": "Corolla", "year": 2020})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();
    let car = json_body(response).await;

    assert_eq!(location, format!("/api/cars/{}", car["id"].as_str().unwrap()));
    assert_eq!(car["vin"], "1M8GDM9A_1000");
    assert_eq!(car["year"], 2020);
    assert!(car["addedDate"].is_string());

    let response = send(&app, Method::GET, &location, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, car);
}

#[tokio::test]
async fn test_list_is_empty_then_in_creation_order() {
    let system = ResourceSystem::new(8);
    let app = app(&system);

    let response = send(&app, Method::GET, "/api/cars", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));

    let first = create_car(&app, 2001).await;
    let second = create_car(&app, 2002).await;
    let third = create_car(&app, 2003).await;

    let uri = format!("/api/cars/{}", second["id"].as_str().unwrap());
    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::GET, "/api/cars", None).await;
    assert_eq!(json_body(response).await, json!([first, third]));
}

#[tokio::test]
async fn test_invalid_year_is_bad_request() {
    let system = ResourceSystem::new(8);
    let app = app(&system);

    let response = send(
        &app,
        Method::POST,
        "/api/cars",
        Some(json!({"make": "Ford", "model": "T", "year": 1700})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"error": {"code": 400, "message": "Invalid year"}})
    );

    let next_year = Local::now().year() + 1;
    create_car(&app, next_year).await;
    let response = send(
        &app,
        Method::POST,
        "/api/cars",
        Some(json!({"make": "Ford", "model": "Future", "year": next_year + 1})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, Method::GET, "/api/cars", None).await;
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_replace_with_empty_vin_keeps_vin() {
    let system = ResourceSystem::new(8);
    let app = app(&system);

    let car = create_car(&app, 2020).await;
    let uri = format!("/api/cars/{}", car["id"].as_str().unwrap());

    let response = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"make": "Toyota", "model": "Corolla", "year": 2021, "vin": ""})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let stored = json_body(send(&app, Method::GET, &uri, None).await).await;
    assert_eq!(stored["year"], 2021);
    assert_eq!(stored["vin"], car["vin"]);
    assert_eq!(stored["id"], car["id"]);
    assert_eq!(stored["addedDate"], car["addedDate"]);
}

#[tokio::test]
async fn test_patch_applies_only_supplied_fields() {
    let system = ResourceSystem::new(8);
    let app = app(&system);

    let car = create_car(&app, 2020).await;
    let uri = format!("/api/cars/{}", car["id"].as_str().unwrap());

    let response = send(
        &app,
        Method::PATCH,
        &uri,
        Some(json!({"model": "Camry", "make": ""})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let stored = json_body(send(&app, Method::GET, &uri, None).await).await;
    assert_eq!(stored["make"], "Toyota");
    assert_eq!(stored["model"], "Camry");
    assert_eq!(stored["year"], 2020);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let system = ResourceSystem::new(8);
    let app = app(&system);
    let uri = format!("/api/cars/{}", uuid::Uuid::new_v4());

    let response = send(&app, Method::GET, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"]["code"], 404);

    let response = send(&app, Method::PATCH, &uri, Some(json!({"year": 2000}))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"make": "A", "model": "B", "year": 2000})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let system = ResourceSystem::new(8);
    let app = app(&system);

    let car = create_car(&app, 2020).await;
    let uri = format!("/api/cars/{}", car["id"].as_str().unwrap());

    assert_eq!(
        send(&app, Method::DELETE, &uri, None).await.status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        send(&app, Method::DELETE, &uri, None).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_malformed_requests_are_rejected() {
    let system = ResourceSystem::new(8);
    let app = app(&system);

    let response = send(&app, Method::GET, "/api/cars/not-a-uuid", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, Method::POST, "/api/cars", Some(json!({"make": "Ford"}))).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = send(&app, Method::GET, "/api/cars", None).await;
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn test_head_and_options() {
    let system = ResourceSystem::new(8);
    let app = app(&system);

    for uri in ["/api/cars", "/api/dango"] {
        let response = send(&app, Method::HEAD, uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());

        let response = send(&app, Method::OPTIONS, uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ALLOW],
            "GET, HEAD, POST, PUT, PATCH, DELETE, OPTIONS"
        );
    }
}

#[tokio::test]
async fn test_dango_crud() {
    let system = ResourceSystem::new(8);
    let app = app(&system);

    let response = send(
        &app,
        Method::POST,
        "/api/dango",
        Some(json!({
            "flavor": "Mitarashi",
            "glazeType": "Sweet soy",
            "skewerCount": 3,
            "isNewArrival": true
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let item = json_body(response).await;
    let sku = item["sku"].as_str().unwrap();
    assert!(sku.starts_with("DNG-"));
    assert!(sku.ends_with("-1000"));
    assert_eq!(item["isNewArrival"], true);

    let uri = format!("/api/dango/{}", item["id"].as_str().unwrap());
    let response = send(&app, Method::PATCH, &uri, Some(json!({"skewerCount": 0}))).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let stored = json_body(send(&app, Method::GET, &uri, None).await).await;
    assert_eq!(stored["skewerCount"], 0);
    assert_eq!(stored["sku"], item["sku"]);

    let response = send(
        &app,
        Method::POST,
        "/api/dango",
        Some(json!({
            "flavor": "Hanami",
            "glazeType": "None",
            "skewerCount": 0,
            "isNewArrival": false
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"]["message"],
        "Invalid skewer count"
    );
}

#[tokio::test]
async fn test_initialize_menu_is_idempotent() {
    let system = ResourceSystem::new(8);
    let app = app(&system);

    for _ in 0..2 {
        let response = send(&app, Method::POST, "/api/dango/initialize", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!("Menu initialized"));
    }

    let menu = json_body(send(&app, Method::GET, "/api/dango", None).await).await;
    let seeded = resource_api::seed::load_menu(std::path::Path::new("data/default-menu.json"))
        .await
        .unwrap();
    assert_eq!(menu.as_array().unwrap().len(), seeded.len());
    assert_eq!(menu[0]["flavor"], seeded[0].flavor.as_str());
}

#[tokio::test]
async fn test_initialize_menu_with_unreadable_fixture() {
    let system = ResourceSystem::new(8);
    let mut fixture = tempfile::NamedTempFile::new().unwrap();
    fixture.write_all(b"not json").unwrap();
    let app = app_with_seed(&system, fixture.path());

    let response = send(&app, Method::POST, "/api/dango/initialize", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"error": {"code": 400, "message": "Unable to read default menu"}})
    );
}
