//! Handler tests for the Accounts domain
//!
//! The router runs against the in-memory repository, so these cover request
//! parsing, status codes and error bodies without a database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_accounts::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(AccountService::new(InMemoryAccountRepository::new()))
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> Account {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_account_returns_201_normalized() {
    let app = app();

    let account = create(
        &app,
        json!({ "firstName": " Jane ", "lastName": "Doe", "email": "JANE@example.com" }),
    )
    .await;

    assert_eq!(account.first_name, "Jane");
    assert_eq!(account.email, "jane@example.com");
    assert_eq!(account.phone_number, None);
}

#[tokio::test]
async fn test_create_account_response_shape() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "firstName": "Jane", "lastName": "Doe", "email": "jane@example.com", "city": "Lisbon" }),
        ))
        .await
        .unwrap();

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["city"], "Lisbon");
    assert!(body["phoneNumber"].is_null());
    assert!(body["id"].is_string());
    assert!(body["dateCreated"].is_string());
}

#[tokio::test]
async fn test_create_account_missing_field_returns_400() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "firstName": "Jane", "email": "jane@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "lastName is required");
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_account_null_field_returns_400() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "firstName": null, "lastName": "Doe", "email": "jane@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "firstName is required");
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_account_duplicate_email_returns_400() {
    let app = app();
    create(
        &app,
        json!({ "firstName": "Jane", "lastName": "Doe", "email": "jane@example.com" }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "firstName": "Janet", "lastName": "Doe", "email": " Jane@Example.com " }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Account with this email already exists");
    assert_eq!(body["error"], "CONFLICT");

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    let accounts: Vec<Account> = json_body(response.into_body()).await;
    assert_eq!(accounts.len(), 1);
}

#[tokio::test]
async fn test_create_account_overlong_field_returns_400() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "firstName": "x".repeat(256), "lastName": "Doe", "email": "jane@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_accounts_returns_200() {
    let app = app();
    create(&app, json!({ "firstName": "A", "lastName": "One", "email": "a@example.com" })).await;
    create(&app, json!({ "firstName": "B", "lastName": "Two", "email": "b@example.com" })).await;

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let accounts: Vec<Account> = json_body(response.into_body()).await;
    let emails: Vec<&str> = accounts.iter().map(|a| a.email.as_str()).collect();
    assert_eq!(emails, vec!["a@example.com", "b@example.com"]);
}

#[tokio::test]
async fn test_get_account_found_and_missing() {
    let app = app();
    let account = create(
        &app,
        json!({ "firstName": "Jane", "lastName": "Doe", "email": "jane@example.com" }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/{}", account.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Account = json_body(response.into_body()).await;
    assert_eq!(fetched, account);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/{}", uuid::Uuid::now_v7())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Account not found");

    let response = app
        .oneshot(empty_request("GET", "/not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_id_returns_400() {
    let response = app().oneshot(empty_request("GET", "/%20")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "id is required");
}

#[tokio::test]
async fn test_update_account_merges_fields() {
    let app = app();
    let account = create(
        &app,
        json!({ "firstName": "Jane", "lastName": "Doe", "email": "jane@example.com", "city": "Lisbon" }),
    )
    .await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", account.id),
            json!({ "phoneNumber": "555-0100", "firstName": 7, "city": null }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Account = json_body(response.into_body()).await;
    assert_eq!(updated.phone_number.as_deref(), Some("555-0100"));
    assert_eq!(updated.first_name, "Jane");
    assert_eq!(updated.city.as_deref(), Some("Lisbon"));
    assert_eq!(updated.date_created, account.date_created);
}

#[tokio::test]
async fn test_update_account_missing_returns_404() {
    let response = app()
        .oneshot(json_request(
            "PUT",
            &format!("/{}", uuid::Uuid::now_v7()),
            json!({ "firstName": "X" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_account_to_taken_email_returns_400() {
    let app = app();
    create(&app, json!({ "firstName": "A", "lastName": "One", "email": "a@example.com" })).await;
    let b = create(&app, json!({ "firstName": "B", "lastName": "Two", "email": "b@example.com" })).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", b.id),
            json!({ "email": "A@EXAMPLE.COM" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Account with this email already exists");
}

#[tokio::test]
async fn test_delete_account_returns_204_then_404() {
    let app = app();
    let account = create(
        &app,
        json!({ "firstName": "Jane", "lastName": "Doe", "email": "jane@example.com" }),
    )
    .await;
    let uri = format!("/{}", account.id);

    let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from("{\"firstName\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");
}
