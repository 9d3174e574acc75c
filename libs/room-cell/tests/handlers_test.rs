use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use room_cell::handlers::*;
use room_cell::models::*;
use shared_config::AppConfig;
use shared_models::error::AppError;

fn config_for(mock_server: &MockServer) -> AppConfig {
    AppConfig {
        database_rest_url: mock_server.uri(),
        database_api_key: "test-api-key".to_string(),
    }
}

#[tokio::test]
async fn test_list_rooms_empty_returns_no_content() {
    let mock_server = MockServer::start().await;
    let config = Arc::new(config_for(&mock_server));

    Mock::given(method("GET"))
        .and(path("/rest/v1/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let result = list_rooms(State(config)).await;

    assert!(result.is_ok(), "Expected list_rooms to succeed, but got error: {:?}", result.err());
    assert_eq!(result.unwrap().status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_list_rooms_returns_two() {
    let mock_server = MockServer::start().await;
    let config = Arc::new(config_for(&mock_server));

    Mock::given(method("GET"))
        .and(path("/rest/v1/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "room_name": "Cardiology" },
            { "room_name": "Dermatology" }
        ])))
        .mount(&mock_server)
        .await;

    let result = list_rooms(State(config)).await;

    assert!(result.is_ok(), "Expected list_rooms to succeed, but got error: {:?}", result.err());
    assert_eq!(result.unwrap().status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_room_by_name() {
    let mock_server = MockServer::start().await;
    let config = Arc::new(config_for(&mock_server));

    Mock::given(method("GET"))
        .and(path("/rest/v1/rooms"))
        .and(query_param("room_name", "eq.Dermatology"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "room_name": "Dermatology" }
        ])))
        .mount(&mock_server)
        .await;

    let result = get_room(State(config), Path("Dermatology".to_string())).await;

    assert!(result.is_ok(), "Expected get_room to succeed, but got error: {:?}", result.err());
    assert_eq!(result.unwrap().0["room_name"], "Dermatology");
}

#[tokio::test]
async fn test_get_room_with_space_in_name() {
    let mock_server = MockServer::start().await;
    let config = Arc::new(config_for(&mock_server));

    // The repository percent-encodes the name in the filter value.
    Mock::given(method("GET"))
        .and(path("/rest/v1/rooms"))
        .and(query_param("room_name", "eq.Operating Theatre 1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "room_name": "Operating Theatre 1" }
        ])))
        .mount(&mock_server)
        .await;

    let result = get_room(State(config), Path("Operating Theatre 1".to_string())).await;

    assert!(result.is_ok(), "Expected get_room to succeed, but got error: {:?}", result.err());
    assert_eq!(result.unwrap().0["room_name"], "Operating Theatre 1");
}

#[tokio::test]
async fn test_get_room_not_found() {
    let mock_server = MockServer::start().await;
    let config = Arc::new(config_for(&mock_server));

    Mock::given(method("GET"))
        .and(path("/rest/v1/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let result = get_room(State(config), Path("Cardiology".to_string())).await;

    assert_matches!(result, Err(AppError::NotFound(_)));
}

#[tokio::test]
async fn test_create_room_returns_created() {
    let mock_server = MockServer::start().await;
    let config = Arc::new(config_for(&mock_server));

    Mock::given(method("POST"))
        .and(path("/rest/v1/rooms"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            { "room_name": "Cardiology" }
        ])))
        .mount(&mock_server)
        .await;

    let request = CreateRoomRequest {
        room_name: "Cardiology".to_string(),
    };

    let result = create_room(State(config), Json(request)).await;

    assert!(result.is_ok(), "Expected create_room to succeed, but got error: {:?}", result.err());
    let (status, response) = result.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response.0["room_name"], "Cardiology");
}

#[tokio::test]
async fn test_create_room_rejects_blank_name() {
    let config = Arc::new(AppConfig {
        database_rest_url: "http://localhost:1".to_string(),
        database_api_key: "test-api-key".to_string(),
    });

    let request = CreateRoomRequest {
        room_name: " ".to_string(),
    };

    let result = create_room(State(config), Json(request)).await;

    assert_matches!(result, Err(AppError::ValidationError(_)));
}

#[tokio::test]
async fn test_delete_room_by_name() {
    let mock_server = MockServer::start().await;
    let config = Arc::new(config_for(&mock_server));

    Mock::given(method("GET"))
        .and(path("/rest/v1/rooms"))
        .and(query_param("room_name", "eq.Dermatology"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "room_name": "Dermatology" }
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/rooms"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let result = delete_room(State(config), Path("Dermatology".to_string())).await;

    assert!(result.is_ok(), "Expected delete_room to succeed, but got error: {:?}", result.err());
    assert_eq!(result.unwrap().0["deleted"], "Dermatology");
}

#[tokio::test]
async fn test_delete_room_not_found() {
    let mock_server = MockServer::start().await;
    let config = Arc::new(config_for(&mock_server));

    Mock::given(method("GET"))
        .and(path("/rest/v1/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let result = delete_room(State(config), Path("Cardiology".to_string())).await;

    assert_matches!(result, Err(AppError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_all_rooms() {
    let mock_server = MockServer::start().await;
    let config = Arc::new(config_for(&mock_server));

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/rooms"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let result = delete_all_rooms(State(config)).await;

    assert!(result.is_ok(), "Expected delete_all_rooms to succeed, but got error: {:?}", result.err());
}

#[test]
fn test_room_equality_is_by_name() {
    assert_eq!(Room::new("Dermatology"), Room::new("Dermatology"));
    assert_ne!(Room::new("Dermatology"), Room::new("Cardiology"));
}
