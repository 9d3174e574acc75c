use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::CreateRoomRequest;
use crate::services::RoomRepository;

#[axum::debug_handler]
pub async fn list_rooms(State(config): State<Arc<AppConfig>>) -> Result<Response, AppError> {
    let repository = RoomRepository::new(&config);

    let rooms = repository.find_all().await.map_err(AppError::from)?;

    if rooms.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(json!(rooms)).into_response())
}

#[axum::debug_handler]
pub async fn get_room(
    State(config): State<Arc<AppConfig>>,
    Path(room_name): Path<String>,
) -> Result<Json<Value>, AppError> {
    let repository = RoomRepository::new(&config);

    let room = repository
        .find_by_name(&room_name)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!(room)))
}

#[axum::debug_handler]
pub async fn create_room(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let repository = RoomRepository::new(&config);

    let room = repository.create(request).await.map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json(json!(room))))
}

#[axum::debug_handler]
pub async fn delete_room(
    State(config): State<Arc<AppConfig>>,
    Path(room_name): Path<String>,
) -> Result<Json<Value>, AppError> {
    let repository = RoomRepository::new(&config);

    repository
        .delete_by_name(&room_name)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!({ "deleted": room_name })))
}

#[axum::debug_handler]
pub async fn delete_all_rooms(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let repository = RoomRepository::new(&config);

    repository.delete_all().await.map_err(AppError::from)?;

    Ok(Json(json!({ "deleted": "all" })))
}
