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

use crate::models::{CreateDoctorRequest, UpdateDoctorRequest};
use crate::services::DoctorRepository;

#[axum::debug_handler]
pub async fn list_doctors(State(config): State<Arc<AppConfig>>) -> Result<Response, AppError> {
    let repository = DoctorRepository::new(&config);

    let doctors = repository.find_all().await.map_err(AppError::from)?;

    if doctors.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(json!(doctors)).into_response())
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(config): State<Arc<AppConfig>>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let repository = DoctorRepository::new(&config);

    let doctor = repository
        .find_by_id(doctor_id)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let repository = DoctorRepository::new(&config);

    let doctor = repository.create(request).await.map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json(json!(doctor))))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(config): State<Arc<AppConfig>>,
    Path(doctor_id): Path<i64>,
    Json(request): Json<UpdateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let repository = DoctorRepository::new(&config);

    let doctor = repository
        .update(doctor_id, request)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(config): State<Arc<AppConfig>>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let repository = DoctorRepository::new(&config);

    repository
        .delete_by_id(doctor_id)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!({ "deleted": doctor_id })))
}

#[axum::debug_handler]
pub async fn delete_all_doctors(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let repository = DoctorRepository::new(&config);

    repository.delete_all().await.map_err(AppError::from)?;

    Ok(Json(json!({ "deleted": "all" })))
}
