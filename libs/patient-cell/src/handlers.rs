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

use crate::models::{CreatePatientRequest, UpdatePatientRequest};
use crate::services::PatientRepository;

#[axum::debug_handler]
pub async fn list_patients(State(config): State<Arc<AppConfig>>) -> Result<Response, AppError> {
    let repository = PatientRepository::new(&config);

    let patients = repository.find_all().await.map_err(AppError::from)?;

    if patients.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(json!(patients)).into_response())
}

#[axum::debug_handler]
pub async fn get_patient(
    State(config): State<Arc<AppConfig>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let repository = PatientRepository::new(&config);

    let patient = repository
        .find_by_id(patient_id)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let repository = PatientRepository::new(&config);

    let patient = repository.create(request).await.map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json(json!(patient))))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(config): State<Arc<AppConfig>>,
    Path(patient_id): Path<i64>,
    Json(request): Json<UpdatePatientRequest>,
) -> Result<Json<Value>, AppError> {
    let repository = PatientRepository::new(&config);

    let patient = repository
        .update(patient_id, request)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(config): State<Arc<AppConfig>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let repository = PatientRepository::new(&config);

    repository
        .delete_by_id(patient_id)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!({ "deleted": patient_id })))
}

#[axum::debug_handler]
pub async fn delete_all_patients(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let repository = PatientRepository::new(&config);

    repository.delete_all().await.map_err(AppError::from)?;

    Ok(Json(json!({ "deleted": "all" })))
}
