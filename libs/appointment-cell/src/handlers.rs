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

use crate::models::{AppointmentError, CreateAppointmentRequest, RescheduleAppointmentRequest};
use crate::services::{AppointmentRepository, ConflictDetectionService};

#[axum::debug_handler]
pub async fn list_appointments(State(config): State<Arc<AppConfig>>) -> Result<Response, AppError> {
    let repository = AppointmentRepository::new(&config);

    let appointments = repository.find_all().await.map_err(AppError::from)?;

    if appointments.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(json!(appointments)).into_response())
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(config): State<Arc<AppConfig>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let repository = AppointmentRepository::new(&config);

    let appointment = repository
        .find_by_id(appointment_id)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let repository = AppointmentRepository::new(&config);

    let candidate = request.to_appointment();
    if !candidate.has_valid_interval() {
        return Err(AppointmentError::InvalidTimeRange.into());
    }

    let conflict_service = ConflictDetectionService::new(&repository);
    if let Some(existing) = conflict_service.find_conflict(&candidate, None).await? {
        return Err(AppointmentError::Overlap {
            room_name: existing.room.room_name,
        }
        .into());
    }

    let appointment = repository.create(request).await.map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json(json!(appointment))))
}

#[axum::debug_handler]
pub async fn reschedule_appointment(
    State(config): State<Arc<AppConfig>>,
    Path(appointment_id): Path<i64>,
    Json(request): Json<RescheduleAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let repository = AppointmentRepository::new(&config);

    let mut candidate = repository
        .find_by_id(appointment_id)
        .await
        .map_err(AppError::from)?;
    candidate.starts_at = request.starts_at;
    candidate.finishes_at = request.finishes_at;

    if !candidate.has_valid_interval() {
        return Err(AppointmentError::InvalidTimeRange.into());
    }

    let conflict_service = ConflictDetectionService::new(&repository);
    if let Some(existing) = conflict_service
        .find_conflict(&candidate, Some(appointment_id))
        .await?
    {
        return Err(AppointmentError::Overlap {
            room_name: existing.room.room_name,
        }
        .into());
    }

    let appointment = repository
        .reschedule(appointment_id, request.starts_at, request.finishes_at)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(config): State<Arc<AppConfig>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let repository = AppointmentRepository::new(&config);

    repository
        .delete_by_id(appointment_id)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!({ "deleted": appointment_id })))
}

#[axum::debug_handler]
pub async fn delete_all_appointments(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let repository = AppointmentRepository::new(&config);

    repository.delete_all().await.map_err(AppError::from)?;

    Ok(Json(json!({ "deleted": "all" })))
}
