use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::postgrest::PostgrestClient;

use crate::models::{Appointment, AppointmentError, CreateAppointmentRequest};

pub struct AppointmentRepository {
    store: PostgrestClient,
}

impl AppointmentRepository {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: PostgrestClient::new(config),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Fetching all appointments");

        let result: Vec<Value> = self
            .store
            .request(Method::GET, "/rest/v1/appointments?order=starts_at.asc", None)
            .await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        Self::parse_many(result)
    }

    pub async fn find_by_id(&self, appointment_id: i64) -> Result<Appointment, AppointmentError> {
        debug!("Fetching appointment: {}", appointment_id);

        let path = format!("/rest/v1/appointments?id=eq.{}", appointment_id);
        let result: Vec<Value> = self
            .store
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(AppointmentError::NotFound);
        }

        serde_json::from_value(result[0].clone()).map_err(|e| {
            AppointmentError::DatabaseError(format!("Failed to parse appointment: {}", e))
        })
    }

    /// All appointments booked in the given room, ordered by start time. The
    /// room is stored as an embedded object, so the filter goes through the
    /// datastore's JSON operator.
    pub async fn find_by_room(&self, room_name: &str) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Fetching appointments for room: {}", room_name);

        let path = format!(
            "/rest/v1/appointments?room->>room_name=eq.{}&order=starts_at.asc",
            urlencoding::encode(room_name)
        );
        let result: Vec<Value> = self
            .store
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        Self::parse_many(result)
    }

    pub async fn create(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!(
            "Creating appointment in room {} from {} to {}",
            request.room.room_name, request.starts_at, request.finishes_at
        );

        let appointment_data = json!({
            "patient": request.patient,
            "doctor": request.doctor,
            "room": request.room,
            "starts_at": request.starts_at.to_rfc3339(),
            "finishes_at": request.finishes_at.to_rfc3339(),
        });

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Prefer",
            reqwest::header::HeaderValue::from_static("return=representation"),
        );

        let result: Vec<Value> = self
            .store
            .request_with_headers(
                Method::POST,
                "/rest/v1/appointments",
                Some(appointment_data),
                Some(headers),
            )
            .await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(AppointmentError::DatabaseError(
                "Failed to create appointment".to_string(),
            ));
        }

        let appointment: Appointment = serde_json::from_value(result[0].clone()).map_err(|e| {
            AppointmentError::DatabaseError(format!("Failed to parse appointment: {}", e))
        })?;
        debug!("Appointment created with id: {}", appointment.id);

        Ok(appointment)
    }

    pub async fn reschedule(
        &self,
        appointment_id: i64,
        starts_at: DateTime<Utc>,
        finishes_at: DateTime<Utc>,
    ) -> Result<Appointment, AppointmentError> {
        debug!(
            "Rescheduling appointment {} to {} - {}",
            appointment_id, starts_at, finishes_at
        );

        let update_data = json!({
            "starts_at": starts_at.to_rfc3339(),
            "finishes_at": finishes_at.to_rfc3339(),
        });

        let path = format!("/rest/v1/appointments?id=eq.{}", appointment_id);
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Prefer",
            reqwest::header::HeaderValue::from_static("return=representation"),
        );

        let result: Vec<Value> = self
            .store
            .request_with_headers(Method::PATCH, &path, Some(update_data), Some(headers))
            .await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(AppointmentError::NotFound);
        }

        serde_json::from_value(result[0].clone()).map_err(|e| {
            AppointmentError::DatabaseError(format!("Failed to parse appointment: {}", e))
        })
    }

    pub async fn delete_by_id(&self, appointment_id: i64) -> Result<(), AppointmentError> {
        debug!("Deleting appointment: {}", appointment_id);

        // Look the row up first so a missing id maps to 404.
        self.find_by_id(appointment_id).await?;

        let path = format!("/rest/v1/appointments?id=eq.{}", appointment_id);
        self.store
            .execute(Method::DELETE, &path)
            .await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))
    }

    pub async fn delete_all(&self) -> Result<(), AppointmentError> {
        debug!("Deleting all appointments");

        self.store
            .execute(Method::DELETE, "/rest/v1/appointments?id=gte.0")
            .await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))
    }

    fn parse_many(result: Vec<Value>) -> Result<Vec<Appointment>, AppointmentError> {
        result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                AppointmentError::DatabaseError(format!("Failed to parse appointments: {}", e))
            })
    }
}
