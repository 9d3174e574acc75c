use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use doctor_cell::models::Doctor;
use patient_cell::models::Patient;
use room_cell::models::Room;
use shared_models::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    /// Assigned by the datastore on insert; 0 until then.
    #[serde(default)]
    pub id: i64,
    pub patient: Patient,
    pub doctor: Doctor,
    pub room: Room,
    pub starts_at: DateTime<Utc>,
    pub finishes_at: DateTime<Utc>,
}

impl Appointment {
    /// An appointment must start strictly before it finishes.
    pub fn has_valid_interval(&self) -> bool {
        self.starts_at < self.finishes_at
    }

    /// Two appointments overlap iff they share a room and their closed time
    /// intervals `[starts_at, finishes_at]` intersect. Shared boundary
    /// instants count: one appointment starting exactly when the other
    /// finishes is an overlap. Different rooms never overlap.
    pub fn overlaps(&self, other: &Appointment) -> bool {
        if self.room != other.room {
            return false;
        }

        self.starts_at <= other.finishes_at && other.starts_at <= self.finishes_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient: Patient,
    pub doctor: Doctor,
    pub room: Room,
    pub starts_at: DateTime<Utc>,
    pub finishes_at: DateTime<Utc>,
}

impl CreateAppointmentRequest {
    /// Candidate entity for validation and conflict checking, before the
    /// datastore has assigned an id.
    pub fn to_appointment(&self) -> Appointment {
        Appointment {
            id: 0,
            patient: self.patient.clone(),
            doctor: self.doctor.clone(),
            room: self.room.clone(),
            starts_at: self.starts_at,
            finishes_at: self.finishes_at,
        }
    }
}

/// Reschedule payload: only the time bounds move; patient, doctor and room
/// stay as booked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleAppointmentRequest {
    pub starts_at: DateTime<Utc>,
    pub finishes_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Appointment must start before it finishes")]
    InvalidTimeRange,

    #[error("Appointment overlaps an existing booking in room {room_name}")]
    Overlap { room_name: String },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound => AppError::NotFound(err.to_string()),
            AppointmentError::InvalidTimeRange => AppError::BadRequest(err.to_string()),
            AppointmentError::Overlap { .. } => AppError::Conflict(err.to_string()),
            AppointmentError::DatabaseError(msg) => AppError::Database(msg),
        }
    }
}
