use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

/// The room name is the identity: lookups and deletes are name-based, there is
/// no surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_name: String,
}

impl Room {
    pub fn new(room_name: impl Into<String>) -> Self {
        Self {
            room_name: room_name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub room_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum RoomError {
    #[error("Room not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RoomError> for AppError {
    fn from(err: RoomError) -> Self {
        match err {
            RoomError::NotFound => AppError::NotFound(err.to_string()),
            RoomError::ValidationError(msg) => AppError::ValidationError(msg),
            RoomError::DatabaseError(msg) => AppError::Database(msg),
        }
    }
}
