use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::postgrest::PostgrestClient;

use crate::models::{CreateRoomRequest, Room, RoomError};

pub struct RoomRepository {
    store: PostgrestClient,
}

impl RoomRepository {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: PostgrestClient::new(config),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Room>, RoomError> {
        debug!("Fetching all rooms");

        let result: Vec<Value> = self
            .store
            .request(Method::GET, "/rest/v1/rooms?order=room_name.asc", None)
            .await
            .map_err(|e| RoomError::DatabaseError(e.to_string()))?;

        let rooms: Vec<Room> = result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RoomError::DatabaseError(format!("Failed to parse rooms: {}", e)))?;

        Ok(rooms)
    }

    pub async fn find_by_name(&self, room_name: &str) -> Result<Room, RoomError> {
        debug!("Fetching room: {}", room_name);

        let path = format!(
            "/rest/v1/rooms?room_name=eq.{}",
            urlencoding::encode(room_name)
        );
        let result: Vec<Value> = self
            .store
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| RoomError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(RoomError::NotFound);
        }

        serde_json::from_value(result[0].clone())
            .map_err(|e| RoomError::DatabaseError(format!("Failed to parse room: {}", e)))
    }

    pub async fn create(&self, request: CreateRoomRequest) -> Result<Room, RoomError> {
        debug!("Creating room: {}", request.room_name);

        if request.room_name.trim().is_empty() {
            return Err(RoomError::ValidationError(
                "room_name is required".to_string(),
            ));
        }

        let room_data = json!({
            "room_name": request.room_name,
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
                "/rest/v1/rooms",
                Some(room_data),
                Some(headers),
            )
            .await
            .map_err(|e| RoomError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(RoomError::DatabaseError(
                "Failed to create room".to_string(),
            ));
        }

        serde_json::from_value(result[0].clone())
            .map_err(|e| RoomError::DatabaseError(format!("Failed to parse room: {}", e)))
    }

    pub async fn delete_by_name(&self, room_name: &str) -> Result<(), RoomError> {
        debug!("Deleting room: {}", room_name);

        // Look the row up first so a missing name maps to 404.
        self.find_by_name(room_name).await?;

        let path = format!(
            "/rest/v1/rooms?room_name=eq.{}",
            urlencoding::encode(room_name)
        );
        self.store
            .execute(Method::DELETE, &path)
            .await
            .map_err(|e| RoomError::DatabaseError(e.to_string()))
    }

    pub async fn delete_all(&self) -> Result<(), RoomError> {
        debug!("Deleting all rooms");

        self.store
            .execute(Method::DELETE, "/rest/v1/rooms?room_name=neq.")
            .await
            .map_err(|e| RoomError::DatabaseError(e.to_string()))
    }
}
