use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::postgrest::PostgrestClient;

use crate::models::{CreateDoctorRequest, Doctor, DoctorError, UpdateDoctorRequest};

pub struct DoctorRepository {
    store: PostgrestClient,
}

impl DoctorRepository {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: PostgrestClient::new(config),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Doctor>, DoctorError> {
        debug!("Fetching all doctors");

        let result: Vec<Value> = self
            .store
            .request(Method::GET, "/rest/v1/doctors?order=id.asc", None)
            .await
            .map_err(|e| DoctorError::DatabaseError(e.to_string()))?;

        let doctors: Vec<Doctor> = result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DoctorError::DatabaseError(format!("Failed to parse doctors: {}", e)))?;

        Ok(doctors)
    }

    pub async fn find_by_id(&self, doctor_id: i64) -> Result<Doctor, DoctorError> {
        debug!("Fetching doctor: {}", doctor_id);

        let path = format!("/rest/v1/doctors?id=eq.{}", doctor_id);
        let result: Vec<Value> = self
            .store
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| DoctorError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(DoctorError::NotFound);
        }

        serde_json::from_value(result[0].clone())
            .map_err(|e| DoctorError::DatabaseError(format!("Failed to parse doctor: {}", e)))
    }

    pub async fn create(&self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        debug!("Creating doctor: {}", request.email);

        if request.first_name.trim().is_empty() || request.last_name.trim().is_empty() {
            return Err(DoctorError::ValidationError(
                "first_name and last_name are required".to_string(),
            ));
        }
        if request.email.trim().is_empty() {
            return Err(DoctorError::ValidationError("email is required".to_string()));
        }

        let doctor_data = json!({
            "first_name": request.first_name,
            "last_name": request.last_name,
            "age": request.age,
            "email": request.email,
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
                "/rest/v1/doctors",
                Some(doctor_data),
                Some(headers),
            )
            .await
            .map_err(|e| DoctorError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(DoctorError::DatabaseError(
                "Failed to create doctor".to_string(),
            ));
        }

        let doctor: Doctor = serde_json::from_value(result[0].clone())
            .map_err(|e| DoctorError::DatabaseError(format!("Failed to parse doctor: {}", e)))?;
        debug!("Doctor created with id: {}", doctor.id);

        Ok(doctor)
    }

    pub async fn update(
        &self,
        doctor_id: i64,
        request: UpdateDoctorRequest,
    ) -> Result<Doctor, DoctorError> {
        debug!("Updating doctor: {}", doctor_id);

        let mut update_data = serde_json::Map::new();

        if let Some(first_name) = request.first_name {
            update_data.insert("first_name".to_string(), json!(first_name));
        }
        if let Some(last_name) = request.last_name {
            update_data.insert("last_name".to_string(), json!(last_name));
        }
        if let Some(age) = request.age {
            update_data.insert("age".to_string(), json!(age));
        }
        if let Some(email) = request.email {
            update_data.insert("email".to_string(), json!(email));
        }

        // The datastore rejects an empty PATCH body; with nothing to change
        // this is just a read.
        if update_data.is_empty() {
            return self.find_by_id(doctor_id).await;
        }

        let path = format!("/rest/v1/doctors?id=eq.{}", doctor_id);
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Prefer",
            reqwest::header::HeaderValue::from_static("return=representation"),
        );

        let result: Vec<Value> = self
            .store
            .request_with_headers(
                Method::PATCH,
                &path,
                Some(Value::Object(update_data)),
                Some(headers),
            )
            .await
            .map_err(|e| DoctorError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(DoctorError::NotFound);
        }

        serde_json::from_value(result[0].clone())
            .map_err(|e| DoctorError::DatabaseError(format!("Failed to parse doctor: {}", e)))
    }

    pub async fn delete_by_id(&self, doctor_id: i64) -> Result<(), DoctorError> {
        debug!("Deleting doctor: {}", doctor_id);

        // Look the row up first so a missing id maps to 404.
        self.find_by_id(doctor_id).await?;

        let path = format!("/rest/v1/doctors?id=eq.{}", doctor_id);
        self.store
            .execute(Method::DELETE, &path)
            .await
            .map_err(|e| DoctorError::DatabaseError(e.to_string()))
    }

    pub async fn delete_all(&self) -> Result<(), DoctorError> {
        debug!("Deleting all doctors");

        self.store
            .execute(Method::DELETE, "/rest/v1/doctors?id=gte.0")
            .await
            .map_err(|e| DoctorError::DatabaseError(e.to_string()))
    }
}
