use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::postgrest::PostgrestClient;

use crate::models::{CreatePatientRequest, Patient, PatientError, UpdatePatientRequest};

pub struct PatientRepository {
    store: PostgrestClient,
}

impl PatientRepository {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: PostgrestClient::new(config),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Patient>, PatientError> {
        debug!("Fetching all patients");

        let result: Vec<Value> = self
            .store
            .request(Method::GET, "/rest/v1/patients?order=id.asc", None)
            .await
            .map_err(|e| PatientError::DatabaseError(e.to_string()))?;

        let patients: Vec<Patient> = result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| PatientError::DatabaseError(format!("Failed to parse patients: {}", e)))?;

        Ok(patients)
    }

    pub async fn find_by_id(&self, patient_id: i64) -> Result<Patient, PatientError> {
        debug!("Fetching patient: {}", patient_id);

        let path = format!("/rest/v1/patients?id=eq.{}", patient_id);
        let result: Vec<Value> = self
            .store
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| PatientError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(PatientError::NotFound);
        }

        serde_json::from_value(result[0].clone())
            .map_err(|e| PatientError::DatabaseError(format!("Failed to parse patient: {}", e)))
    }

    pub async fn create(&self, request: CreatePatientRequest) -> Result<Patient, PatientError> {
        debug!("Creating patient: {}", request.email);

        if request.first_name.trim().is_empty() || request.last_name.trim().is_empty() {
            return Err(PatientError::ValidationError(
                "first_name and last_name are required".to_string(),
            ));
        }
        if request.email.trim().is_empty() {
            return Err(PatientError::ValidationError("email is required".to_string()));
        }

        let patient_data = json!({
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
                "/rest/v1/patients",
                Some(patient_data),
                Some(headers),
            )
            .await
            .map_err(|e| PatientError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(PatientError::DatabaseError(
                "Failed to create patient".to_string(),
            ));
        }

        let patient: Patient = serde_json::from_value(result[0].clone())
            .map_err(|e| PatientError::DatabaseError(format!("Failed to parse patient: {}", e)))?;
        debug!("Patient created with id: {}", patient.id);

        Ok(patient)
    }

    pub async fn update(
        &self,
        patient_id: i64,
        request: UpdatePatientRequest,
    ) -> Result<Patient, PatientError> {
        debug!("Updating patient: {}", patient_id);

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
            return self.find_by_id(patient_id).await;
        }

        let path = format!("/rest/v1/patients?id=eq.{}", patient_id);
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
            .map_err(|e| PatientError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(PatientError::NotFound);
        }

        serde_json::from_value(result[0].clone())
            .map_err(|e| PatientError::DatabaseError(format!("Failed to parse patient: {}", e)))
    }

    pub async fn delete_by_id(&self, patient_id: i64) -> Result<(), PatientError> {
        debug!("Deleting patient: {}", patient_id);

        // Look the row up first so a missing id maps to 404.
        self.find_by_id(patient_id).await?;

        let path = format!("/rest/v1/patients?id=eq.{}", patient_id);
        self.store
            .execute(Method::DELETE, &path)
            .await
            .map_err(|e| PatientError::DatabaseError(e.to_string()))
    }

    pub async fn delete_all(&self) -> Result<(), PatientError> {
        debug!("Deleting all patients");

        self.store
            .execute(Method::DELETE, "/rest/v1/patients?id=gte.0")
            .await
            .map_err(|e| PatientError::DatabaseError(e.to_string()))
    }
}
