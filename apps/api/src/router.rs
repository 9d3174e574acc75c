use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};

use appointment_cell::router::appointment_routes;
use doctor_cell::router::doctor_routes;
use patient_cell::router::patient_routes;
use room_cell::router::room_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Hospital API is running!" }))
        .nest("/api/doctors", doctor_routes(state.clone()))
        .nest("/api/patients", patient_routes(state.clone()))
        .nest("/api/rooms", room_routes(state.clone()))
        .nest("/api/appointments", appointment_routes(state))
}
