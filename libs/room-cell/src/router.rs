use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn room_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::list_rooms))
        .route("/", post(handlers::create_room))
        .route("/", delete(handlers::delete_all_rooms))
        .route("/{room_name}", get(handlers::get_room))
        .route("/{room_name}", delete(handlers::delete_room))
        .with_state(state)
}
