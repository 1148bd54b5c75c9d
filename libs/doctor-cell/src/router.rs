use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::registry::DoctorRegistryService;

/// Routes carry their full paths and are merged into the top-level router;
/// the appointment cell also owns a route under `/doctors/{doctor_id}`.
pub fn doctor_routes(registry: Arc<DoctorRegistryService>) -> Router {
    Router::new()
        .route(
            "/doctors",
            post(handlers::add_doctor).get(handlers::list_doctors),
        )
        .route("/doctors/{doctor_id}", get(handlers::get_doctor))
        .with_state(registry)
}
