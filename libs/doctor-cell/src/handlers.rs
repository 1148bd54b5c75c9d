use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared_models::error::AppError;
use shared_models::Doctor;

use crate::models::CreateDoctorRequest;
use crate::services::registry::DoctorRegistryService;

#[axum::debug_handler]
pub async fn add_doctor(
    State(registry): State<Arc<DoctorRegistryService>>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Doctor>), AppError> {
    let doctor = registry.add(request).await?;
    Ok((StatusCode::CREATED, Json(doctor)))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(registry): State<Arc<DoctorRegistryService>>,
) -> Result<Json<Vec<Doctor>>, AppError> {
    Ok(Json(registry.list().await))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(registry): State<Arc<DoctorRegistryService>>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Doctor>, AppError> {
    let doctor = registry.get(doctor_id).await?;
    Ok(Json(doctor))
}
