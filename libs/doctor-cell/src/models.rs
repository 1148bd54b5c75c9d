use serde::Deserialize;
use thiserror::Error;

use shared_models::error::AppError;

/// Inbound payload for registering a doctor. `remaining_slots` is signed so a
/// negative value can be rejected with a validation error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub specialty: String,
    pub remaining_slots: i64,
    pub rating: f32,
    pub location: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound => AppError::NotFound("Doctor not found".to_string()),
            DoctorError::Validation(msg) => AppError::ValidationError(msg),
        }
    }
}
