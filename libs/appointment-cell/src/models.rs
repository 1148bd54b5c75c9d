use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;
use shared_models::{Appointment, AppointmentStatus, Doctor};

/// Inbound payload for booking with a specific doctor.
#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_name: String,
    pub patient_email: String,
    pub appointment_time: NaiveDateTime,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Appointment echoed back with its doctor's name and specialty joined in.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentResponse {
    pub id: i64,
    pub patient_name: String,
    pub patient_email: String,
    pub appointment_time: NaiveDateTime,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub doctor_specialty: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AppointmentResponse {
    pub fn from_parts(appointment: Appointment, doctor: &Doctor) -> Self {
        Self {
            id: appointment.id,
            patient_name: appointment.patient_name,
            patient_email: appointment.patient_email,
            appointment_time: appointment.appointment_time,
            doctor_id: doctor.id,
            doctor_name: doctor.name.clone(),
            doctor_specialty: doctor.specialty.clone(),
            status: appointment.status,
            notes: appointment.notes,
            created_at: appointment.created_at,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Appointment time {0} is outside business hours")]
    InvalidTimeWindow(NaiveTime),

    #[error("No available slots for this doctor")]
    NoAvailability,

    #[error("Appointment is already cancelled")]
    AlreadyCancelled,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound => {
                AppError::NotFound("Appointment not found".to_string())
            }
            AppointmentError::DoctorNotFound => {
                AppError::NotFound("Doctor not found".to_string())
            }
            AppointmentError::InvalidTimeWindow(_) => AppError::BadRequest(err.to_string()),
            AppointmentError::NoAvailability => AppError::BadRequest(err.to_string()),
            AppointmentError::AlreadyCancelled => AppError::BadRequest(err.to_string()),
            AppointmentError::Validation(msg) => AppError::ValidationError(msg),
            AppointmentError::Storage(msg) => AppError::Database(msg),
        }
    }
}
