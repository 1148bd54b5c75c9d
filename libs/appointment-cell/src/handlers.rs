use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{AppointmentResponse, BookAppointmentRequest};
use crate::router::AppointmentCellState;

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<AppointmentCellState>,
    Path(doctor_id): Path<i64>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    let appointment = state.booking.book(doctor_id, request).await?;
    let doctor = state.ledger.doctor_of(&appointment).await?;
    Ok((
        StatusCode::CREATED,
        Json(AppointmentResponse::from_parts(appointment, &doctor)),
    ))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppointmentCellState>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let appointments = state.ledger.list().await;
    let mut responses = Vec::with_capacity(appointments.len());
    for appointment in appointments {
        let doctor = state.ledger.doctor_of(&appointment).await?;
        responses.push(AppointmentResponse::from_parts(appointment, &doctor));
    }
    Ok(Json(responses))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<AppointmentCellState>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = state.ledger.get(appointment_id).await?;
    let doctor = state.ledger.doctor_of(&appointment).await?;
    Ok(Json(AppointmentResponse::from_parts(appointment, &doctor)))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<AppointmentCellState>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    state.cancellation.cancel(appointment_id).await?;
    Ok(Json(json!({
        "message": format!("Appointment {} has been successfully cancelled", appointment_id)
    })))
}
