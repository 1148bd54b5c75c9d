use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::booking::BookingService;
use crate::services::cancellation::CancellationService;
use crate::services::ledger::LedgerService;

#[derive(Clone)]
pub struct AppointmentCellState {
    pub booking: Arc<BookingService>,
    pub cancellation: Arc<CancellationService>,
    pub ledger: Arc<LedgerService>,
}

/// Routes are rooted at `/` because booking lives under the doctor path while
/// the ledger and cancellation live under `/appointments`.
pub fn appointment_routes(state: AppointmentCellState) -> Router {
    Router::new()
        .route(
            "/doctors/{doctor_id}/appointments",
            post(handlers::book_appointment),
        )
        .route("/appointments", get(handlers::list_appointments))
        .route(
            "/appointments/{appointment_id}",
            get(handlers::get_appointment).delete(handlers::cancel_appointment),
        )
        .with_state(state)
}
