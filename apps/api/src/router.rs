use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use appointment_cell::{AppointmentCellState, BookingService, CancellationService, LedgerService};
use doctor_cell::router::doctor_routes;
use doctor_cell::DoctorRegistryService;
use notification_cell::{Notifier, WebhookNotifier};
use shared_config::AppConfig;
use shared_store::ClinicStore;

pub fn create_router(config: &AppConfig) -> Router {
    // One store and one notifier shared by every cell
    let store = Arc::new(ClinicStore::new());
    let notifier: Arc<dyn Notifier> = Arc::new(WebhookNotifier::new(config));

    let registry = Arc::new(DoctorRegistryService::new(Arc::clone(&store)));
    let appointments = AppointmentCellState {
        booking: Arc::new(BookingService::new(
            Arc::clone(&store),
            Arc::clone(&notifier),
            config.business_hours,
        )),
        cancellation: Arc::new(CancellationService::new(Arc::clone(&store), notifier)),
        ledger: Arc::new(LedgerService::new(store)),
    };

    Router::new()
        .route("/", get(|| async { "Clinic booking API is running!" }))
        .merge(doctor_routes(registry))
        .merge(appointment_routes(appointments))
}
