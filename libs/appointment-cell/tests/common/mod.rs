#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDateTime;

use appointment_cell::{
    AppointmentCellState, BookAppointmentRequest, BookingService, CancellationService,
    LedgerService,
};
use notification_cell::{NoopNotifier, Notifier};
use shared_config::BusinessHours;
use shared_models::NewDoctor;
use shared_store::ClinicStore;

pub struct TestClinic {
    pub store: Arc<ClinicStore>,
    pub booking: BookingService,
    pub cancellation: CancellationService,
    pub ledger: LedgerService,
}

pub fn clinic() -> TestClinic {
    clinic_with_notifier(Arc::new(NoopNotifier))
}

pub fn clinic_with_notifier(notifier: Arc<dyn Notifier>) -> TestClinic {
    let store = Arc::new(ClinicStore::new());
    TestClinic {
        booking: BookingService::new(
            Arc::clone(&store),
            Arc::clone(&notifier),
            BusinessHours::default(),
        ),
        cancellation: CancellationService::new(Arc::clone(&store), notifier),
        ledger: LedgerService::new(Arc::clone(&store)),
        store,
    }
}

pub fn cell_state(notifier: Arc<dyn Notifier>) -> (Arc<ClinicStore>, AppointmentCellState) {
    let store = Arc::new(ClinicStore::new());
    let state = AppointmentCellState {
        booking: Arc::new(BookingService::new(
            Arc::clone(&store),
            Arc::clone(&notifier),
            BusinessHours::default(),
        )),
        cancellation: Arc::new(CancellationService::new(Arc::clone(&store), notifier)),
        ledger: Arc::new(LedgerService::new(Arc::clone(&store))),
    };
    (store, state)
}

pub async fn add_doctor(store: &ClinicStore, slots: u32) -> i64 {
    store
        .insert_doctor(NewDoctor {
            name: "Dr. Grace Okafor".to_string(),
            specialty: "Cardiology".to_string(),
            remaining_slots: slots,
            rating: 4.6,
            location: "Lagos".to_string(),
        })
        .await
        .id
}

pub fn time(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

pub fn booking_request(at: &str) -> BookAppointmentRequest {
    BookAppointmentRequest {
        patient_name: "Amina Yusuf".to_string(),
        patient_email: "amina@example.com".to_string(),
        appointment_time: time(at),
        notes: None,
    }
}
