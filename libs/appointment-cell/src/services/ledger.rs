use std::sync::Arc;

use shared_models::{Appointment, Doctor};
use shared_store::ClinicStore;

use crate::models::AppointmentError;

/// Read-side of the appointment ledger. Record creation and mutation go
/// through the booking and cancellation engines only.
pub struct LedgerService {
    store: Arc<ClinicStore>,
}

impl LedgerService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, appointment_id: i64) -> Result<Appointment, AppointmentError> {
        self.store
            .get_appointment(appointment_id)
            .await
            .map_err(|_| AppointmentError::NotFound)
    }

    /// All appointments, cancelled included, in insertion order.
    pub async fn list(&self) -> Vec<Appointment> {
        self.store.list_appointments().await
    }

    /// The doctor an appointment references. Appointments are only created
    /// against existing doctors and doctors are never deleted, so a miss here
    /// is a storage fault, not a caller error.
    pub async fn doctor_of(&self, appointment: &Appointment) -> Result<Doctor, AppointmentError> {
        self.store
            .get_doctor(appointment.doctor_id)
            .await
            .map_err(|err| AppointmentError::Storage(err.to_string()))
    }
}
