use std::sync::Arc;

use tracing::info;

use notification_cell::{NotificationKind, Notifier};
use shared_store::{ClinicStore, StoreError};

use crate::models::AppointmentError;
use crate::services::dispatch_notification;

/// Cancellation engine: flips an active appointment to cancelled and credits
/// the slot back to its doctor, through the store's transactional path.
///
/// Cancelling an already-cancelled appointment is an explicit error, never a
/// silent no-op; the slot must not be credited twice.
pub struct CancellationService {
    store: Arc<ClinicStore>,
    notifier: Arc<dyn Notifier>,
}

impl CancellationService {
    pub fn new(store: Arc<ClinicStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    pub async fn cancel(&self, appointment_id: i64) -> Result<(), AppointmentError> {
        let (appointment, doctor) = self
            .store
            .cancel_appointment(appointment_id)
            .await
            .map_err(|err| match err {
                StoreError::AppointmentNotFound(_) => AppointmentError::NotFound,
                StoreError::AlreadyCancelled(_) => AppointmentError::AlreadyCancelled,
                other => AppointmentError::Storage(other.to_string()),
            })?;

        info!(
            "Appointment {} cancelled, doctor {} back to {} slots",
            appointment.id, doctor.id, doctor.remaining_slots
        );

        dispatch_notification(
            &self.notifier,
            NotificationKind::AppointmentCancelled,
            appointment,
            doctor,
        );

        Ok(())
    }
}
