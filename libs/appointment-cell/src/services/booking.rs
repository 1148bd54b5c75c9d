use std::sync::Arc;

use regex::Regex;
use tracing::{info, warn};

use notification_cell::{NotificationKind, Notifier};
use shared_config::BusinessHours;
use shared_models::{Appointment, NewAppointment};
use shared_store::{ClinicStore, StoreError};

use crate::models::{AppointmentError, BookAppointmentRequest};
use crate::services::dispatch_notification;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const MAX_EMAIL_LEN: usize = 254;

/// Booking engine: validates a request against business-hours rules and the
/// doctor's slot counter, then books through the store's transactional path.
///
/// The capacity check and the slot debit both happen inside
/// `ClinicStore::book_appointment` under the doctor's row lock; this service
/// never does a bare check-then-act on the counter.
pub struct BookingService {
    store: Arc<ClinicStore>,
    notifier: Arc<dyn Notifier>,
    hours: BusinessHours,
    email_pattern: Regex,
}

impl BookingService {
    pub fn new(store: Arc<ClinicStore>, notifier: Arc<dyn Notifier>, hours: BusinessHours) -> Self {
        Self {
            store,
            notifier,
            hours,
            email_pattern: Regex::new(EMAIL_PATTERN).unwrap(),
        }
    }

    pub async fn book(
        &self,
        doctor_id: i64,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        // Resolve the doctor first so a missing id reports as not-found even
        // when the rest of the request is also bad.
        self.store
            .get_doctor(doctor_id)
            .await
            .map_err(|_| AppointmentError::DoctorNotFound)?;

        let patient_name = request.patient_name.trim();
        if patient_name.is_empty() {
            return Err(AppointmentError::Validation(
                "Patient name cannot be empty".to_string(),
            ));
        }
        let patient_email = request.patient_email.trim().to_lowercase();
        if !self.email_pattern.is_match(&patient_email) || patient_email.len() > MAX_EMAIL_LEN {
            return Err(AppointmentError::Validation(
                "Invalid email format".to_string(),
            ));
        }

        let time_of_day = request.appointment_time.time();
        if !self.hours.contains(time_of_day) {
            warn!(
                "Rejected booking with doctor {} at {}: outside {}..{}",
                doctor_id, time_of_day, self.hours.open, self.hours.close
            );
            return Err(AppointmentError::InvalidTimeWindow(time_of_day));
        }

        let (appointment, doctor) = self
            .store
            .book_appointment(
                doctor_id,
                NewAppointment {
                    patient_name: patient_name.to_string(),
                    patient_email,
                    appointment_time: request.appointment_time,
                    notes: request.notes,
                },
            )
            .await
            .map_err(|err| match err {
                StoreError::DoctorNotFound(_) => AppointmentError::DoctorNotFound,
                StoreError::NoRemainingSlots(_) => AppointmentError::NoAvailability,
                other => AppointmentError::Storage(other.to_string()),
            })?;

        info!(
            "Appointment {} booked with doctor {} at {}, {} slots left",
            appointment.id, doctor.id, appointment.appointment_time, doctor.remaining_slots
        );

        dispatch_notification(
            &self.notifier,
            NotificationKind::BookingConfirmed,
            appointment.clone(),
            doctor,
        );

        Ok(appointment)
    }
}
