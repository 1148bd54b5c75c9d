use serde::Serialize;
use std::fmt;

use shared_models::{Appointment, Doctor};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    BookingConfirmed,
    AppointmentCancelled,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::BookingConfirmed => write!(f, "booking_confirmed"),
            NotificationKind::AppointmentCancelled => write!(f, "appointment_cancelled"),
        }
    }
}

/// Outbound event describing a booking or cancellation. Snapshots of the
/// appointment and doctor are taken after the transaction commits, so the
/// notifier never needs to reach back into the store.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationEvent {
    pub kind: NotificationKind,
    pub appointment: Appointment,
    pub doctor: Doctor,
    pub patient_email: String,
}

impl NotificationEvent {
    pub fn new(kind: NotificationKind, appointment: Appointment, doctor: Doctor) -> Self {
        let patient_email = appointment.patient_email.clone();
        Self {
            kind,
            appointment,
            doctor,
            patient_email,
        }
    }
}
