pub mod error;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A doctor record as held by the registry.
///
/// `remaining_slots` is the doctor's bookable capacity. It only ever changes
/// through the booking transaction (debit) and the cancellation transaction
/// (credit); the unsigned type keeps it non-negative by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub remaining_slots: u32,
    pub rating: f32,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a doctor, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewDoctor {
    pub name: String,
    pub specialty: String,
    pub remaining_slots: u32,
    pub rating: f32,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub doctor_id: i64,
    pub patient_name: String,
    pub patient_email: String,
    /// Clinic-local wall-clock time; the service runs in a single canonical
    /// business-hours window, no timezone handling.
    pub appointment_time: NaiveDateTime,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn is_cancelled(&self) -> bool {
        self.status == AppointmentStatus::Cancelled
    }
}

/// Input for creating an appointment, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_name: String,
    pub patient_email: String,
    pub appointment_time: NaiveDateTime,
    pub notes: Option<String>,
}

/// Appointment lifecycle state. `Cancelled` is terminal; there is no un-cancel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Active,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Active => write!(f, "active"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}
