use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use shared_models::{Appointment, AppointmentStatus, Doctor, NewAppointment, NewDoctor};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("doctor {0} does not exist")]
    DoctorNotFound(i64),

    #[error("appointment {0} does not exist")]
    AppointmentNotFound(i64),

    #[error("doctor {0} has no remaining slots")]
    NoRemainingSlots(i64),

    #[error("appointment {0} is already cancelled")]
    AlreadyCancelled(i64),
}

/// In-process transactional record store for doctors and appointments.
///
/// Every doctor row sits behind its own async mutex. The two transactional
/// operations (`book_appointment`, `cancel_appointment`) hold that mutex plus
/// the appointment-table write lock across both of their paired mutations, so
/// no concurrent caller can observe a debited counter without its appointment
/// record or vice versa. Operations against different doctors never contend.
///
/// Lock order is always doctor row first, then the appointment table.
pub struct ClinicStore {
    doctors: RwLock<BTreeMap<i64, Arc<Mutex<Doctor>>>>,
    appointments: RwLock<BTreeMap<i64, Appointment>>,
    next_doctor_id: AtomicI64,
    next_appointment_id: AtomicI64,
}

impl ClinicStore {
    pub fn new() -> Self {
        Self {
            doctors: RwLock::new(BTreeMap::new()),
            appointments: RwLock::new(BTreeMap::new()),
            next_doctor_id: AtomicI64::new(1),
            next_appointment_id: AtomicI64::new(1),
        }
    }

    pub async fn insert_doctor(&self, new: NewDoctor) -> Doctor {
        let id = self.next_doctor_id.fetch_add(1, Ordering::SeqCst);
        let doctor = Doctor {
            id,
            name: new.name,
            specialty: new.specialty,
            remaining_slots: new.remaining_slots,
            rating: new.rating,
            location: new.location,
            created_at: Utc::now(),
        };

        let mut doctors = self.doctors.write().await;
        doctors.insert(id, Arc::new(Mutex::new(doctor.clone())));
        debug!("Inserted doctor {} ({})", id, doctor.name);
        doctor
    }

    pub async fn get_doctor(&self, doctor_id: i64) -> Result<Doctor, StoreError> {
        let row = self.doctor_row(doctor_id).await?;
        let doctor = row.lock().await;
        Ok(doctor.clone())
    }

    /// All doctors in insertion order (ids are assigned monotonically).
    pub async fn list_doctors(&self) -> Vec<Doctor> {
        let doctors = self.doctors.read().await;
        let mut result = Vec::with_capacity(doctors.len());
        for row in doctors.values() {
            result.push(row.lock().await.clone());
        }
        result
    }

    pub async fn get_appointment(&self, appointment_id: i64) -> Result<Appointment, StoreError> {
        let appointments = self.appointments.read().await;
        appointments
            .get(&appointment_id)
            .cloned()
            .ok_or(StoreError::AppointmentNotFound(appointment_id))
    }

    /// All appointments in insertion order, cancelled ones included.
    pub async fn list_appointments(&self) -> Vec<Appointment> {
        let appointments = self.appointments.read().await;
        appointments.values().cloned().collect()
    }

    /// Transactional booking: debit one slot from the doctor and insert the
    /// appointment as a single unit of work under the doctor's row lock.
    ///
    /// The capacity check happens here, under the lock, so two simultaneous
    /// bookings against a doctor with one remaining slot cannot both win.
    pub async fn book_appointment(
        &self,
        doctor_id: i64,
        new: NewAppointment,
    ) -> Result<(Appointment, Doctor), StoreError> {
        let row = self.doctor_row(doctor_id).await?;
        let mut doctor = row.lock().await;

        if doctor.remaining_slots == 0 {
            return Err(StoreError::NoRemainingSlots(doctor_id));
        }

        let mut appointments = self.appointments.write().await;
        let id = self.next_appointment_id.fetch_add(1, Ordering::SeqCst);
        let appointment = Appointment {
            id,
            doctor_id,
            patient_name: new.patient_name,
            patient_email: new.patient_email,
            appointment_time: new.appointment_time,
            status: AppointmentStatus::Active,
            notes: new.notes,
            created_at: Utc::now(),
        };

        doctor.remaining_slots -= 1;
        appointments.insert(id, appointment.clone());

        debug!(
            "Booked appointment {} with doctor {}, {} slots left",
            id, doctor_id, doctor.remaining_slots
        );
        Ok((appointment, doctor.clone()))
    }

    /// Transactional cancellation: flip the appointment to `Cancelled` and
    /// credit the slot back to its doctor as a single unit of work.
    pub async fn cancel_appointment(
        &self,
        appointment_id: i64,
    ) -> Result<(Appointment, Doctor), StoreError> {
        let doctor_id = {
            let appointments = self.appointments.read().await;
            appointments
                .get(&appointment_id)
                .map(|a| a.doctor_id)
                .ok_or(StoreError::AppointmentNotFound(appointment_id))?
        };

        let row = self.doctor_row(doctor_id).await?;
        let mut doctor = row.lock().await;
        let mut appointments = self.appointments.write().await;

        // Re-read under the lock; a concurrent cancel may have beaten us here.
        let appointment = appointments
            .get_mut(&appointment_id)
            .ok_or(StoreError::AppointmentNotFound(appointment_id))?;
        if appointment.status == AppointmentStatus::Cancelled {
            return Err(StoreError::AlreadyCancelled(appointment_id));
        }

        appointment.status = AppointmentStatus::Cancelled;
        doctor.remaining_slots += 1;

        debug!(
            "Cancelled appointment {}, doctor {} back to {} slots",
            appointment_id, doctor_id, doctor.remaining_slots
        );
        Ok((appointment.clone(), doctor.clone()))
    }

    async fn doctor_row(&self, doctor_id: i64) -> Result<Arc<Mutex<Doctor>>, StoreError> {
        let doctors = self.doctors.read().await;
        doctors
            .get(&doctor_id)
            .cloned()
            .ok_or(StoreError::DoctorNotFound(doctor_id))
    }
}

impl Default for ClinicStore {
    fn default() -> Self {
        Self::new()
    }
}
