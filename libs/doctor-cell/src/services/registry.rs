use std::sync::Arc;

use tracing::info;

use shared_models::{Doctor, NewDoctor};
use shared_store::ClinicStore;

use crate::models::{CreateDoctorRequest, DoctorError};

const MIN_RATING: f32 = 1.0;
const MAX_RATING: f32 = 5.0;

/// Doctor registry: validates and creates doctor records, serves lookups.
///
/// The registry never touches `remaining_slots` after creation; only the
/// booking and cancellation engines mutate it.
pub struct DoctorRegistryService {
    store: Arc<ClinicStore>,
}

impl DoctorRegistryService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn add(&self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(DoctorError::Validation("Name cannot be empty".to_string()));
        }
        let specialty = request.specialty.trim();
        if specialty.is_empty() {
            return Err(DoctorError::Validation(
                "Specialty cannot be empty".to_string(),
            ));
        }
        // Covers both negative values and counts beyond the stored width
        let remaining_slots = u32::try_from(request.remaining_slots).map_err(|_| {
            DoctorError::Validation(format!(
                "Remaining slots must be between 0 and {}",
                u32::MAX
            ))
        })?;
        if !(MIN_RATING..=MAX_RATING).contains(&request.rating) {
            return Err(DoctorError::Validation(format!(
                "Rating must be between {:.1} and {:.1}",
                MIN_RATING, MAX_RATING
            )));
        }

        let doctor = self
            .store
            .insert_doctor(NewDoctor {
                name: name.to_string(),
                specialty: specialty.to_string(),
                remaining_slots,
                rating: request.rating,
                location: request.location.trim().to_string(),
            })
            .await;

        info!(
            "Registered doctor {} ({}, {}) with {} slots",
            doctor.id, doctor.name, doctor.specialty, doctor.remaining_slots
        );
        Ok(doctor)
    }

    pub async fn get(&self, doctor_id: i64) -> Result<Doctor, DoctorError> {
        self.store
            .get_doctor(doctor_id)
            .await
            .map_err(|_| DoctorError::NotFound)
    }

    pub async fn list(&self) -> Vec<Doctor> {
        self.store.list_doctors().await
    }
}
