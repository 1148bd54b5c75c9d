pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{CreateDoctorRequest, DoctorError};
pub use services::registry::DoctorRegistryService;
