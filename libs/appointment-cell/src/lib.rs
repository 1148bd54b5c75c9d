pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{AppointmentError, AppointmentResponse, BookAppointmentRequest};
pub use router::AppointmentCellState;
pub use services::booking::BookingService;
pub use services::cancellation::CancellationService;
pub use services::ledger::LedgerService;
