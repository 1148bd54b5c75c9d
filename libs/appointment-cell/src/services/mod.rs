pub mod booking;
pub mod cancellation;
pub mod ledger;

use std::sync::Arc;

use notification_cell::{NotificationEvent, NotificationKind, Notifier};
use shared_models::{Appointment, Doctor};

/// Hands the event to the notifier on a detached task, after the transaction
/// has committed. Nothing here holds the doctor's lock, and the notifier
/// swallows its own failures.
pub(crate) fn dispatch_notification(
    notifier: &Arc<dyn Notifier>,
    kind: NotificationKind,
    appointment: Appointment,
    doctor: Doctor,
) {
    let notifier = Arc::clone(notifier);
    let event = NotificationEvent::new(kind, appointment, doctor);
    tokio::spawn(async move {
        notifier.notify(event).await;
    });
}
