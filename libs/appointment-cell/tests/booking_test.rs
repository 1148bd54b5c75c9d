mod common;

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::AppointmentError;
use notification_cell::WebhookNotifier;
use shared_models::AppointmentStatus;

use common::{add_doctor, booking_request, clinic, clinic_with_notifier};

#[tokio::test]
async fn booking_creates_active_appointment_and_debits_slot() {
    let clinic = clinic();
    let doctor_id = add_doctor(&clinic.store, 3).await;

    let appointment = clinic
        .booking
        .book(doctor_id, booking_request("2024-12-01T10:00:00"))
        .await
        .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Active);
    assert_eq!(appointment.doctor_id, doctor_id);
    assert_eq!(
        clinic.store.get_doctor(doctor_id).await.unwrap().remaining_slots,
        2
    );
}

#[tokio::test]
async fn booking_unknown_doctor_reports_not_found_first() {
    let clinic = clinic();

    // Even with an out-of-hours time, the missing doctor wins
    let mut request = booking_request("2024-12-01T03:00:00");
    request.patient_email = "not-an-email".to_string();
    let result = clinic.booking.book(404, request).await;
    assert_matches!(result, Err(AppointmentError::DoctorNotFound));
}

#[tokio::test]
async fn booking_rejects_blank_patient_name() {
    let clinic = clinic();
    let doctor_id = add_doctor(&clinic.store, 3).await;

    let mut request = booking_request("2024-12-01T10:00:00");
    request.patient_name = "  ".to_string();
    let result = clinic.booking.book(doctor_id, request).await;
    assert_matches!(result, Err(AppointmentError::Validation(_)));
    assert!(clinic.ledger.list().await.is_empty());
}

#[tokio::test]
async fn booking_rejects_malformed_email() {
    let clinic = clinic();
    let doctor_id = add_doctor(&clinic.store, 3).await;

    for email in ["plainaddress", "missing@tld", "@no-local.com", "a b@c.de"] {
        let mut request = booking_request("2024-12-01T10:00:00");
        request.patient_email = email.to_string();
        let result = clinic.booking.book(doctor_id, request).await;
        assert_matches!(result, Err(AppointmentError::Validation(_)), "email {email:?}");
    }

    // No slot was consumed by any rejected attempt
    assert_eq!(
        clinic.store.get_doctor(doctor_id).await.unwrap().remaining_slots,
        3
    );
}

#[tokio::test]
async fn booking_window_is_half_open() {
    let clinic = clinic();
    let doctor_id = add_doctor(&clinic.store, 10).await;

    // Opening edge is bookable
    assert!(clinic
        .booking
        .book(doctor_id, booking_request("2024-12-01T09:00:00"))
        .await
        .is_ok());

    // Closing edge is not
    let at_close = clinic
        .booking
        .book(doctor_id, booking_request("2024-12-01T17:00:00"))
        .await;
    assert_matches!(at_close, Err(AppointmentError::InvalidTimeWindow(_)));

    let before_open = clinic
        .booking
        .book(doctor_id, booking_request("2024-12-01T08:59:59"))
        .await;
    assert_matches!(before_open, Err(AppointmentError::InvalidTimeWindow(_)));

    let last_minute = clinic
        .booking
        .book(doctor_id, booking_request("2024-12-01T16:59:59"))
        .await;
    assert!(last_minute.is_ok());
}

#[tokio::test]
async fn booking_with_no_capacity_is_rejected_not_queued() {
    let clinic = clinic();
    let doctor_id = add_doctor(&clinic.store, 0).await;

    let result = clinic
        .booking
        .book(doctor_id, booking_request("2024-12-01T10:00:00"))
        .await;
    assert_matches!(result, Err(AppointmentError::NoAvailability));
    assert!(clinic.ledger.list().await.is_empty());
}

/// Capacity is the only booking gate: the same patient may hold several
/// active appointments at one instant as long as the doctor has slots left.
#[tokio::test]
async fn same_time_bookings_coexist_while_capacity_remains() {
    let clinic = clinic();
    let doctor_id = add_doctor(&clinic.store, 2).await;

    let first = clinic
        .booking
        .book(doctor_id, booking_request("2024-12-01T10:00:00"))
        .await
        .unwrap();
    let second = clinic
        .booking
        .book(doctor_id, booking_request("2024-12-01T10:00:00"))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    // The third attempt fails on capacity, not on the shared instant
    let third = clinic
        .booking
        .book(doctor_id, booking_request("2024-12-01T10:00:00"))
        .await;
    assert_matches!(third, Err(AppointmentError::NoAvailability));
}

#[tokio::test]
async fn booking_preserves_notes_and_normalizes_email() {
    let clinic = clinic();
    let doctor_id = add_doctor(&clinic.store, 1).await;

    let mut request = booking_request("2024-12-01T10:00:00");
    request.patient_email = "  Amina@Example.COM ".to_string();
    request.notes = Some("first visit".to_string());

    let appointment = clinic.booking.book(doctor_id, request).await.unwrap();
    assert_eq!(appointment.patient_email, "amina@example.com");
    assert_eq!(appointment.notes.as_deref(), Some("first visit"));
}

#[tokio::test]
async fn booking_emits_webhook_event_after_commit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events"))
        .and(body_partial_json(serde_json::json!({
            "kind": "booking_confirmed",
            "patient_email": "amina@example.com",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(WebhookNotifier::with_endpoint(format!(
        "{}/events",
        server.uri()
    )));
    let clinic = clinic_with_notifier(notifier);
    let doctor_id = add_doctor(&clinic.store, 1).await;

    clinic
        .booking
        .book(doctor_id, booking_request("2024-12-01T10:00:00"))
        .await
        .unwrap();

    // Delivery is detached; give the spawned task a moment
    tokio::time::sleep(Duration::from_millis(200)).await;
    server.verify().await;
}

#[tokio::test]
async fn failing_webhook_never_fails_the_booking() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let notifier = Arc::new(WebhookNotifier::with_endpoint(format!(
        "{}/events",
        server.uri()
    )));
    let clinic = clinic_with_notifier(notifier);
    let doctor_id = add_doctor(&clinic.store, 1).await;

    let appointment = clinic
        .booking
        .book(doctor_id, booking_request("2024-12-01T10:00:00"))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;
    // Booking stands despite the dead webhook
    assert!(clinic.ledger.get(appointment.id).await.is_ok());
    assert_eq!(
        clinic.store.get_doctor(doctor_id).await.unwrap().remaining_slots,
        0
    );
}
