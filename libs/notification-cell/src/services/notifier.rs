use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use shared_config::AppConfig;

use crate::models::NotificationEvent;

/// Best-effort outbound notification. Implementations must swallow their own
/// failures; a dead notification channel never fails a booking or a
/// cancellation.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, event: NotificationEvent);
}

/// Delivers events as JSON POSTs to a configured webhook endpoint.
///
/// With no endpoint configured the event is logged and dropped, which keeps
/// local development working without any downstream service.
pub struct WebhookNotifier {
    client: Client,
    endpoint: Option<String>,
}

impl WebhookNotifier {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.notification_webhook_url.clone(),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: Some(endpoint.into()),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, event: NotificationEvent) {
        let Some(endpoint) = &self.endpoint else {
            info!(
                "Notification delivery disabled, dropping {} for appointment {}",
                event.kind, event.appointment.id
            );
            return;
        };

        debug!(
            "Delivering {} for appointment {} to {}",
            event.kind, event.appointment.id, endpoint
        );

        match self.client.post(endpoint).json(&event).send().await {
            Ok(response) if response.status().is_success() => {
                info!(
                    "Delivered {} notification for appointment {}",
                    event.kind, event.appointment.id
                );
            }
            Ok(response) => {
                warn!(
                    "Notification endpoint returned {} for appointment {}",
                    response.status(),
                    event.appointment.id
                );
            }
            Err(err) => {
                warn!(
                    "Failed to deliver {} notification for appointment {}: {}",
                    event.kind, event.appointment.id, err
                );
            }
        }
    }
}

/// Discards every event. Used by tests that exercise the engines without a
/// notification channel.
#[derive(Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, _event: NotificationEvent) {}
}
