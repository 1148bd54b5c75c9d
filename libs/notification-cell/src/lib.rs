pub mod models;
pub mod services;

pub use models::{NotificationEvent, NotificationKind};
pub use services::notifier::{Notifier, NoopNotifier, WebhookNotifier};
