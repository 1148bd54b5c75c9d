use std::env;

use chrono::NaiveTime;
use tracing::warn;

/// The time-of-day window during which appointments may be scheduled.
///
/// Half-open: `open` is bookable, `close` is not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl BusinessHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    pub fn contains(&self, time_of_day: NaiveTime) -> bool {
        self.open <= time_of_day && time_of_day < self.close
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        // 09:00..17:00, the clinic's canonical working day
        Self {
            open: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            close: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub business_hours: BusinessHours,
    pub notification_webhook_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| {
                warn!("PORT not set or invalid, using default 3000");
                3000
            });

        let defaults = BusinessHours::default();
        let open = parse_time_var("CLINIC_OPEN_TIME", defaults.open);
        let close = parse_time_var("CLINIC_CLOSE_TIME", defaults.close);

        let notification_webhook_url = env::var("NOTIFICATION_WEBHOOK_URL").ok();
        if notification_webhook_url.is_none() {
            warn!("NOTIFICATION_WEBHOOK_URL not set, notifications will be logged only");
        }

        Self {
            port,
            business_hours: BusinessHours::new(open, close),
            notification_webhook_url,
        }
    }
}

fn parse_time_var(name: &str, default: NaiveTime) -> NaiveTime {
    match env::var(name) {
        Ok(raw) => match NaiveTime::parse_from_str(&raw, "%H:%M") {
            Ok(t) => t,
            Err(_) => {
                warn!("{} value {:?} is not HH:MM, using default {}", name, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}
