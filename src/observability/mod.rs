//! Observability for the car sensors API
//!
//! - Structured logging through `tracing`
//! - Typed lifecycle events
//!
//! Observability is read-only: nothing logged here changes a request's
//! outcome.
//!
//! # Usage
//!
//! ```ignore
//! use car_sensors_api::observability::{init_logging, log_event, Event};
//!
//! init_logging("info");
//! log_event(Event::BootStart);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{env_filter, init_logging};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    if event.is_fatal() {
        tracing::error!(event = event.as_str());
    } else {
        tracing::info!(event = event.as_str());
    }
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let rendered = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ");

    if event.is_fatal() {
        tracing::error!(event = event.as_str(), "{}", rendered);
    } else {
        tracing::info!(event = event.as_str(), "{}", rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::BootStart);
        log_event(Event::StoreConnectFailed);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::Serving, &[("addr", "127.0.0.1:3000")]);
    }
}
