//! Lifecycle events
//!
//! Every startup and shutdown milestone is an explicit, typed event.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Shutdown initiated
    ShutdownStart,
    /// Shutdown complete
    ShutdownComplete,

    // Document store
    /// Connecting to the store
    StoreConnecting,
    /// Store connection established
    StoreConnected,
    /// Store connection failed (FATAL)
    StoreConnectFailed,

    // Server operations
    /// Listener bound, ready for requests
    Serving,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::StoreConnecting => "STORE_CONNECTING",
            Event::StoreConnected => "STORE_CONNECTED",
            Event::StoreConnectFailed => "STORE_CONNECT_FAILED",
            Event::Serving => "SERVING",
        }
    }

    /// Fatal events abort startup
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::StoreConnectFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::BootStart.as_str(), "BOOT_START");
        assert_eq!(Event::StoreConnected.to_string(), "STORE_CONNECTED");
        assert_eq!(Event::Serving.as_str(), "SERVING");
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::StoreConnectFailed.is_fatal());
        assert!(!Event::StoreConnected.is_fatal());
        assert!(!Event::ShutdownComplete.is_fatal());
    }
}
