use crate::domain::{Level, LogEvent};

/// Transmission hook - a side channel fed every event that passes the
/// transmit threshold, independently of the logger's own level.
pub trait TransmitPort: Send + Sync {
    /// Receives one event. Fire-and-forget: must not panic and returns nothing.
    fn send(&self, level: Level, event: &LogEvent);
}
