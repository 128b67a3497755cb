/// Port for the timestamp stamped on each log event
pub trait ClockPort: Send + Sync {
    /// Returns the current timestamp in milliseconds
    fn now(&self) -> f64;
}
