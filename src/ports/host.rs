/// Port for the network host the application is served from.
pub trait HostPort: Send + Sync {
    /// Returns the current host (`hostname[:port]`), or `None` when the
    /// environment exposes no location.
    fn host(&self) -> Option<String>;
}
