/// Platform - Dependency injection container for all ports.
///
/// Every port is held as `Arc<dyn Trait>` so tests can swap in recording or
/// fixed adapters while sharing them with the code under test.
use std::sync::Arc;

use crate::ports::{ClockPort, ConsolePort, HostPort};

#[cfg(not(target_arch = "wasm32"))]
use crate::adapters::native::{Clock, Console, Host};
#[cfg(target_arch = "wasm32")]
use crate::adapters::wasm::{Clock, Console, Host};

#[derive(Clone)]
pub struct Platform {
    console: Arc<dyn ConsolePort>,
    host: Arc<dyn HostPort>,
    clock: Arc<dyn ClockPort>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            console: Arc::new(Console::new()),
            host: Arc::new(Host::new()),
            clock: Arc::new(Clock::new()),
        }
    }

    pub fn with_console(mut self, console: Arc<dyn ConsolePort>) -> Self {
        self.console = console;
        self
    }

    pub fn with_host(mut self, host: Arc<dyn HostPort>) -> Self {
        self.host = host;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn ClockPort>) -> Self {
        self.clock = clock;
        self
    }

    #[inline]
    pub fn console(&self) -> Arc<dyn ConsolePort> {
        Arc::clone(&self.console)
    }

    #[inline]
    pub fn host(&self) -> Arc<dyn HostPort> {
        Arc::clone(&self.host)
    }

    #[inline]
    pub fn clock(&self) -> Arc<dyn ClockPort> {
        Arc::clone(&self.clock)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::adapters::native::{FixedClock, FixedHost, RecordingConsole};
    use crate::domain::ConsoleMethod;

    #[test]
    fn test_platform_default_adapters() {
        let platform = Platform::default();
        assert!(platform.clock().now() > 0.0);
        platform.console().write(ConsoleMethod::Info, &[]);
    }

    #[test]
    fn test_platform_overrides() {
        let console = RecordingConsole::new();
        let platform = Platform::new()
            .with_console(Arc::new(console.clone()))
            .with_host(Arc::new(FixedHost::new("localhost")))
            .with_clock(Arc::new(FixedClock(7.0)));

        platform.console().write(ConsoleMethod::Warn, &[]);
        assert_eq!(console.calls().len(), 1);
        assert_eq!(platform.host().host().as_deref(), Some("localhost"));
        assert_eq!(platform.clock().now(), 7.0);
    }

    #[test]
    fn test_platform_clone_shares_ports() {
        let console = RecordingConsole::new();
        let platform = Platform::new().with_console(Arc::new(console.clone()));
        let cloned = platform.clone();
        cloned.console().write(ConsoleMethod::Debug, &[]);
        assert_eq!(console.calls().len(), 1);
    }
}
