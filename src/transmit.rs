use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::domain::{DebugHostPolicy, Level, LogEvent};
use crate::platform::Platform;
use crate::ports::{ConsolePort, HostPort, TransmitPort};

const OVERRIDE_NONE: u8 = 0;
const OVERRIDE_OFF: u8 = 1;
const OVERRIDE_ON: u8 = 2;

/// Transmission hook that mirrors events to the console on development hosts.
///
/// The host is looked up for every event. Events on any other host are
/// dropped without output.
pub struct ConsoleTransmit {
    policy: DebugHostPolicy,
    host: Arc<dyn HostPort>,
    console: Arc<dyn ConsolePort>,
    forced: AtomicU8,
}

impl ConsoleTransmit {
    pub fn new(policy: DebugHostPolicy, platform: &Platform) -> Self {
        Self {
            policy,
            host: platform.host(),
            console: platform.console(),
            forced: AtomicU8::new(OVERRIDE_NONE),
        }
    }

    /// Forces the debug-host condition on or off. `None` goes back to the policy.
    pub fn set_debug_host(&self, enabled: Option<bool>) {
        let value = match enabled {
            None => OVERRIDE_NONE,
            Some(false) => OVERRIDE_OFF,
            Some(true) => OVERRIDE_ON,
        };
        self.forced.store(value, Ordering::SeqCst);
    }

    pub fn is_debug_host(&self) -> bool {
        match self.forced.load(Ordering::SeqCst) {
            OVERRIDE_OFF => false,
            OVERRIDE_ON => true,
            _ => self.policy.is_debug_host(self.host.host().as_deref()),
        }
    }
}

impl TransmitPort for ConsoleTransmit {
    fn send(&self, level: Level, event: &LogEvent) {
        if !self.is_debug_host() {
            return;
        }
        let method = level.console_method();
        #[cfg(target_arch = "wasm32")]
        if let Some(raw) = &event.raw {
            self.console.write_raw(method, raw);
            return;
        }
        self.console.write(method, &event.messages);
    }
}
