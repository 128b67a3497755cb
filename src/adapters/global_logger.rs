/// Global logger instance - built once, on first use, from the fixed default config.
///
/// Uses the default adapters of the current build target (browser console and
/// `location.host` on WASM, stdout/stderr and `DEVCONSOLE_HOST` natively).
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::config::CONFIG;
use crate::logger::Logger;
use crate::platform::Platform;
use crate::ports::TransmitPort;
use crate::transmit::ConsoleTransmit;

static TRANSMIT: Lazy<Arc<ConsoleTransmit>> =
    Lazy::new(|| Arc::new(ConsoleTransmit::new(CONFIG.debug_host(), &Platform::new())));

pub static LOGGER: Lazy<Logger> = Lazy::new(|| {
    let transmit = CONFIG
        .browser
        .transmit
        .as_ref()
        .map(|_| Arc::clone(&*TRANSMIT) as Arc<dyn TransmitPort>);
    Logger::with_transmit(CONFIG.clone(), &Platform::new(), transmit)
});

/// Get the global logger instance.
#[inline]
pub fn logger() -> &'static Logger {
    &LOGGER
}

/// Overrides the debug-host condition of the global logger's hook.
pub fn set_debug_host(enabled: Option<bool>) {
    TRANSMIT.set_debug_host(enabled);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::domain::{Level, LevelFilter};
    use serde_json::json;

    #[test]
    fn test_global_logger_is_singleton() {
        assert!(std::ptr::eq(logger(), logger()));
        assert_eq!(logger().level(), LevelFilter::Silent);
        assert!(logger().is_transmit_enabled(Level::Debug));
    }

    #[test]
    fn test_global_logger_never_fails() {
        set_debug_host(Some(true));
        logger().info(vec![json!("user %s logged in"), json!("alice")]);
        logger().fatal(vec![]);
        set_debug_host(None);
        logger().warn(vec![json!(null)]);
    }
}
