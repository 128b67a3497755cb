use serde_json::Value;

use crate::domain::ConsoleMethod;

/// Console port - the output surface log events are written to.
///
/// Abstracts the console from platform-specific implementations:
/// - WASM: Console API (console.debug, console.error, etc.)
/// - Native: stdout / stderr
pub trait ConsolePort: Send + Sync {
    /// Write `args` positionally through the given console method.
    ///
    /// Implementations must not panic and must not reorder or format the
    /// arguments beyond what the output surface itself does.
    fn write(&self, method: ConsoleMethod, args: &[Value]);

    /// Write JavaScript values exactly as a caller passed them.
    #[cfg(target_arch = "wasm32")]
    fn write_raw(&self, method: ConsoleMethod, args: &js_sys::Array);
}
