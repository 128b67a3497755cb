/// Adapters module - platform-specific implementations of ports.

pub mod global_logger;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::Console;
#[cfg(not(target_arch = "wasm32"))]
pub use native::Console;

pub use global_logger::{logger, set_debug_host};
